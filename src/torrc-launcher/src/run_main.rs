//! Main entry point for the launcher binary.

use std::io::Write;

use crate::{EXEC_FAILED_EXIT_CODE, LaunchError, Launcher, ProcessIdentity, init_logging};

/// Main entry point.
///
/// Command-line arguments are intentionally never read.
pub fn run_main() -> ! {
    init_logging();

    let launcher = match Launcher::builtin() {
        Ok(launcher) => launcher,
        Err(err) => fail(&err),
    };

    let identity = ProcessIdentity::current();
    tracing::debug!(
        path = %launcher.target(),
        uid = identity.uid,
        euid = identity.euid,
        gid = identity.gid,
        egid = identity.egid,
        elevated = identity.is_elevated(),
        hardened = torrc_process_hardening::is_hardening_available(),
        hardening = torrc_process_hardening::hardening_description(),
        "replacing process image"
    );

    let err = launcher.exec();
    fail(&err)
}

/// Report a launch failure on stdout and exit. Never retries.
///
/// A closed or broken stdout does not change the exit code.
fn fail(err: &LaunchError) -> ! {
    tracing::debug!(path = err.target(), errno = ?err.raw_os_error(), "launch failed");
    let _ = writeln!(std::io::stdout(), "{err}");
    std::process::exit(EXEC_FAILED_EXIT_CODE)
}
