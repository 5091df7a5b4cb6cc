//! Setuid trampoline for the tor-arm torrc helper.
//!
//! Scripts cannot be made setuid safely on most POSIX systems, so the
//! privileged entry point is this small binary instead. It is installed as
//! `root:<group>` with mode `4750` and does exactly one thing: replace its
//! own process image with a target path that was fixed at build time.
//!
//! - The caller's arguments are never read.
//! - The caller's environment is never forwarded.
//! - The credentials the OS assigned at exec time are left untouched.
//!
//! If the exec fails the process prints one line describing the error and
//! exits with [`EXEC_FAILED_EXIT_CODE`].

mod error;
#[cfg(unix)]
mod identity;
#[cfg(unix)]
mod launcher;
mod logging;
#[cfg(unix)]
mod run_main;
mod target;

pub use error::LaunchError;
#[cfg(unix)]
pub use identity::ProcessIdentity;
#[cfg(unix)]
pub use launcher::Launcher;
pub use logging::{LOG_FILTER, init_logging};
pub use target::{TARGET_PATH, Target};

/// Exit code when the target could not be executed.
pub const EXEC_FAILED_EXIT_CODE: i32 = 1;

/// Run the launcher. Only returns control to the OS through exec or exit.
#[cfg(unix)]
pub fn run_main() -> ! {
    run_main::run_main()
}

#[cfg(not(unix))]
pub fn run_main() -> ! {
    eprintln!("tor-arm-replace-torrc is only supported on Unix");
    std::process::exit(EXEC_FAILED_EXIT_CODE)
}
