//! Process hardening for the setuid launcher.
//!
//! The launcher runs with the identity of its on-disk owner for a few
//! instructions before it replaces itself. During that window the
//! unprivileged invoker must not be able to attach a debugger or collect a
//! core dump of the privileged process.
//!
//! Only per-process state that the kernel resets on `execve` is changed here.
//! Inherited state such as resource limits is left alone so the exec target
//! starts with exactly what the OS handed the launcher.

#![allow(unsafe_code, clippy::print_stderr)]

/// Exit code when prctl fails on Linux.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const PRCTL_FAILED_EXIT_CODE: i32 = 5;

/// Apply process hardening measures, exiting the process on failure.
///
/// Intended to run before `main` through `#[ctor::ctor]`.
pub fn pre_main_hardening() {
    if let Err(err) = harden() {
        eprintln!("ERROR: {err}");
        #[cfg(any(target_os = "linux", target_os = "android"))]
        std::process::exit(PRCTL_FAILED_EXIT_CODE);
    }
}

/// Apply the hardening measures available on this platform.
///
/// Returns a description of the failed step on error.
pub fn harden() -> Result<(), String> {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        set_non_dumpable()
    }
    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        Ok(())
    }
}

/// Mark the process non-dumpable.
///
/// Blocks ptrace attach and core dumps by non-root users. The flag is
/// recomputed by the kernel on exec.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn set_non_dumpable() -> Result<(), String> {
    let ret_code = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) };
    if ret_code != 0 {
        return Err(format!(
            "prctl(PR_SET_DUMPABLE, 0) failed: {}",
            std::io::Error::last_os_error()
        ));
    }
    Ok(())
}

/// Whether the current process is currently marked dumpable.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn is_dumpable() -> bool {
    unsafe { libc::prctl(libc::PR_GET_DUMPABLE, 0, 0, 0, 0) == 1 }
}

/// Check if process hardening is available on this platform.
pub fn is_hardening_available() -> bool {
    cfg!(any(target_os = "linux", target_os = "android"))
}

/// Get a description of the hardening measures applied on this platform.
pub fn hardening_description() -> &'static str {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        "Linux: PR_SET_DUMPABLE=0"
    }
    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        "Unknown platform: no hardening available"
    }
}
