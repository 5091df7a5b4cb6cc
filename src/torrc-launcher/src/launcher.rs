//! Process image replacement.

use std::io;

use crate::{LaunchError, Target};

/// Hands the current process over to a fixed target with `execve`.
///
/// The argument vector is always `[target, NULL]` and the environment is
/// always empty. `execve` is called directly rather than through
/// `execvp` or `std::process::Command`, so there is no `PATH` lookup and
/// no `/bin/sh` fallback when the kernel rejects the file format.
#[derive(Debug, Clone)]
pub struct Launcher {
    target: Target,
}

impl Launcher {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// Launcher for the target compiled into this binary.
    pub fn builtin() -> Result<Self, LaunchError> {
        Ok(Self::new(Target::builtin()?))
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Replace the current process image with the target.
    ///
    /// Does not return on success. Any return is a failure, so the result is
    /// the error itself.
    pub fn exec(&self) -> LaunchError {
        let source = self.replace_image();
        LaunchError::ExecFailed {
            target: self.target.to_string(),
            source,
        }
    }

    /// The raw `execve` step. Returns the OS error if the kernel refused.
    ///
    /// The Rust runtime ignores SIGPIPE, and ignored signals survive exec, so
    /// the default disposition is put back for the target and restored again
    /// if the exec fails. Nothing here allocates, so it is safe right after
    /// `fork`.
    fn replace_image(&self) -> io::Error {
        let program = self.target.as_c_str();
        let argv: [*const libc::c_char; 2] = [program.as_ptr(), std::ptr::null()];
        let envp: [*const libc::c_char; 1] = [std::ptr::null()];

        unsafe {
            let previous = libc::signal(libc::SIGPIPE, libc::SIG_DFL);
            libc::execve(program.as_ptr(), argv.as_ptr(), envp.as_ptr());
            // If execve returns, there was an error
            let err = io::Error::last_os_error();
            if previous != libc::SIG_ERR {
                libc::signal(libc::SIGPIPE, previous);
            }
            err
        }
    }
}
