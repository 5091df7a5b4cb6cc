//! Launcher errors.

use std::io;

/// Errors that can stop the launcher from handing off to its target.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The OS refused to replace the process image with the target.
    ///
    /// The display form is the single diagnostic line printed before exit.
    #[error("Failed to execute \"{target}\". Error: {}", os_error_text(.source))]
    ExecFailed {
        target: String,
        #[source]
        source: io::Error,
    },

    /// A target path was rejected before any exec was attempted.
    #[error("Invalid exec target {target:?}: {reason}")]
    InvalidTarget { target: String, reason: &'static str },
}

impl LaunchError {
    /// The errno captured from a failed exec, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::ExecFailed { source, .. } => source.raw_os_error(),
            Self::InvalidTarget { .. } => None,
        }
    }

    /// The path the launcher attempted, or refused, to run.
    pub fn target(&self) -> &str {
        match self {
            Self::ExecFailed { target, .. } | Self::InvalidTarget { target, .. } => target,
        }
    }
}

/// The OS description of an error, as `strerror` renders it.
///
/// `io::Error`'s own `Display` appends ` (os error N)`; the diagnostic line
/// carries only the description.
#[cfg(unix)]
fn os_error_text(err: &io::Error) -> String {
    let Some(code) = err.raw_os_error() else {
        return err.to_string();
    };

    let mut buf = [0 as libc::c_char; 256];
    let ret_code = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if ret_code != 0 {
        return format!("Unknown error {code}");
    }
    unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(not(unix))]
fn os_error_text(err: &io::Error) -> String {
    err.to_string()
}
