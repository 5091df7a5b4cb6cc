//! The fixed exec target.

use std::ffi::{CStr, CString};
use std::fmt;

use crate::LaunchError;

/// Absolute path of the helper, baked in by `build.rs`.
///
/// Set `TORRC_LAUNCHER_TARGET` at build time to change it.
pub const TARGET_PATH: &str = env!("TORRC_LAUNCHER_TARGET");

/// A validated absolute path ready to hand to `execve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    path: String,
    c_path: CString,
}

impl Target {
    /// The target compiled into this binary.
    pub fn builtin() -> Result<Self, LaunchError> {
        Self::new(TARGET_PATH)
    }

    /// Validate a target path.
    ///
    /// The path must be absolute and free of NUL bytes. No filesystem
    /// access happens here; whether the file is executable is left to the
    /// kernel at exec time.
    pub fn new(path: impl Into<String>) -> Result<Self, LaunchError> {
        let path = path.into();

        if !path.starts_with('/') {
            return Err(LaunchError::InvalidTarget {
                target: path,
                reason: "path must be absolute",
            });
        }

        let c_path = match CString::new(path.as_str()) {
            Ok(c) => c,
            Err(_) => {
                return Err(LaunchError::InvalidTarget {
                    target: path,
                    reason: "path contains a NUL byte",
                });
            }
        };

        Ok(Self { path, c_path })
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.c_path
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
