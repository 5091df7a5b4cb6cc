//! Read-only view of the credentials the OS assigned at exec time.

/// Real and effective user/group IDs of the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub uid: libc::uid_t,
    pub euid: libc::uid_t,
    pub gid: libc::gid_t,
    pub egid: libc::gid_t,
}

impl ProcessIdentity {
    pub fn current() -> Self {
        // These calls cannot fail.
        unsafe {
            Self {
                uid: libc::getuid(),
                euid: libc::geteuid(),
                gid: libc::getgid(),
                egid: libc::getegid(),
            }
        }
    }

    /// True when a setuid or setgid bit changed the effective IDs.
    pub fn is_elevated(&self) -> bool {
        self.uid != self.euid || self.gid != self.egid
    }
}
