//! Build script for torrc-launcher.
//!
//! Resolves the exec target and the log filter at compile time. The
//! launcher runs setuid, so nothing that selects what it executes may be
//! read at run time.

use std::env;

/// Where Debian installs the torrc replacement helper.
const DEFAULT_TARGET: &str = "/usr/bin/tor-arm-replace-torrc.py";

/// Filter used when `TORRC_LAUNCHER_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    let target = env::var("TORRC_LAUNCHER_TARGET")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    if !target.starts_with('/') {
        panic!("TORRC_LAUNCHER_TARGET must be an absolute path, got {target:?}");
    }
    if target.contains('\0') {
        panic!("TORRC_LAUNCHER_TARGET must not contain a NUL byte");
    }

    let log_filter = env::var("TORRC_LAUNCHER_LOG")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Emit cargo instructions
    println!("cargo:rustc-env=TORRC_LAUNCHER_TARGET={}", target);
    println!("cargo:rustc-env=TORRC_LAUNCHER_LOG={}", log_filter);

    println!("cargo:rerun-if-env-changed=TORRC_LAUNCHER_TARGET");
    println!("cargo:rerun-if-env-changed=TORRC_LAUNCHER_LOG");
    println!("cargo:rerun-if-changed=build.rs");
}
