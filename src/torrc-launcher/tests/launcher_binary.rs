//! Tests for the built `tor-arm-replace-torrc` binary.
//!
//! These run the real executable. Its target is fixed at build time, so the
//! failure-path tests only run when that target is absent on this machine.

#![cfg(unix)]

use std::os::fd::{FromRawFd, OwnedFd};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use torrc_launcher::{EXEC_FAILED_EXIT_CODE, LOG_FILTER, TARGET_PATH};

const LAUNCHER: &str = env!("CARGO_BIN_EXE_tor-arm-replace-torrc");

fn target_is_missing() -> bool {
    !Path::new(TARGET_PATH).exists()
}

fn run(command: &mut Command) -> Output {
    command.output().expect("failed to spawn launcher")
}

#[test]
fn test_missing_target_exits_with_failure_code() {
    if !target_is_missing() {
        return;
    }

    let output = run(&mut Command::new(LAUNCHER));

    assert_eq!(output.status.code(), Some(EXEC_FAILED_EXIT_CODE));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_target_prints_one_diagnostic_line() {
    if !target_is_missing() {
        return;
    }

    let output = run(&mut Command::new(LAUNCHER));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 1, "unexpected stdout: {stdout:?}");
    assert_eq!(
        lines[0],
        format!("Failed to execute \"{TARGET_PATH}\". Error: No such file or directory")
    );

    if LOG_FILTER == "warn" {
        assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);
    }
}

#[test]
fn test_repeated_failures_are_identical() {
    if !target_is_missing() {
        return;
    }

    let first = run(&mut Command::new(LAUNCHER));
    let second = run(&mut Command::new(LAUNCHER));

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_caller_arguments_are_ignored() {
    if !target_is_missing() {
        return;
    }

    let plain = run(&mut Command::new(LAUNCHER));
    let with_args = run(Command::new(LAUNCHER).args(["/bin/sh", "-c", "id", "--help"]));

    assert_eq!(plain.status.code(), with_args.status.code());
    assert_eq!(plain.stdout, with_args.stdout);
}

#[test]
fn test_caller_environment_is_ignored() {
    if !target_is_missing() {
        return;
    }

    let plain = run(Command::new(LAUNCHER).env_clear());
    let with_env = run(
        Command::new(LAUNCHER)
            .env("TORRC_LAUNCHER_TARGET", "/bin/sh")
            .env("RUST_LOG", "trace")
            .env("PATH", "/tmp"),
    );

    assert_eq!(plain.status.code(), with_env.status.code());
    assert_eq!(plain.stdout, with_env.stdout);
    if LOG_FILTER == "warn" {
        assert!(with_env.stderr.is_empty());
    }
}

#[test]
fn test_closed_stdout_still_exits_with_failure_code() {
    if !target_is_missing() {
        return;
    }

    let mut fds = [0; 2];
    assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0, "pipe failed");
    let (read_end, write_end) = unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) };
    drop(read_end);

    let output = run(
        Command::new(LAUNCHER)
            .stdout(Stdio::from(write_end))
            .stderr(Stdio::piped()),
    );

    assert_eq!(output.status.code(), Some(EXEC_FAILED_EXIT_CODE));
    if LOG_FILTER == "warn" {
        assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);
    }
}
