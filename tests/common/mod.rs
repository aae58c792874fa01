//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Build a command for the converter binary with its storage redirected
/// into a test directory, keeping tests isolated from the real session
pub fn converter_cmd(storage_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dltm-converter"));
    cmd.env("DLTM_CONVERTER_SESSION_DIR", storage_dir)
        .env("DLTM_CONVERTER_CONFIG_DIR", storage_dir);
    cmd
}

/// Run one conversion through the binary, panicking if it fails
pub fn run_convert(storage_dir: &Path, mode: &str, value1: &str, value2: &str) {
    let output = converter_cmd(storage_dir)
        .args(["convert", "--mode", mode, value1, value2])
        .output()
        .expect("failed to run converter binary");
    assert!(output.status.success(), "conversion {mode} {value1} {value2} failed");
}
