//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp directory
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path)
        .unwrap_or_else(|_| panic!("Failed to copy fixture: {}", name));
    (temp_dir, path)
}

/// Read a file as lines
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}

/// Run the geoclean binary with HOME pointed at `home` so the user's config
/// is never read.
pub fn run_geoclean(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_geoclean"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1") // Disable colors for consistent output
        .env_remove("GEOCLEAN_LOG")
        .output()
        .expect("Failed to execute geoclean");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Path argument as &str
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("non UTF-8 temp path")
}
