//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file as lines
pub fn fixture_lines(name: &str) -> Vec<String> {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
        .lines()
        .map(str::to_string)
        .collect()
}

/// Pick lines by index
pub fn pick(lines: &[String], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| lines[i].clone()).collect()
}

/// True when `output` appears in `input` in the same relative order.
pub fn is_subsequence(output: &[String], input: &[String]) -> bool {
    let mut cursor = input.iter();
    output.iter().all(|line| cursor.any(|l| l == line))
}
