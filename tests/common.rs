use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Returns a configured Command for `conndial_rs`
pub fn conndial_cmd() -> Command {
    Command::cargo_bin("conndial_rs").expect("Binary not found")
}

/// Writes a config file into a fresh temp dir and returns both.
/// The TempDir must stay alive for the duration of the test.
#[allow(dead_code)]
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("conndial.toml");
    fs::write(&path, contents).expect("Failed to write config file");
    (temp_dir, path)
}
