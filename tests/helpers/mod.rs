//! Test helpers for phonebook integration tests
//!
//! Every test works on its own temporary directory, which is also used as the
//! working directory of the binary so copy destinations land next to the
//! phonebook.

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use tempfile::TempDir;

/// Name of the phonebook file inside a test directory
pub const BOOK: &str = "book.csv";

/// Header line of every Record File
pub const HEADER: &str = "№,first_name,second_name,phone_number";

/// Helper function to create a temp directory for tests, respecting CARGO_TARGET_TMPDIR if set
pub fn create_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    if let Ok(cargo_target_tmpdir) = env::var("CARGO_TARGET_TMPDIR") {
        fs::create_dir_all(&cargo_target_tmpdir)?;
        Ok(TempDir::new_in(cargo_target_tmpdir)?)
    } else {
        Ok(TempDir::new()?)
    }
}

/// Path to the static three-contact sample file
pub fn get_static_sample_file() -> PathBuf {
    PathBuf::from("tests/data/contacts.csv")
}

/// Copy the static sample into `dir` as the test phonebook
pub fn prepare_phonebook(dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir.join(BOOK);
    fs::copy(get_static_sample_file(), &file_path)?;
    Ok(file_path)
}

/// Write a Record File with custom content
pub fn create_custom_csv(
    dir: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Run the phonebook on `BOOK` inside `dir`, feeding `input` as the typed lines
pub fn run_session(dir: &Path, input: &str) -> Result<Assert, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("phonebook")?;
    cmd.current_dir(dir).arg(BOOK).write_stdin(input);
    Ok(cmd.assert())
}

/// Read a file as text with line endings normalised to `\n`
pub fn read_normalized(path: &Path) -> String {
    fs::read_to_string(path)
        .expect("Failed to read file")
        .replace("\r\n", "\n")
}

/// Build the expected content of a Record File from data lines
pub fn record_file(lines: &[&str]) -> String {
    let mut content = format!("{}\n", HEADER);
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}
