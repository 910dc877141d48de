/// Tests for reading input lines, including indirect path lists
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use qpx::services::{read_indirect, SourceError};

fn write_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

#[test]
fn test_combine_two_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let four = write_file(temp_dir.path(), "four.txt", &["?a=1", "?a=2", "?a=3", "?a=4"]);
    let six = write_file(
        temp_dir.path(),
        "six.txt",
        &["?b=1", "?b=2", "?b=3", "?b=4", "?b=5", "?b=6"],
    );
    let list = write_file(
        temp_dir.path(),
        "paths.txt",
        &[four.to_str().unwrap(), six.to_str().unwrap()],
    );

    let lines = read_indirect(&list).unwrap();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.first().map(String::as_str), Some("?a=1"));
    assert_eq!(lines.last().map(String::as_str), Some("?b=6"));
}

#[test]
fn test_listed_file_missing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("gone.txt");
    let list = write_file(temp_dir.path(), "paths.txt", &[missing.to_str().unwrap()]);

    match read_indirect(&list) {
        Err(SourceError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let list = write_file(temp_dir.path(), "paths.txt", &["", "   "]);
    assert!(read_indirect(&list).unwrap().is_empty());
}
