//! Integration tests for the journal command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::temple_cmd;

#[test]
fn test_journal_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, "Sealed on 10/31/1517 with AZMAR-500.").unwrap();

    temple_cmd()
        .arg("journal")
        .arg(&path)
        .assert()
        .success()
        .stdout("Found dates: [\"10/31/1517\"]\nFound codes: [\"AZMAR-500\"]\n");
}

#[test]
fn test_journal_default_path_from_cwd() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("journal.txt"), "AZMAR-001").unwrap();

    temple_cmd()
        .current_dir(temp.path())
        .arg("journal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found codes: [\"AZMAR-001\"]"));
}

#[test]
fn test_journal_path_from_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("logs")).unwrap();
    fs::write(temp.path().join("logs/field.txt"), "01/02/2003").unwrap();
    fs::write(temp.path().join("temple.toml"), "journal = \"logs/field.txt\"\n").unwrap();

    temple_cmd()
        .current_dir(temp.path())
        .arg("journal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found dates: [\"01/02/2003\"]"));
}

#[test]
fn test_journal_missing_file() {
    let temp = TempDir::new().unwrap();

    temple_cmd()
        .current_dir(temp.path())
        .arg("journal")
        .arg("missing.txt")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error: File not found at missing.txt"));
}

#[test]
fn test_journal_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("week2")).unwrap();
    fs::write(temp.path().join("day1.txt"), "AZMAR-111 on 05/05/1955").unwrap();
    fs::write(temp.path().join("week2/day8.txt"), "AZMAR-888").unwrap();
    fs::write(temp.path().join("map.tsv"), "AZMAR-999").unwrap();

    temple_cmd()
        .arg("journal")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("== day1.txt"))
        .stdout(predicate::str::contains("Found codes: [\"AZMAR-111\"]"))
        .stdout(predicate::str::contains("day8.txt"))
        .stdout(predicate::str::contains("Found codes: [\"AZMAR-888\"]"))
        .stdout(predicate::str::contains("AZMAR-999").not());
}

#[test]
fn test_journal_directory_with_unreadable_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), b"\xff\xfe").unwrap();
    fs::write(temp.path().join("b.txt"), "Sealed on 03/03/1933 with AZMAR-204").unwrap();

    temple_cmd()
        .arg("journal")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("== a.txt\nError: Failed to read"))
        .stdout(predicate::str::contains("== b.txt"))
        .stdout(predicate::str::contains("Found dates: [\"03/03/1933\"]"))
        .stdout(predicate::str::contains("Found codes: [\"AZMAR-204\"]"));
}

#[test]
fn test_journal_empty_directory() {
    let temp = TempDir::new().unwrap();

    temple_cmd()
        .arg("journal")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal files found"));
}

#[test]
fn test_journal_bad_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("temple.toml"), "treasure = 1\n").unwrap();

    temple_cmd()
        .current_dir(temp.path())
        .arg("journal")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Valid keys in temple.toml"));
}
