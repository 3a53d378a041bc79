//! Integration tests for the adventure menu

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::temple_cmd;

#[test]
fn test_menu_adventure() {
    temple_cmd()
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Lost Temple of Data!"))
        .stdout(predicate::str::contains("1. Start Adventure"))
        .stdout(predicate::str::contains("2. Exit"))
        .stdout(predicate::str::contains("You have chosen the adventurous path!"));
}

#[test]
fn test_menu_exit_via_play() {
    temple_cmd()
        .arg("play")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You have chosen to exit the game. Goodbye!",
        ));
}

#[test]
fn test_menu_out_of_range() {
    temple_cmd()
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please enter 1 or 2."))
        .stdout(predicate::str::contains("You have chosen").not());
}

#[test]
fn test_menu_non_numeric() {
    temple_cmd()
        .write_stdin("treasure\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please enter 1 or 2."));
}

#[test]
fn test_menu_no_input() {
    temple_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please enter 1 or 2."));
}
