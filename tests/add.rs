use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn contact_book(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CONTACT_FILE")
        .env("STORAGE_CHOICE", "txt");
    cmd
}

#[test]
fn add_contact() {
    let dir = tempfile::tempdir().unwrap();

    contact_book(&dir)
        .args(["add", "--name", "Alice", "--number", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' added successfully"));

    // Default file lands in the working directory
    let saved = fs::read_to_string(dir.path().join("friendsContact.txt")).unwrap();
    assert_eq!(saved, "Alice!123\n");

    contact_book(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Alice\nNumber: 123\n"));
}

#[test]
fn duplicate_contacts_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    contact_book(&dir)
        .args(["add", "--name", "Alice", "--number", "123"])
        .assert()
        .success();

    contact_book(&dir)
        .args(["add", "--name", "Alice", "--number", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Duplicate contact: the name 'Alice' already exists",
        ));

    contact_book(&dir)
        .args(["add", "--name", "Bob", "--number", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Duplicate contact: the number '123' already exists",
        ));

    let saved = fs::read_to_string(dir.path().join("friendsContact.txt")).unwrap();
    assert_eq!(saved, "Alice!123\n");
}

#[test]
fn invalid_inputs() {
    let dir = tempfile::tempdir().unwrap();

    // INVALID COMMAND
    contact_book(&dir)
        .args(["and", "--name", "Alice", "--number", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // EMPTY NAME
    contact_book(&dir)
        .args(["add", "--name", "   ", "--number", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Validation failed: name cannot be empty",
        ));

    // INVALID NUMBER
    contact_book(&dir)
        .args(["add", "--name", "Alice", "--number", "12a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Validation failed: number '12a' must contain only digits",
        ));

    assert!(!dir.path().join("friendsContact.txt").exists());
}

#[test]
fn contact_file_is_configurable() {
    let dir = tempfile::tempdir().unwrap();

    contact_book(&dir)
        .env("CONTACT_FILE", "book/friends.txt")
        .args(["add", "--name", "Alice", "--number", "123"])
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("book").join("friends.txt")).unwrap();
    assert_eq!(saved, "Alice!123\n");
    assert!(!dir.path().join("friendsContact.txt").exists());
}
