//! CLI integration tests for the phonebook
//!
//! These tests drive the binary through scripted stdin sessions and check
//! both the transcript and the resulting contacts file.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the phonebook binary
fn phonebook_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("phonebook"))
}

/// Create a temporary directory and the path of a contacts file inside it
fn setup_store(contents: Option<&str>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.txt");
    if let Some(contents) = contents {
        fs::write(&path, contents).unwrap();
    }
    (dir, path)
}

const TWO_CONTACTS: &str = "\
1|Amy Adams|0712345678|amy@example.com|Work
2|Bob Lee|0722000111|Not provided|Family
";

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_exit_choice_ends_successfully() {
    let (_dir, path) = setup_store(None);

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Phone Contact Manager!"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!path.exists());
}

#[test]
fn test_end_of_input_ends_successfully() {
    let (_dir, path) = setup_store(None);

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn test_invalid_option_is_rejected() {
    let (_dir, path) = setup_store(None);

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("abc\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option! Please choose 1-7."));
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_add_then_search() {
    let (_dir, path) = setup_store(None);

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("1\njane doe\n0712-345-678\njane@doe.com\nfriend\n\n3\ndoe\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully!"))
        .stdout(predicate::str::contains("Found 1 contact(s):"))
        .stdout(predicate::str::contains("0712-345-678"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1|Jane Doe|0712345678|jane@doe.com|Friend\n"
    );
}

#[test]
fn test_view_lists_contacts() {
    let (_dir, path) = setup_store(Some(TWO_CONTACTS));

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("2\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy Adams"))
        .stdout(predicate::str::contains("0722-000-111"));
}

#[test]
fn test_delete_missing_id_leaves_file_unchanged() {
    let (_dir, path) = setup_store(Some(TWO_CONTACTS));

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("5\n5\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact with ID 5 not found!"));

    assert_eq!(fs::read_to_string(&path).unwrap(), TWO_CONTACTS);
}

#[test]
fn test_delete_confirmed() {
    let (_dir, path) = setup_store(Some(TWO_CONTACTS));

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("5\n1\nyes\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Amy Adams' deleted successfully!"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "2|Bob Lee|0722000111|Not provided|Family\n"
    );
}

#[test]
fn test_edit_with_blank_answers_keeps_file() {
    let (_dir, path) = setup_store(Some(TWO_CONTACTS));

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("4\n2\n\n\n\n\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully!"));

    assert_eq!(fs::read_to_string(&path).unwrap(), TWO_CONTACTS);
}

#[test]
fn test_statistics() {
    let (_dir, path) = setup_store(Some(TWO_CONTACTS));

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("6\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Contacts: 2"))
        .stdout(predicate::str::contains("Family         1 ( 50.0%) ██████████"));
}

// =============================================================================
// Configuration and Error Tests
// =============================================================================

#[test]
fn test_data_file_from_environment() {
    let (_dir, path) = setup_store(Some(TWO_CONTACTS));

    phonebook_cmd()
        .env("PHONEBOOK_FILE", &path)
        .write_stdin("2\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Lee"));
}

#[test]
fn test_data_file_from_config() {
    let (dir, path) = setup_store(Some(TWO_CONTACTS));
    let config = dir.path().join("config.toml");
    fs::write(&config, format!("data_file = {:?}\n", path.display().to_string())).unwrap();

    phonebook_cmd()
        .env_remove("PHONEBOOK_FILE")
        .arg("--config")
        .arg(&config)
        .write_stdin("2\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy Adams"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    phonebook_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_non_numeric_id_is_fatal_on_add() {
    let (_dir, path) = setup_store(Some("abc|Broken|0712345678|Not provided|General\n"));

    phonebook_cmd()
        .arg("--file")
        .arg(&path)
        .write_stdin("1\namy\n0712345678\n\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid contact ID 'abc'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, path) = setup_store(None);

    phonebook_cmd()
        .arg("--verbose")
        .arg("--file")
        .arg(&path)
        .write_stdin("7\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:config] Using data file"))
        .stdout(predicate::str::contains("[verbose").not());
}
