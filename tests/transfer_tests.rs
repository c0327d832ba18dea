//! Integration tests for export and import

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_book, quotebook_cmd};

#[test]
fn test_export_writes_pretty_json() {
    let temp = TempDir::new().unwrap();
    init_book(temp.path());

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 quotes"));

    let contents = fs::read_to_string(temp.path().join("quotes.json")).unwrap();
    assert!(contents.starts_with("[\n  {"));
    assert!(contents.contains("\"category\": \"Motivation\""));
}

#[test]
fn test_export_then_import_is_idempotent() {
    let temp = TempDir::new().unwrap();
    init_book(temp.path());
    let file = temp.path().join("backup.json");

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg(&file)
        .assert()
        .success();
    let before = fs::read_to_string(temp.path().join(".quotebook/store/quotes")).unwrap();

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0, skipped 3"));

    let after = fs::read_to_string(temp.path().join(".quotebook/store/quotes")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_import_merges_new_quotes_only() {
    let temp = TempDir::new().unwrap();
    init_book(temp.path());
    let file = temp.path().join("incoming.json");
    fs::write(
        &file,
        r#"[
            {"text": "Get busy living or get busy dying.", "category": "Copy"},
            {"text": "Well done is better than well said.", "category": "Action"}
        ]"#,
    )
    .unwrap();

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quotes imported successfully!"))
        .stdout(predicate::str::contains("Added 1, skipped 1"));

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action"))
        .stdout(predicate::str::contains("Copy").not());
}

#[test]
fn test_import_rejects_non_array() {
    let temp = TempDir::new().unwrap();
    init_book(temp.path());
    let file = temp.path().join("bad.json");
    fs::write(&file, r#"{"text": "Lonely", "category": "Solo"}"#).unwrap();

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Error importing quotes file"));

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("Solo")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes available."));
}

#[test]
fn test_import_rejects_non_utf8_file() {
    let temp = TempDir::new().unwrap();
    init_book(temp.path());
    let file = temp.path().join("binary.json");
    fs::write(&file, [0xff, 0xfe, b'[', b']']).unwrap();

    quotebook_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Error importing quotes file"));
}
