//! Integration tests for the idscan binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_TEXT: &str = "Name: John Smith DOB: 01/02/1990 Sex: M ID: ABC123456";

#[test]
fn extract_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("scan.txt");
    let image_path = dir.path().join("scan.jpg");
    fs::write(&text_path, SAMPLE_TEXT).unwrap();
    fs::write(&image_path, [0u8; 1536]).unwrap();

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("extract")
        .arg(&text_path)
        .arg("--source")
        .arg(&image_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""fullName": "John Smith""#))
        .stdout(predicate::str::contains(r#""idNumber": "ABC123456""#))
        .stdout(predicate::str::contains(r#""fileSize": "1.5 KB""#));
}

#[test]
fn extract_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("scan.txt");
    let image_path = dir.path().join("scan.png");
    fs::write(&text_path, SAMPLE_TEXT).unwrap();
    fs::write(&image_path, [0u8; 64]).unwrap();

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("extract")
        .arg(&text_path)
        .arg("--source")
        .arg(&image_path)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Full name:     John Smith"))
        .stdout(predicate::str::contains("File type:     image/png"));
}

#[test]
fn extract_without_source_fails() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("scan.txt");
    fs::write(&text_path, SAMPLE_TEXT).unwrap();

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("extract")
        .arg(&text_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no source file selected"));
}

#[test]
fn extract_missing_input_fails() {
    Command::cargo_bin("idscan")
        .unwrap()
        .arg("extract")
        .arg("/nonexistent/scan.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn extract_reports_undetected_fields() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("scan.txt");
    let image_path = dir.path().join("scan.jpg");
    fs::write(&text_path, "Name: John Smith").unwrap();
    fs::write(&image_path, [0u8; 64]).unwrap();

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("extract")
        .arg(&text_path)
        .arg("--source")
        .arg(&image_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not extract gender"));
}

#[test]
fn batch_pairs_images_by_stem() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("card.txt"), SAMPLE_TEXT).unwrap();
    fs::write(dir.path().join("card.jpg"), [0u8; 1536]).unwrap();

    let pattern = dir.path().join("*.txt");

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("card.json")).unwrap();
    assert!(output.contains(r#""fullName": "John Smith""#));
    assert!(output.contains(r#""fileSize": "1.5 KB""#));
}

#[test]
fn batch_unpaired_file_fails_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("orphan.txt"), SAMPLE_TEXT).unwrap();

    let pattern = dir.path().join("*.txt");

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no source file selected"));
}

#[test]
fn batch_continue_on_error_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), SAMPLE_TEXT).unwrap();
    fs::write(dir.path().join("good.png"), [0u8; 64]).unwrap();
    fs::write(dir.path().join("orphan.txt"), SAMPLE_TEXT).unwrap();

    let pattern = dir.path().join("*.txt");

    Command::cargo_bin("idscan")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--continue-on-error")
        .assert()
        .success();

    assert!(dir.path().join("good.json").exists());
    assert!(!dir.path().join("orphan.json").exists());
}
