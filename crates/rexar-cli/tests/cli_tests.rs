//! Integration tests for rexar-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rexar_core::test_utils::ZipTestBuilder;
use rexar_core::test_utils::create_test_zip;
use rexar_core::test_utils::write_test_zip;
use std::path::PathBuf;
use tempfile::TempDir;

fn rexar_cmd() -> Command {
    cargo_bin_cmd!("rexar")
}

fn subtitle_zip(dir: &TempDir) -> PathBuf {
    write_test_zip(
        &dir.path().join("movie.zip"),
        vec![("movie.srt", b"1\n00:00 --> 00:01\nhi\n"), ("readme.txt", b"readme")],
    )
}

#[test]
fn test_version_flag() {
    rexar_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rexar"));
}

#[test]
fn test_help_flag() {
    rexar_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_extract_help() {
    rexar_cmd()
        .arg("extract")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract archive contents"));
}

#[test]
fn test_extract_prints_output_paths() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    rexar_cmd()
        .arg("extract")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("movie.srt"))
        .stdout(predicate::str::contains("readme.txt"));

    assert!(temp.path().join("movie/movie.srt").exists());
    assert!(temp.path().join("movie/readme.txt").exists());
}

#[test]
fn test_extract_with_extension_filter() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    rexar_cmd()
        .arg("extract")
        .arg("-e")
        .arg("srt")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("movie.srt"))
        .stdout(predicate::str::contains("readme.txt").not());

    assert!(!temp.path().join("movie/readme.txt").exists());
}

#[test]
fn test_extract_with_explicit_destination() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);
    let dest = temp.path().join("out");

    rexar_cmd()
        .arg("extract")
        .arg("-d")
        .arg(&dest)
        .arg(&archive)
        .assert()
        .success();

    assert!(dest.join("movie.srt").exists());
}

#[test]
fn test_extract_delete_source() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    rexar_cmd()
        .arg("extract")
        .arg("--delete-source")
        .arg(&archive)
        .assert()
        .success();

    assert!(!archive.exists());
}

#[test]
fn test_extract_recursion_flag() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let inner = create_test_zip(vec![("a.srt", b"a")]);
    let archive = temp.path().join("outer.zip");
    std::fs::write(
        &archive,
        ZipTestBuilder::new().add_archive("inner.zip", &inner).build(),
    )
    .expect("failed to write archive");

    rexar_cmd()
        .arg("extract")
        .arg("-e")
        .arg("srt")
        .arg("--recursion")
        .arg("0")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.srt").not());

    rexar_cmd()
        .arg("extract")
        .arg("-e")
        .arg("srt")
        .arg("--recursion")
        .arg("1")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.srt"));
}

#[test]
fn test_extract_quiet_mode() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    let output = rexar_cmd()
        .arg("--quiet")
        .arg("extract")
        .arg(&archive)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(output.is_empty());
    assert!(temp.path().join("movie/movie.srt").exists());
}

#[test]
fn test_extract_verbose_shows_summary() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    rexar_cmd()
        .arg("--verbose")
        .arg("extract")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files extracted: 2"));
}

#[test]
fn test_extract_json_output_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    let output = rexar_cmd()
        .arg("extract")
        .arg("--json")
        .arg(&archive)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "extract");
    assert!(json["data"]["files"].is_array());
    assert_eq!(json["data"]["files_extracted"], 2);
}

#[test]
fn test_extract_nonexistent_archive() {
    rexar_cmd()
        .arg("extract")
        .arg("nonexistent.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_extract_unsupported_content() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("fake.rar");
    std::fs::write(&path, "just some text").expect("failed to write file");

    rexar_cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_list_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    rexar_cmd()
        .arg("list")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicates::str::contains("movie.srt"))
        .stdout(predicates::str::contains("readme.txt"));

    // Listing never extracts.
    assert!(!temp.path().join("movie").exists());
}

#[test]
fn test_list_archive_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = subtitle_zip(&temp);

    let output = rexar_cmd()
        .arg("list")
        .arg("--json")
        .arg(&archive)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "list");
    assert_eq!(json["data"]["format"], "zip");
    assert!(json["data"]["entries"].is_array());
    assert_eq!(json["data"]["total_entries"], 2);
}

#[test]
fn test_completion_bash() {
    rexar_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_rexar"));
}

#[test]
fn test_completion_invalid_shell() {
    rexar_cmd()
        .arg("completion")
        .arg("invalid_shell")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
