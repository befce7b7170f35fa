//! End-to-end CLI tests for linkpack.
//!
//! These tests verify the complete CLI workflow by running the actual
//! binary with various arguments and checking the output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with a links file and a snapshot capture.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let capture = r#"{
  "posts": [
    {"channel": "somechannel", "id": 42, "post": {
        "id": 42,
        "date": "2024-06-15T12:30:00+03:00",
        "text": "Summer update",
        "media": "photo",
        "views": 1500,
        "reactions": [{"emoticon": "👍", "count": 3}]
    }},
    {"channel": "somechannel", "id": 43, "post": {"id": 43, "text": "Follow-up"}},
    {"chat_id": -1001567469683, "id": 2394725, "post": {"id": 2394725, "text": "Private post"}}
  ]
}"#;
    fs::write(dir.path().join("capture.json"), capture).unwrap();

    let links = "https://t.me/somechannel/42, t.me/somechannel/43\nt.me/c/1567469683/2394725\n";
    fs::write(dir.path().join("links.txt"), links).unwrap();

    let mixed = "t.me/somechannel/42 not-a-link t.me/somechannel/999\n";
    fs::write(dir.path().join("mixed.txt"), mixed).unwrap();

    dir
}

fn linkpack_cmd() -> Command {
    Command::cargo_bin("linkpack").expect("binary exists")
}

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn csv_output_from_links_file() {
    let dir = setup_fixtures();
    let out = dir.path().join("posts.csv");

    linkpack_cmd()
        .arg(dir.path().join("links.txt"))
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved 3 of 3"));

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("channel,message_id,date,edit_date,text,"));
    assert!(lines[1].contains("Summer update"));
    assert!(lines[3].contains("Chat -1001567469683"));
}

#[test]
fn inline_links_without_file() {
    let dir = setup_fixtures();
    let out = dir.path().join("posts.csv");

    linkpack_cmd()
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .arg("-l")
        .arg("t.me/somechannel/42")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved 1 of 1"));
}

#[test]
fn jsonl_output_format() {
    let dir = setup_fixtures();
    let out = dir.path().join("posts.jsonl");

    linkpack_cmd()
        .arg(dir.path().join("links.txt"))
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .arg("-o")
        .arg(&out)
        .arg("--format")
        .arg("jsonl")
        .assert()
        .success();

    let jsonl = fs::read_to_string(&out).unwrap();
    assert_eq!(jsonl.lines().count(), 3);
    let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
    assert_eq!(first["message_id"], 42);
}

#[test]
fn raw_dump_alongside_records() {
    let dir = setup_fixtures();
    let out = dir.path().join("posts.csv");
    let raw = dir.path().join("raw.txt");

    linkpack_cmd()
        .arg(dir.path().join("links.txt"))
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .arg("-o")
        .arg(&out)
        .arg("--raw")
        .arg(&raw)
        .assert()
        .success();

    let dump = fs::read_to_string(&raw).unwrap();
    assert_eq!(dump.matches("Message from ").count(), 3);
    assert!(dump.contains("Summer update"));
}

// ============================================================================
// Warnings and partial failure
// ============================================================================

#[test]
fn bad_links_warn_but_do_not_fail() {
    let dir = setup_fixtures();
    let out = dir.path().join("posts.csv");

    linkpack_cmd()
        .arg(dir.path().join("mixed.txt"))
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved 1 of 3"))
        .stderr(predicate::str::contains("Link not recognised: not-a-link"))
        .stderr(predicate::str::contains(
            "No message found for link: t.me/somechannel/999",
        ));
}

#[test]
fn quiet_suppresses_warnings() {
    let dir = setup_fixtures();
    let out = dir.path().join("posts.csv");

    linkpack_cmd()
        .arg(dir.path().join("mixed.txt"))
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .arg("-o")
        .arg(&out)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains("Link not recognised").not());
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn missing_snapshot_file_fails() {
    let dir = setup_fixtures();

    linkpack_cmd()
        .arg(dir.path().join("links.txt"))
        .arg("-s")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_snapshot_json_fails() {
    let dir = setup_fixtures();
    fs::write(dir.path().join("broken.json"), "{not json").unwrap();

    linkpack_cmd()
        .arg(dir.path().join("links.txt"))
        .arg("-s")
        .arg(dir.path().join("broken.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshot"));
}

#[test]
fn no_links_at_all_fails() {
    let dir = setup_fixtures();

    linkpack_cmd()
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no links provided"));
}

#[test]
fn empty_links_file_fails() {
    let dir = setup_fixtures();
    fs::write(dir.path().join("empty.txt"), "  ,  \n").unwrap();

    linkpack_cmd()
        .arg(dir.path().join("empty.txt"))
        .arg("-s")
        .arg(dir.path().join("capture.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no links provided"));
}

#[test]
fn missing_snapshot_flag_is_usage_error() {
    linkpack_cmd().arg("links.txt").assert().failure();
}
