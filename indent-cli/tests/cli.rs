//! End-to-end tests for the `indentscan` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

fn indentscan() -> Command {
    Command::cargo_bin("indentscan").expect("binary to build")
}

#[test]
fn prints_simple_stream_by_default() {
    let file = source_file("def f():\n  return 0\n");
    indentscan()
        .arg(file.path())
        .assert()
        .success()
        .stdout("def f ( ) : <newline> <indent> return 0 <newline> <dedent>\n");
}

#[test]
fn prints_spans() {
    let file = source_file("a\n  b");
    indentscan()
        .arg(file.path())
        .args(["--format", "token-spans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1..2 newline \"\\n\""))
        .stdout(predicate::str::contains("2..2 indent \"\""))
        .stdout(predicate::str::contains("5..5 dedent \"\""));
}

#[test]
fn prints_json() {
    let file = source_file("a\n  b");
    let output = indentscan()
        .arg(file.path())
        .args(["--format", "token-json"])
        .output()
        .expect("run indentscan");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout to be JSON");
    let records = records.as_array().expect("a JSON array");
    assert_eq!(records.len(), 6);
    assert_eq!(records[2]["token"], "Indent");
    assert_eq!(records[2]["start"], 2);
    assert_eq!(records[2]["end"], 2);
}

#[test]
fn snapshots_flag_adds_state() {
    let file = source_file("a\n  b");
    indentscan()
        .arg(file.path())
        .arg("--snapshots")
        .assert()
        .success()
        .stdout("a <newline>[01000100000200] <indent>[01000000000200] b <dedent>[0000000000]\n");
}

#[test]
fn permissive_mask_flag() {
    let file = source_file("a\n  b\n    c");
    indentscan()
        .arg(file.path())
        .args(["--mask", "permissive"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "c <dedent> <dedent> <dedent>\n",
        ));
}

#[test]
fn config_file_sets_defaults() {
    let file = source_file("a\n\tb\n");
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[inspect]\nformat = \"token-spans\"").expect("write config");

    indentscan()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2..3 whitespace \"\\t\""));
}

#[test]
fn local_config_is_picked_up_and_flags_win() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("indentscan.toml"),
        "[inspect]\nformat = \"token-spans\"\n",
    )
    .expect("write local config");
    std::fs::write(dir.path().join("input.py"), "a\n  b").expect("write source");

    indentscan()
        .current_dir(dir.path())
        .arg("input.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("2..2 indent \"\""));

    indentscan()
        .current_dir(dir.path())
        .arg("input.py")
        .args(["--format", "token-simple"])
        .assert()
        .success()
        .stdout("a <newline> <indent> b <dedent>\n");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    indentscan()
        .arg(dir.path().join("absent.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn rejects_unknown_format() {
    let file = source_file("a");
    indentscan()
        .arg(file.path())
        .args(["--format", "ast-tag"])
        .assert()
        .failure();
}
