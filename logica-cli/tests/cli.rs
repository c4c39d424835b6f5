use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn run_prints_speak_output() {
    let file = source_file("speaker J\nas J {\n speak \"Hello\"\n}");
    Command::cargo_bin("logica")
        .unwrap()
        .arg("run")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[J] Hello"));
}

#[test]
fn run_reports_axiom_violation_and_fails() {
    let file = source_file("speaker A\nspeaker B\nas A {\n let B.x = 1\n}");
    Command::cargo_bin("logica")
        .unwrap()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("axiom"));
}

#[test]
fn check_reports_ok_for_well_formed_program() {
    let file = source_file("speaker J\nas J {\n speak \"hi\"\n}");
    Command::cargo_bin("logica")
        .unwrap()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn tokenize_lists_tokens() {
    let file = source_file("speaker J");
    Command::cargo_bin("logica")
        .unwrap()
        .arg("tokenize")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Speaker"));
}

#[test]
fn ledger_prints_boot_entry() {
    let file = source_file("speaker J\nas J {\n speak \"hi\"\n}");
    Command::cargo_bin("logica")
        .unwrap()
        .arg("ledger")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("boot"));
}

#[test]
fn missing_file_is_an_io_error() {
    Command::cargo_bin("logica")
        .unwrap()
        .arg("run")
        .arg("/nonexistent/path/to/source.logica")
        .assert()
        .failure();
}
