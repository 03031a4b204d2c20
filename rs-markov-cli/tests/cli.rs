//! CLI integration tests for the `rs-markov` binary.

use std::io::Write;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const STORY: &str = "The quick fox ran over the hill. The quick dog ran after the fox!
The old dog sat under the tree, and the fox ran away. Was the fox quick?
The fox sat on the hill and the dog ran home.";

fn markov_cmd() -> Command {
    Command::from(cargo_bin_cmd!("rs-markov"))
}

fn text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("failed to write temp file");
    file
}

#[test]
fn help_flag() {
    markov_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Markov chain"));
}

#[test]
fn missing_arguments_fail() {
    markov_cmd().assert().failure();
}

#[test]
fn prints_statistics_and_sentences() {
    let input = text_file("the cat sat. the cat ran. the dog sat.");
    markov_cmd()
        .arg(input.path())
        .args(["1", "--seed", "3", "--max-attempts", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 unique tokens."))
        .stdout(predicate::str::contains("3 viable sentences; min. length 4, max. 4"))
        .stdout(predicate::str::contains("5 transitions."))
        .stdout(predicate::str::contains("Seed: \"the\" (max_attempts = 200):"))
        .stdout(predicate::str::contains("1 * \"The "))
        .stdout(predicate::str::contains("Only 3 of 10 sentences found after 200 attempts."));
}

#[test]
fn same_seed_same_output() {
    let input = text_file(STORY);
    let run = || {
        markov_cmd()
            .arg(input.path())
            .args(["2", "--seed", "42", "--count", "4"])
            .output()
            .expect("failed to run binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn json_report() {
    let input = text_file(STORY);
    let output = markov_cmd()
        .arg(input.path())
        .args(["2", "--seed", "7", "--count", "3", "--json"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("invalid JSON");
    assert_eq!(report["seed"], serde_json::json!(["the", "quick"]));
    assert_eq!(report["target_count"], 3);
    assert!(report["results"].as_array().is_some_and(|r| !r.is_empty() && r.len() <= 3));
}

#[test]
fn no_branching_start_is_reported() {
    let input = text_file("one two three. one two four.");
    markov_cmd()
        .arg(input.path())
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no suitable start states found for state tuple size of 1"));
}

#[test]
fn unreadable_input_is_reported() {
    markov_cmd()
        .args(["/nonexistent/input.txt", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read /nonexistent/input.txt"));
}

#[test]
fn zero_tuple_len_is_rejected() {
    let input = text_file(STORY);
    markov_cmd()
        .arg(input.path())
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tuple length must be >= 1"));
}
