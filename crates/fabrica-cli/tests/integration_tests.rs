//! Integration tests for fabrica-cli.

use assert_cmd::Command;
use predicates::prelude::*;

fn fabrica() -> Command {
    let mut cmd = Command::cargo_bin("fabrica").unwrap();
    // Keep output deterministic regardless of the test environment.
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    fabrica()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fabrica"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_flag() {
    fabrica()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_args_shows_help_and_fails() {
    fabrica().assert().failure();
}

#[test]
fn test_demo_runs_both_lines_in_order() {
    let expected = "Product line 1:\n\
        The result of the product B1.\n\
        The result of the B1 collaborating with the (The result of the product A1.)\n\
        The result of the product C1.\n\
        The result of the product D1.\n\
        \n\
        Product line 2:\n\
        The result of the product B2.\n\
        The result of the B2 collaborating with the (The result of the product A2.)\n\
        The result of the product C2.\n\
        The result of the product D2.\n";

    fabrica()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_demo_single_line() {
    fabrica()
        .args(["demo", "--line", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The result of the product B2."))
        .stdout(predicate::str::contains("The result of the product A1.").not());
}

#[test]
fn test_demo_accepts_word_markers() {
    fabrica()
        .args(["demo", "--line", "one"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The result of the B1 collaborating with the (The result of the product A1.)",
        ));
}

#[test]
fn test_demo_quiet_suppresses_non_error_output() {
    // Quiet mode suppresses everything the OutputManager writes, headers
    // and descriptions alike; only errors would still appear.
    fabrica()
        .args(["--quiet", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showcase complete").not())
        .stdout(predicate::str::contains("Product line").not());
}

#[test]
fn test_list_table_names_lines() {
    fabrica()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered product lines:"))
        .stdout(predicate::str::contains("Product line 1"))
        .stdout(predicate::str::contains("Product line 2"));
}

#[test]
fn test_list_json_is_parseable() {
    let output = fabrica()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["marker"], "1");
    assert_eq!(lines[1]["marker"], "2");
}

#[test]
fn test_list_csv_has_header_row() {
    fabrica()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("marker,title,products"));
}

#[test]
fn test_completions_bash() {
    fabrica()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fabrica"));
}
