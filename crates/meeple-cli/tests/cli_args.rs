use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn meeple() -> Command {
    Command::cargo_bin("meeple").expect("binary should build")
}

#[test]
fn test_no_command_shows_guidance() {
    meeple()
        .assert()
        .success()
        .stdout(predicate::str::contains("meeple login"))
        .stdout(predicate::str::contains("meeple --help"));
}

#[test]
fn test_help_lists_commands() {
    meeple()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("collection"));
}

#[test]
fn test_play_add_rejects_zero_count() {
    meeple()
        .args(["play", "add", "Catan", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_play_add_rejects_malformed_date() {
    meeple()
        .args(["play", "add", "Catan", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_collection_tag_requires_a_tag_flag() {
    let temp_dir = TempDir::new().unwrap();
    meeple()
        .args(["--data-dir", temp_dir.path().to_str().unwrap()])
        .args(["collection", "tag", "Catan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one tag option"));
}

#[test]
fn test_loan_conflicts_with_return() {
    meeple()
        .args(["collection", "tag", "Catan", "--loan", "alice", "--return"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_clear_audit_conflicts_with_giveaway() {
    meeple()
        .args(["collection", "tag", "Catan", "--giveaway", "--clear-audit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
