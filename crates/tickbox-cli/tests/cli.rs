//! Argument-surface smoke tests. Nothing here touches the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn tickbox() -> Command {
    Command::cargo_bin("tickbox").unwrap()
}

#[test]
fn help_lists_all_subcommands() {
    tickbox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("done"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("rm"))
        .stdout(predicate::str::contains("toggle-all"))
        .stdout(predicate::str::contains("clear-completed"));
}

#[test]
fn version_flag_works() {
    tickbox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tickbox"));
}

#[test]
fn non_numeric_id_is_rejected_before_any_request() {
    tickbox()
        .args(["rm", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_subcommand_prints_usage() {
    tickbox()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn add_requires_a_title_argument() {
    tickbox().arg("add").assert().failure();
}
