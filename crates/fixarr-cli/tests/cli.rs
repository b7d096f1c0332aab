//! Integration test: run the `fixarr` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixarr() -> Command {
    Command::cargo_bin("fixarr").unwrap()
}

#[test]
fn default_walkthrough_succeeds() {
    fixarr()
        .args(["--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum of elements: 10"))
        .stdout(predicate::str::contains("array: 0 1 2 5 3 4"))
        .stdout(predicate::str::contains("array: 0 2 5 3 4\n"))
        .stdout(predicate::str::contains("index of 5: 2"))
        .stdout(predicate::str::contains("array: 0 2 5 3 4 0 0 0"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = fixarr().args(["--seed", "7"]).output().unwrap();
    let second = fixarr().args(["--seed", "7"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_index_exits_with_failure() {
    fixarr()
        .args(["--insert-at", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("index 10 out of range for length 5"));
}

#[test]
fn help_lists_flags() {
    fixarr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--headroom"))
        .stdout(predicate::str::contains("--extend"));
}
