use assert_cmd::Command;
use predicates::prelude::{PredicateBooleanExt, predicate};

#[test]
fn prints_help() {
    Command::cargo_bin("git-lastdiff")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("USAGE")))
        .stdout(predicate::str::contains("parent commit"));
}

#[test]
fn prints_version() {
    Command::cargo_bin("git-lastdiff")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("git-lastdiff "));
}

#[test]
fn rejects_unknown_arguments() {
    Command::cargo_bin("git-lastdiff")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
