//! CLI argument-surface smoke tests. These never touch launchd: they only
//! exercise help output and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;

fn launchkit() -> Command {
    Command::cargo_bin("launchkit").expect("binary builds")
}

#[test]
fn help_lists_all_subcommands() {
    launchkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("enable"))
        .stdout(predicate::str::contains("disable"));
}

#[test]
fn status_requires_a_label() {
    launchkit()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LABEL"));
}

#[test]
fn unknown_subcommand_fails() {
    launchkit()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn non_macos_fails_with_clear_message() {
    launchkit()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only supported on macOS"));
}
