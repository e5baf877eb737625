use assert_cmd::Command;
use predicates::prelude::*;

fn xtask() -> Command {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
}

#[test]
fn help_lists_the_commands() {
    xtask()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("doctest"))
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("crates"));
}

#[test]
fn crates_lists_the_workspace() {
    xtask()
        .arg("crates")
        .assert()
        .success()
        .stdout(predicate::str::contains("bts-hosting"))
        .stdout(predicate::str::contains("bts-cli"))
        .stdout(predicate::str::contains("bts-logger"));
}
