use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_cocomo_scan"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cocomo_scan"));
}

#[test]
fn missing_arguments_print_usage() {
    Command::new(env!("CARGO_BIN_EXE_cocomo_scan"))
        .arg("only-one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn root_that_is_not_a_directory_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    Command::new(env!("CARGO_BIN_EXE_cocomo_scan"))
        .current_dir(dir.path())
        .arg(&file)
        .arg(dir.path().join("report.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory").and(predicate::str::contains("Usage")));

    assert!(!dir.path().join("report.csv").exists());
}

#[test]
fn missing_root_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_cocomo_scan"))
        .current_dir(dir.path())
        .args(["does-not-exist", "report.csv"])
        .assert()
        .code(1);
}
