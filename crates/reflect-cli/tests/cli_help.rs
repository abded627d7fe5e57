use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("reflect")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--service-url"));
}

#[test]
fn test_analyze_help_shows_flags() {
    cargo_bin_cmd!("reflect")
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--text"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("reflect")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_form_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("reflect")
        .env("REFLECT_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
