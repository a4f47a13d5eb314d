//! Integration tests for the harbor CLI.
//!
//! None of these reach a server: they cover argument handling and the
//! failures raised before any request is sent.

use assert_cmd::Command;
use predicates::prelude::*;

fn harbor_cmd() -> Command {
    let mut cmd = Command::cargo_bin("harbor").unwrap();
    cmd.env_remove("HARBOR_URL")
        .env_remove("HARBOR_SESSION")
        .env_remove("HARBOR_USERNAME")
        .env_remove("HARBOR_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    harbor_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbor container registry"))
        .stdout(predicate::str::contains("ops"))
        .stdout(predicate::str::contains("call"))
        .stdout(predicate::str::contains("--url"));
}

#[test]
fn cli_shows_version() {
    harbor_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("harbor 0.1.0"));
}

#[test]
fn ops_lists_every_operation() {
    let output = harbor_cmd().arg("ops").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 67);
    assert!(stdout.contains("GetSysteminfoVolumes"));
}

#[test]
fn ops_filter_narrows_the_list() {
    harbor_cmd()
        .args(["ops", "ldap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PostLdapPing"))
        .stdout(predicate::str::contains("/ldap/users/search"))
        .stdout(predicate::str::contains("GetProjects").not());
}

#[test]
fn describe_shows_wire_names() {
    harbor_cmd()
        .args(["describe", "GetProjects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GetProjects GET /projects"))
        .stdout(predicate::str::contains("pageSize (sent as page_size): query integer, optional"));
}

#[test]
fn describe_shows_method_effect() {
    harbor_cmd()
        .args(["describe", "DeleteTargetsById"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(idempotent write)"));

    harbor_cmd()
        .args(["describe", "PostTargets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(non-idempotent write)"));
}

#[test]
fn describe_unknown_operation_fails() {
    harbor_cmd()
        .args(["describe", "GetNothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation: GetNothing"));
}

#[test]
fn call_without_required_param_fails_before_sending() {
    harbor_cmd()
        .args(["call", "DeleteTargetsById"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing required parameter: id"));
}

#[test]
fn call_with_badly_typed_param_fails() {
    harbor_cmd()
        .args(["call", "GetTargetsById", "-p", "id=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for parameter id"));
}

#[test]
fn call_rejects_malformed_pair() {
    harbor_cmd()
        .args(["call", "GetTargetsById", "-p", "id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[test]
fn blank_url_falls_back_and_bad_scheme_fails() {
    harbor_cmd()
        .args(["--url", " ", "ops"])
        .assert()
        .success();

    harbor_cmd()
        .args(["--url", "ftp://registry/api", "ops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported URL scheme: ftp"));
}

#[test]
fn login_without_credentials_fails() {
    harbor_cmd()
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No username"));
}
