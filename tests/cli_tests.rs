//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn netclip_bin() -> Command {
    Command::cargo_bin("netclip").expect("binary should build")
}

/// Point HOME and XDG dirs at a throwaway location so a developer's real
/// config file cannot leak into the test
fn hermetic(cmd: &mut Command, dir: &tempfile::TempDir) {
    cmd.env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("XDG_CACHE_HOME", dir.path());
}

#[test]
fn help_output() {
    netclip_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("clipboard")
                .and(predicate::str::contains("--address"))
                .and(predicate::str::contains("--port"))
                .and(predicate::str::contains("--random-port"))
                .and(predicate::str::contains("--pid-file"))
                .and(predicate::str::contains("--port-file"))
                .and(predicate::str::contains("--license")),
        );
}

#[test]
fn version_output() {
    netclip_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netclip"));
}

#[test]
fn license_output() {
    netclip_bin()
        .arg("--license")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("MIT License")
                .and(predicate::str::contains("Permission is hereby granted")),
        );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    netclip_bin().arg("--frobnicate").assert().failure();
}

#[test]
fn non_numeric_port_is_a_usage_error() {
    netclip_bin().args(["--port", "http"]).assert().failure();
}

#[test]
fn port_zero_without_random_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = netclip_bin();
    hermetic(&mut cmd, &dir);

    cmd.args(["--port", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--random-port"));
}

#[test]
fn already_running_reports_recorded_port() {
    let dir = tempfile::tempdir().unwrap();
    let pid_path = dir.path().join("netclip.pid");
    let port_path = dir.path().join("netclip.port");

    // The test runner itself plays the live owner
    std::fs::write(&pid_path, std::process::id().to_string()).unwrap();
    std::fs::write(&port_path, "38212").unwrap();

    let mut cmd = netclip_bin();
    hermetic(&mut cmd, &dir);

    cmd.args([
        "--pid-file",
        pid_path.to_str().unwrap(),
        "--port-file",
        port_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains(format!("pid: {}", std::process::id()))
            .and(predicate::str::contains("port: 38212")),
    );

    // Detection must leave the record untouched
    assert_eq!(
        std::fs::read_to_string(&pid_path).unwrap(),
        std::process::id().to_string()
    );
}

#[test]
fn already_running_without_port_record_reports_configured_port() {
    let dir = tempfile::tempdir().unwrap();
    let pid_path = dir.path().join("netclip.pid");
    std::fs::write(&pid_path, std::process::id().to_string()).unwrap();

    let mut cmd = netclip_bin();
    hermetic(&mut cmd, &dir);

    cmd.args([
        "--pid-file",
        pid_path.to_str().unwrap(),
        "--port-file",
        dir.path().join("netclip.port").to_str().unwrap(),
        "--port",
        "9100",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("port: 9100"));
}

#[test]
fn malformed_pid_record_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let pid_path = dir.path().join("netclip.pid");
    std::fs::write(&pid_path, "not-a-pid").unwrap();

    let mut cmd = netclip_bin();
    hermetic(&mut cmd, &dir);

    cmd.args(["--pid-file", pid_path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a decimal process id"));
}
