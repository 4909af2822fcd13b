//! End-to-end tests for the arducli binary

#![cfg(unix)]

mod common;

use std::process::{Command, Output};

use common::*;

fn arducli(project: &TestProject, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arducli"))
        .arg("--binary-dir")
        .arg(project.binary_dir())
        .arg("--user-dir")
        .arg(project.user_dir())
        .arg("--data-dir")
        .arg(project.data_dir())
        .args(args)
        .env("ARDUCLI_CONFIG_DIR", project.path().join("settings"))
        .env("ARDUCLI_DATA_DIR", project.path().join("state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run arducli")
}

#[test]
fn test_core_install_prints_tool_json() {
    let project = TestProject::new();
    project.install_tool(ECHO_ARGS);

    let output = arducli(&project, &["--quiet", "--json", "core", "install", "arduino:avr@1.8.3"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["args"]
        .as_str()
        .unwrap()
        .ends_with("core install arduino:avr@1.8.3 --format json"));
}

#[test]
fn test_tool_failure_exits_nonzero() {
    let project = TestProject::new();
    project.install_tool(FAIL_WITH_STDERR);

    let output = arducli(&project, &["--quiet", "core", "list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("platform arduino:avr is not installed"));
}

#[test]
fn test_init_writes_config() {
    let project = TestProject::new();
    project.install_tool(ECHO_ARGS);

    let output = arducli(&project, &["--quiet", "init"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(project.config_file().is_file());
    assert!(project.user_dir().is_dir());
}

#[test]
fn test_completion_prints_script() {
    let project = TestProject::new();
    project.install_tool(PRINT_COMPLETION);

    let output = arducli(&project, &["--quiet", "completion", "bash"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("complete -F _arduino-cli"));
}

#[test]
fn test_bad_platform_reference_is_rejected() {
    let project = TestProject::new();

    let output = arducli(&project, &["core", "install", "arduino"]);

    assert!(!output.status.success());
}
