//! CLI tests for `rig check` and `rig validate`.
//!
//! Spawns the rig binary and verifies exit codes and JSON decisions.

use std::process::Command;

use rig::exit_codes;
use rig::test_support::TestWorkspace;
use serde_json::Value;

fn run_rig(workspace: &TestWorkspace, args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_rig"))
        .current_dir(workspace.root())
        .args(args)
        .output()
        .expect("spawn rig");
    (
        output.status.code(),
        String::from_utf8(output.stdout).expect("utf8 stdout"),
    )
}

#[test]
fn check_install_ok_exits_ok() {
    let ws = TestWorkspace::new().expect("workspace");
    let (code, stdout) = run_rig(&ws, &["check", "install", "socket", "cpu"]);
    assert_eq!(code, Some(exit_codes::OK));

    let decision: Value = serde_json::from_str(&stdout).expect("json decision");
    assert_eq!(decision["ok"], true);
    assert_eq!(decision["reason"], "ok");
}

#[test]
fn check_install_missing_dependency_exits_rejected() {
    let ws = TestWorkspace::new().expect("workspace");
    let (code, stdout) = run_rig(&ws, &["check", "install", "fan_mount", "cooler"]);
    assert_eq!(code, Some(exit_codes::REJECTED));

    let decision: Value = serde_json::from_str(&stdout).expect("json decision");
    assert_eq!(decision["reason"], "dependency_missing");
}

#[test]
fn check_remove_reads_assembly_snapshot() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_file("build.json", r#"{"socket": "cpu", "fan_mount": "cooler"}"#)
        .expect("snapshot");

    let (code, stdout) = run_rig(
        &ws,
        &["check", "remove", "socket", "--assembly", "build.json"],
    );
    assert_eq!(code, Some(exit_codes::REJECTED));
    let decision: Value = serde_json::from_str(&stdout).expect("json decision");
    assert_eq!(decision["reason"], "dependency_blocked");

    let (code, stdout) = run_rig(
        &ws,
        &[
            "check",
            "remove",
            "fan_mount",
            "--power",
            "on",
            "--assembly",
            "build.json",
        ],
    );
    assert_eq!(code, Some(exit_codes::REJECTED));
    let decision: Value = serde_json::from_str(&stdout).expect("json decision");
    assert_eq!(decision["reason"], "system_active");
}

#[test]
fn validate_fails_on_corrupt_catalog() {
    let ws = TestWorkspace::new().expect("workspace");
    std::fs::write(&ws.paths().catalog_path, "not json").expect("corrupt");
    let (code, _) = run_rig(&ws, &["validate"]);
    assert_eq!(code, Some(exit_codes::INVALID));
}
