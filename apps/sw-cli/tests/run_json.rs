//! `sw-cli run --json` keeps stdout machine-readable.

use std::path::PathBuf;
use std::process::Command;

fn demo_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/compare_session.yaml")
}

#[test]
fn run_json_stdout_is_pure_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_sw-cli"))
        .arg("run")
        .arg(demo_script())
        .arg("--json")
        .env("RUST_LOG", "debug")
        .output()
        .expect("sw-cli should start");
    assert!(
        output.status.success(),
        "sw-cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a single JSON document");

    assert_eq!(value["transcript"]["entries"].as_array().unwrap().len(), 10);
    let snapshot = &value["snapshot"];
    assert_eq!(snapshot["active_panel"], "C");
    assert_eq!(snapshot["visible"], serde_json::json!(["B", "C"]));
    assert_eq!(snapshot["title"], "RswareDesign - [Drive - Faults]");
    assert_eq!(snapshot["connection"]["is_connected"], true);
    assert_eq!(snapshot["view"]["show_helps"], true);

    // Logging still happens, just not on stdout
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("replaying session script"));
}

#[test]
fn layout_rejects_empty_set() {
    let output = Command::new(env!("CARGO_BIN_EXE_sw-cli"))
        .args(["layout", ""])
        .output()
        .expect("sw-cli should start");
    assert!(!output.status.success());
}
