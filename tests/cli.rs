//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn run_statprobe(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_statprobe");
    Command::new(bin)
        .args(args)
        .env_remove("STATPROBE_RECORD")
        .env_remove("STATPROBE_REPLAY")
        .output()
        .expect("failed to run statprobe binary")
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn size_prints_byte_count() {
    let dir = scratch("statprobe_cli_size");
    let file = dir.join("answer.bin");
    std::fs::write(&file, [0u8; 42]).unwrap();

    let output = run_statprobe(&["size", arg(&file)]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "42");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn size_of_directory_fails() {
    let dir = scratch("statprobe_cli_size_dir");

    let output = run_statprobe(&["size", arg(&dir)]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("statprobe_cli_size_dir"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn is_regular_prints_boolean() {
    let dir = scratch("statprobe_cli_is_regular");
    let file = dir.join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    let output = run_statprobe(&["is-regular", arg(&file)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let output = run_statprobe(&["is-regular", arg(&dir)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn status_json_is_parseable() {
    let dir = scratch("statprobe_cli_status_json");
    let file = dir.join("data.txt");
    std::fs::write(&file, "hello").unwrap();

    let output = run_statprobe(&["--json", "status", arg(&file)]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["type"], "regular");
    assert_eq!(value["regular"], true);
    assert_eq!(value["size"], 5);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_path_json_reports_error_object() {
    let dir = scratch("statprobe_cli_missing");
    let missing = dir.join("gone.txt");

    let output = run_statprobe(&["status", arg(&missing), "--json"]);
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["error"]["category"], "generic");
    assert!(value["error"]["code"].is_i64());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_statprobe(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn record_and_replay_via_environment() {
    let dir = scratch("statprobe_cli_record");
    let file = dir.join("kept.bin");
    std::fs::write(&file, [1u8; 9]).unwrap();
    let cassettes = dir.join("cassettes");

    let bin = env!("CARGO_BIN_EXE_statprobe");
    let recorded = Command::new(bin)
        .args(["size", arg(&file)])
        .env("STATPROBE_RECORD", &cassettes)
        .env_remove("STATPROBE_REPLAY")
        .output()
        .unwrap();
    assert!(recorded.status.success());
    assert!(String::from_utf8_lossy(&recorded.stderr).contains("Recording saved to"));

    std::fs::remove_file(&file).unwrap();

    let replayed = Command::new(bin)
        .args(["size", arg(&file)])
        .env("STATPROBE_REPLAY", cassettes.join("metadata.cassette.yaml"))
        .env_remove("STATPROBE_RECORD")
        .output()
        .unwrap();
    assert!(replayed.status.success());
    assert_eq!(String::from_utf8_lossy(&replayed.stdout).trim(), "9");

    let _ = std::fs::remove_dir_all(&dir);
}
