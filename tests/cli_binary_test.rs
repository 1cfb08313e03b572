//! Binary integration tests for CLI commands
//!
//! These tests run the actual hello-button binary to exercise the
//! non-interactive CLI code paths.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Binary with an isolated config location, so a developer's own config
/// never leaks into the assertions.
fn hello_bin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hello-button"));
    cmd.env("HELLO_BUTTON_CONFIG", config_dir.path().join("config.json"));
    cmd.env_remove("DEBUG");
    cmd
}

/// Binary reading its config from the platform default location under
/// `config_home`.
fn hello_bin_default_location(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hello-button"));
    cmd.env_remove("HELLO_BUTTON_CONFIG");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("APPDATA", config_home.path());
    cmd.env_remove("DEBUG");
    cmd
}

fn snapshot(args: &[&str]) -> Value {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir).arg("snapshot").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Depth-first search for a node with `test_id`.
fn find_test_id<'a>(node: &'a Value, test_id: &str) -> Option<&'a Value> {
    if node["test_id"] == test_id {
        return Some(node);
    }
    node["children"]
        .as_array()?
        .iter()
        .find_map(|child| find_test_id(child, test_id))
}

fn subtree_text(node: &Value) -> String {
    let mut out = node["text"].as_str().unwrap_or_default().to_string();
    if let Some(children) = node["children"].as_array() {
        for child in children {
            out.push_str(&subtree_text(child));
        }
    }
    out
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hello modal"));
    assert!(stdout.contains("snapshot"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir).arg("--version").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir).arg("--invalid-flag").output().unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_snapshot_closed_demo_page() {
    let json = snapshot(&[]);

    assert_eq!(json["title"], "/mytest");
    assert_eq!(json["visibility"], "closed");
    assert_eq!(json["variant"], "tailgrids");

    let trigger = find_test_id(&json["scene"], "hello-button").unwrap();
    assert_eq!(subtree_text(trigger), "Click Me!");
    assert!(find_test_id(&json["scene"], "hello-modal").is_none());
}

#[test]
fn test_snapshot_open_contains_message() {
    let json = snapshot(&["--open", "--variant", "flowbite"]);

    assert_eq!(json["visibility"], "open");
    let surface = find_test_id(&json["scene"], "hello-modal").unwrap();
    assert!(subtree_text(surface).contains("hello!"));
}

#[test]
fn test_snapshot_story_and_label_override() {
    let json = snapshot(&["--story", "default"]);
    let trigger = find_test_id(&json["scene"], "hello-button").unwrap();
    assert_eq!(subtree_text(trigger), "Open Modal");

    let json = snapshot(&["--story", "default", "--label", "Wave"]);
    let trigger = find_test_id(&json["scene"], "hello-button").unwrap();
    assert_eq!(subtree_text(trigger), "Wave");
    assert_eq!(json["title"], "Components/HelloButton/Default");
}

#[test]
fn test_snapshot_respects_size() {
    let json = snapshot(&["--width", "40", "--height", "12"]);
    assert_eq!(json["scene"]["bounds"]["width"], 40);
    assert_eq!(json["scene"]["bounds"]["height"], 12);
}

#[test]
fn test_snapshot_unknown_story_fails() {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir)
        .args(["snapshot", "--story", "Primary"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown story"));
}

#[test]
fn test_stories_lists_both() {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir).arg("stories").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Components/HelloButton"));
    assert!(stdout.contains("Default"));
    assert!(stdout.contains("CustomLabel"));
    assert!(stdout.contains("custom-label"));
}

#[test]
fn test_config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    let output = hello_bin(&dir).args(["config", "--path"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.json").display().to_string()
    );
}

#[test]
fn test_config_show_reads_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"variant": "plain", "label": "From file"}"#,
    )
    .unwrap();

    let output = hello_bin(&dir).arg("config").output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variant"], "plain");
    assert_eq!(json["label"], "From file");
    assert_eq!(json["poll_interval_ms"], 100);
}

#[test]
fn test_explicit_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{").unwrap();

    let output = hello_bin(&dir)
        .args(["config", "--config"])
        .arg(&bad)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_broken_env_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{").unwrap();

    let output = hello_bin(&dir).arg("config").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_missing_env_config_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let output = hello_bin(&dir).arg("config").output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variant"], "tailgrids");
}

#[test]
fn test_broken_default_config_falls_back() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("hello-button");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{").unwrap();

    let output = hello_bin_default_location(&dir)
        .arg("config")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using defaults"));
}
