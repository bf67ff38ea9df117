//! Integration tests for the `tagview` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `tagview` binary with env isolation.
///
/// Clears all `TAGVIEW_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn tagview_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tagview");
    cmd.env("HOME", "/tmp/tagview-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/tagview-cli-test-nonexistent")
        .env_remove("TAGVIEW_PROFILE")
        .env_remove("TAGVIEW_SERVER")
        .env_remove("TAGVIEW_OUTPUT")
        .env_remove("TAGVIEW_INSECURE")
        .env_remove("TAGVIEW_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = tagview_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    tagview_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("edges"))
        .stdout(predicate::str::contains("currents"))
        .stdout(predicate::str::contains("widgets"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_version_flag() {
    tagview_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tagview"));
}

#[test]
fn test_unknown_subcommand_fails() {
    tagview_cmd().arg("frobnicate").assert().failure();
}

// ── Config commands (no backend needed) ─────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    tagview_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_prints_defaults() {
    tagview_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_profile"));
}

// ── Completions ─────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    tagview_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tagview"));
}

// ── Connection errors ───────────────────────────────────────────────

#[test]
fn test_missing_server_is_a_usage_error() {
    let output = tagview_cmd().arg("edges").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("server"),
        "Expected a no-server hint in output:\n{text}"
    );
}

#[test]
fn test_unreachable_server_fails_with_connection_code() {
    // Port 1 on localhost refuses connections.
    let output = tagview_cmd()
        .args(["--server", "http://127.0.0.1:1", "edges"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "Expected connection exit code");
}
