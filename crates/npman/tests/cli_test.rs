//! Integration tests for the `npman` CLI binary.
//!
//! These tests validate argument parsing, help output, shell
//! completions, and configuration error handling -- all without
//! requiring a live NPM instance.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `npman` binary with env isolation.
///
/// Clears all `NPM_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn npman_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("npman");
    cmd.env("HOME", "/tmp/npman-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/npman-cli-test-nonexistent")
        .env_remove("NPM_PROFILE")
        .env_remove("NPM_URL")
        .env_remove("NPM_IDENTITY")
        .env_remove("NPM_PASSWORD")
        .env_remove("NPM_OUTPUT")
        .env_remove("NPM_INSECURE")
        .env_remove("NPM_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn no_args_shows_help() {
    npman_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
    npman_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("npman"));
}

#[test]
fn help_lists_entity_commands() {
    let output = npman_cmd().arg("--help").output().unwrap();
    let text = combined_output(&output);
    for cmd in [
        "proxy-hosts",
        "redirection-hosts",
        "dead-hosts",
        "streams",
        "access-lists",
        "certificates",
        "users",
        "settings",
        "system",
        "config",
    ] {
        assert!(text.contains(cmd), "help should list '{cmd}'");
    }
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    npman_cmd().arg("frobnicate").assert().code(2);
}

// ── Subcommand help ─────────────────────────────────────────────────

#[test]
fn proxy_hosts_help_lists_crud_and_toggles() {
    let output = npman_cmd()
        .args(["proxy-hosts", "--help"])
        .output()
        .unwrap();
    let text = combined_output(&output);
    for cmd in ["list", "show", "create", "update", "delete", "enable", "disable"] {
        assert!(text.contains(cmd), "proxy-hosts help should list '{cmd}'");
    }
}

#[test]
fn alias_ph_resolves_to_proxy_hosts() {
    npman_cmd()
        .args(["ph", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proxy host"));
}

#[test]
fn certificates_help_lists_upload_and_validate() {
    let output = npman_cmd()
        .args(["certificates", "--help"])
        .output()
        .unwrap();
    let text = combined_output(&output);
    assert!(text.contains("upload"));
    assert!(text.contains("validate"));
}

// ── Completions ─────────────────────────────────────────────────────

#[test]
fn completions_bash_generates_script() {
    npman_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npman"));
}

#[test]
fn completions_rejects_unknown_shell() {
    npman_cmd().args(["completions", "tcsh"]).assert().code(2);
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn network_command_without_config_fails_cleanly() {
    npman_cmd()
        .args(["proxy-hosts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config").or(predicate::str::contains("instance")));
}

#[test]
fn missing_identity_is_reported_before_any_network_call() {
    // A URL but no identity/password: must fail with a config-class
    // error, not a connection attempt (the host below does not exist).
    npman_cmd()
        .args(["--url", "http://npman-test-nonexistent.invalid:81"])
        .args(["proxy-hosts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("identity"));
}

// ── Config commands (no network) ────────────────────────────────────

#[test]
fn config_path_prints_a_path() {
    npman_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_works_without_a_config_file() {
    npman_cmd().args(["config", "show"]).assert().success();
}
