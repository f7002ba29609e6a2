//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate-policy"))
        .stdout(predicate::str::contains("init-secrets"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault2conjur"));
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::with_dump();

    let output = t
        .cmd()
        .args(["--verbose", "generate-policy", "--from-dump", "dump.json", "--out", "-"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_default_no_debug_logs() {
    let t = Test::with_dump();

    let output = t.generate("-");
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("TRACE"));
}

#[test]
fn test_log_env_var_enables_debug() {
    let t = Test::with_dump();

    let output = t
        .cmd()
        .env("VAULT2CONJUR_LOG", "vault2conjur=debug")
        .args(["generate-policy", "--from-dump", "dump.json", "--out", "-"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_invalid_vault_url_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["dump-tree", "--vault-url", "vault:8200", "--vault-token", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vault.url"));
}

#[test]
fn test_malformed_config_file_fails() {
    let t = Test::with_dump();
    t.write(".vault2conjur.toml", "[vault\nurl = ");

    let output = t.generate("-");
    assert_failure(&output);
    assert_stderr_contains(&output, "config");
}

#[test]
fn test_explicit_missing_config_fails() {
    let t = Test::with_dump();

    let output = t
        .cmd()
        .args(["--config", "nope.toml", "generate-policy", "--from-dump", "dump.json"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vault2conjur"));
}
