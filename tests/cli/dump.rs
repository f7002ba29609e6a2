//! Tests for the dump-tree command.

use crate::support::server::serve;
use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_dump_requires_vault_token() {
    let t = Test::new();

    let output = t.cmd().arg("dump-tree").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "vault token");
}

#[test]
fn test_dump_unreachable_vault_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "dump-tree",
            "--vault-url",
            UNREACHABLE_URL,
            "--vault-token",
            "s.test",
            "--out",
            "tree.json",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "source store");
    assert!(!t.exists("tree.json"));
}

#[test]
fn test_generate_without_dump_crawls_vault() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "generate-policy",
            "--vault-url",
            UNREACHABLE_URL,
            "--vault-token",
            "s.test",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "source store");
    assert!(!t.exists("policy.yml"));
}

#[test]
fn test_dump_crawls_names_with_reserved_characters() {
    let t = Test::new();
    let (url, requests) = serve(vec![
        (200, r#"{"data":{}}"#),
        (200, r#"{"data":{"keys":["a#b"]}}"#),
        (200, r#"{"data":{"data":{"pass":"hunter2"}}}"#),
    ]);

    t.cmd()
        .args(["dump-tree", "--vault-url", url.as_str(), "--vault-token", "s.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""a#b""#))
        .stdout(predicate::str::contains("hunter2"));

    let lines: Vec<String> = requests.iter().map(|r| r.line).collect();
    assert!(lines[1].starts_with("GET /v1/secret/metadata/?list=true "));
    assert!(lines[2].starts_with("GET /v1/secret/data/a%23b "), "{}", lines[2]);
}

#[test]
fn test_dump_rejected_token_fails() {
    let t = Test::new();
    let (url, _requests) = serve(vec![(403, "{}")]);

    t.cmd()
        .args(["dump-tree", "--vault-url", url.as_str(), "--vault-token", "s.bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token was rejected"));
}
