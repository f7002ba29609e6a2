//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables the binary reads that must not leak from the host.
const ISOLATED_ENV: &[&str] = &[
    "VAULT_ADDR",
    "VAULT_NAMESPACE",
    "VAULT_TOKEN",
    "CONJUR_URL",
    "CONJUR_ACCOUNT",
    "CONJUR_NAMESPACE",
    "CONJUR_API_KEY",
    "VAULT2CONJUR_LOG",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

impl Test {
    /// Create a vault2conjur command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - NO_COLOR set so output can be matched literally
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vault2conjur").expect("failed to find vault2conjur binary");
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `generate-policy --from-dump dump.json --out <out>`.
    pub fn generate(&self, out: &str) -> Output {
        self.cmd()
            .args(["generate-policy", "--from-dump", "dump.json", "--out", out])
            .output()
            .expect("failed to run vault2conjur generate-policy")
    }

    /// Shortcut for `init-secrets --from-dump dump.json --dry-run`.
    pub fn init_dry_run(&self, namespace: &str) -> Output {
        self.cmd()
            .args([
                "init-secrets",
                "--from-dump",
                "dump.json",
                "--dry-run",
                "--conjur-namespace",
                namespace,
            ])
            .output()
            .expect("failed to run vault2conjur init-secrets --dry-run")
    }
}
