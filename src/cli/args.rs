//! Connection flags shared by several commands.

use clap::Args;

use crate::core::config::{ConjurSection, VaultSection};

/// Vault connection flags.
#[derive(Args, Debug, Clone, Default)]
pub struct VaultArgs {
    /// Vault instance URL [default: http://127.0.0.1:8200]
    #[arg(id = "vault_url", long = "vault-url", env = "VAULT_ADDR")]
    pub url: Option<String>,

    /// The name of your Vault namespace
    #[arg(id = "vault_namespace", long = "vault-namespace", env = "VAULT_NAMESPACE")]
    pub namespace: Option<String>,

    /// Vault token
    #[arg(id = "vault_token", long = "vault-token", env = "VAULT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// KV v2 mount point [default: secret]
    #[arg(id = "vault_mount", long = "vault-mount")]
    pub mount: Option<String>,

    /// Folder to start crawling from [default: /]
    #[arg(id = "vault_start", long = "vault-start")]
    pub start: Option<String>,
}

impl VaultArgs {
    /// Split into config overrides and the token.
    pub fn into_parts(self) -> (VaultSection, Option<String>) {
        let section = VaultSection {
            url: self.url,
            namespace: self.namespace,
            mount: self.mount,
            start: self.start,
        };
        (section, self.token)
    }
}

/// Conjur connection flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ConjurArgs {
    /// Conjur API endpoint for secret update requests
    #[arg(id = "conjur_url", long = "conjur-url", env = "CONJUR_URL")]
    pub url: Option<String>,

    /// Conjur account [default: default]
    #[arg(id = "conjur_account", long = "conjur-account", env = "CONJUR_ACCOUNT")]
    pub account: Option<String>,

    /// Conjur namespace ID, e.g. it/hello_world
    #[arg(id = "conjur_namespace", long = "conjur-namespace", env = "CONJUR_NAMESPACE")]
    pub namespace: Option<String>,

    /// The API key of the namespace's apikey host
    #[arg(id = "conjur_api_key", long = "conjur-api-key", env = "CONJUR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl ConjurArgs {
    /// Split into config overrides and the API key.
    pub fn into_parts(self) -> (ConjurSection, Option<String>) {
        let section = ConjurSection {
            url: self.url,
            account: self.account,
            namespace: self.namespace,
        };
        (section, self.api_key)
    }
}
