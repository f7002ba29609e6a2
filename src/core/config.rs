//! Configuration management.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags (or their environment variables), a TOML config file, and the
//! built-in defaults in [`constants`]. Credentials are never read from the
//! file.
//!
//! ```toml
//! [vault]
//! url = "https://vault.example.com:8200"
//! namespace = "team-a"
//! mount = "secret"
//! start = "/"
//!
//! [conjur]
//! url = "https://conjur.example.com"
//! account = "acme"
//! namespace = "it/app"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub vault: VaultSection,
    #[serde(default)]
    pub conjur: ConjurSection,
}

/// Vault connection values. Also used for flag overrides.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaultSection {
    pub url: Option<String>,
    pub namespace: Option<String>,
    pub mount: Option<String>,
    pub start: Option<String>,
}

/// Conjur connection values. Also used for flag overrides.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConjurSection {
    pub url: Option<String>,
    pub account: Option<String>,
    pub namespace: Option<String>,
}

/// Fully resolved Vault settings.
pub struct VaultSettings {
    pub url: String,
    pub namespace: Option<String>,
    pub mount: String,
    pub start: String,
    pub token: Zeroizing<String>,
}

/// Fully resolved Conjur settings.
pub struct ConjurSettings {
    pub url: String,
    pub account: String,
    pub namespace: String,
    pub api_key: Zeroizing<String>,
}

impl ConjurSettings {
    /// Identity the initializer logs in as: `host/<namespace>/<owner>`.
    pub fn host_identity(&self) -> String {
        format!(
            "host/{}/{}",
            self.namespace.trim_matches('/'),
            constants::OWNER_HOST_ID
        )
    }
}

impl FileConfig {
    /// Parse a config file body.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or has unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `.vault2conjur.toml` in the
    /// current directory is tried, then `vault2conjur/config.toml` in the user
    /// config directory. Finding neither yields an empty config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::discover() {
                Some(p) => p,
                None => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&contents)
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(constants::CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|d| d.join("vault2conjur").join("config.toml"))
            .filter(|p| p.exists())
    }
}

impl VaultSection {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: &VaultSection) -> Self {
        Self {
            url: self.url.or_else(|| fallback.url.clone()),
            namespace: self.namespace.or_else(|| fallback.namespace.clone()),
            mount: self.mount.or_else(|| fallback.mount.clone()),
            start: self.start.or_else(|| fallback.start.clone()),
        }
    }

    /// Apply defaults and attach the token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` without a token, or
    /// `ConfigError::InvalidValue` for a malformed URL.
    pub fn resolve(self, token: Option<String>) -> Result<VaultSettings> {
        let url = self.url.unwrap_or_else(|| constants::VAULT_URL.to_string());
        validate_url("vault.url", &url)?;

        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "vault token",
            })?;

        Ok(VaultSettings {
            url,
            namespace: self.namespace.filter(|n| !n.is_empty()),
            mount: self
                .mount
                .unwrap_or_else(|| constants::VAULT_MOUNT.to_string()),
            start: self
                .start
                .unwrap_or_else(|| constants::VAULT_START.to_string()),
            token: Zeroizing::new(token),
        })
    }
}

impl ConjurSection {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: &ConjurSection) -> Self {
        Self {
            url: self.url.or_else(|| fallback.url.clone()),
            account: self.account.or_else(|| fallback.account.clone()),
            namespace: self.namespace.or_else(|| fallback.namespace.clone()),
        }
    }

    /// The namespace used as the flattening prefix, if known.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when unset.
    pub fn require_namespace(&self) -> Result<String> {
        let namespace = self
            .namespace
            .as_deref()
            .map(|n| n.trim_matches('/'))
            .filter(|n| !n.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "conjur namespace",
            })?;
        Ok(namespace.to_string())
    }

    /// Apply defaults and attach the API key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` for a missing URL, namespace or
    /// API key, or `ConfigError::InvalidValue` for a malformed URL.
    pub fn resolve(self, api_key: Option<String>) -> Result<ConjurSettings> {
        let namespace = self.require_namespace()?;
        let url = self.url.ok_or(ConfigError::MissingField {
            field: "conjur url",
        })?;
        validate_url("conjur.url", &url)?;

        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "conjur api key",
            })?;

        Ok(ConjurSettings {
            url,
            account: self
                .account
                .unwrap_or_else(|| constants::CONJUR_ACCOUNT.to_string()),
            namespace,
            api_key: Zeroizing::new(api_key),
        })
    }
}

fn validate_url(field: &'static str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected an http(s) URL, got '{}'", url),
        }
        .into())
    }
}
