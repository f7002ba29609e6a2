//! Constants used throughout vault2conjur.
//!
//! Centralizes magic strings and default configuration values.

/// Reserved id of the host that owns every top-level policy.
pub const OWNER_HOST_ID: &str = "apikey";

/// Separator between path segments in both stores.
pub const PATH_SEPARATOR: char = '/';

/// Project configuration file name.
pub const CONFIG_FILE: &str = ".vault2conjur.toml";

/// Default Vault address.
pub const VAULT_URL: &str = "http://127.0.0.1:8200";

/// Default KV v2 mount point.
pub const VAULT_MOUNT: &str = "secret";

/// Folder the crawl starts from when none is given.
pub const VAULT_START: &str = "/";

/// Default Conjur account.
pub const CONJUR_ACCOUNT: &str = "default";

/// Default destination for the generated policy.
pub const POLICY_OUT_FILE: &str = "policy.yml";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "VAULT2CONJUR_LOG";
