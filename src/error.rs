//! Error types.
//!
//! Each phase of a migration has its own error enum. They are folded into
//! [`Error`] so commands can propagate with `?` and `main` can tell which
//! phase failed.

use thiserror::Error;

/// Top-level error for all vault2conjur operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Crawling the source store failed.
    #[error("source store: {0}")]
    Source(#[from] SourceStoreError),

    /// Authenticating against the target store failed.
    #[error("target store: {0}")]
    TargetAuth(#[from] TargetAuthError),

    /// Rendering or parsing a policy document or tree dump failed.
    #[error("serialization: {0}")]
    Serialization(#[from] SerializationError),

    /// Configuration could not be loaded or is incomplete.
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    /// A migration finished with failures the caller must see.
    #[error("{0}")]
    Incomplete(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the source store. Always fatal for the crawl.
#[derive(Error, Debug)]
pub enum SourceStoreError {
    #[error("request to {path} failed: {reason}")]
    Http { path: String, reason: String },

    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("unexpected response for {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("token was rejected")]
    Unauthenticated,
}

/// Failures obtaining an access token from the target store.
#[derive(Error, Debug)]
pub enum TargetAuthError {
    #[error("authentication rejected with status {status}")]
    Rejected { status: u16 },

    #[error("authentication request failed: {0}")]
    Transport(String),
}

/// A single secret could not be written. Tallied, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretWriteError {
    #[error("unable to set secret {path}, status code {status}")]
    Rejected { path: String, status: u16 },

    #[error("unable to set secret {path}: {reason}")]
    Transport { path: String, reason: String },
}

impl SecretWriteError {
    /// The variable path the write was addressed to.
    pub fn path(&self) -> &str {
        match self {
            Self::Rejected { path, .. } | Self::Transport { path, .. } => path,
        }
    }

    /// HTTP status of a rejected write, if the target answered at all.
    pub fn error_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

/// Policy YAML or tree dump (de)serialization errors.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("policy yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("tree dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("missing required value: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
