//! Source store access.
//!
//! The crawler only needs three things from the store it migrates from:
//! listing a folder, reading the key/value pairs of a secret, and checking
//! that a token is accepted.
//!
//! ## Adding a New Source Backend
//!
//! 1. Implement the `SourceStore` trait
//! 2. Add the implementation in a new file next to `vault.rs`
//! 3. Re-export from this module

use indexmap::IndexMap;

use crate::error::SourceStoreError;

mod vault;

pub use vault::Vault;

/// Raw key/value pairs of one secret, before string coercion.
pub type SecretData = IndexMap<String, serde_json::Value>;

/// Read access to a hierarchical secret store.
pub trait SourceStore {
    /// Attach a token to the client and report whether the store accepts it.
    ///
    /// # Errors
    ///
    /// Returns `SourceStoreError` if the check itself cannot be performed.
    fn authenticate(&mut self, token: &str) -> Result<bool, SourceStoreError>;

    /// List the entries of a folder.
    ///
    /// Returned paths are fully qualified: `path` joined with the entry name.
    /// Entries ending in `/` are folders, the rest are secrets.
    ///
    /// # Errors
    ///
    /// Returns `SourceStoreError` on transport or authorization failure.
    fn list_children(&self, path: &str) -> Result<Vec<String>, SourceStoreError>;

    /// Read the key/value pairs of a secret.
    ///
    /// Returns `None` for deleted or destroyed secrets.
    ///
    /// # Errors
    ///
    /// Returns `SourceStoreError` on transport or authorization failure.
    fn read_secret_values(&self, path: &str) -> Result<Option<SecretData>, SourceStoreError>;
}
