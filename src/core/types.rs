//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use indexmap::IndexMap;

/// A key inside a Vault secret (e.g., `password`).
pub type SecretKey = String;

/// A plaintext secret value, coerced to string form.
pub type SecretValue = String;

/// A folder name within one level of the source hierarchy.
pub type FolderName = String;

/// A slash-joined Conjur variable id (e.g., `it/app/db/password`).
pub type VariablePath = String;

/// Fully-qualified variable path to value, in crawl order.
pub type FlattenedSecretMap = IndexMap<VariablePath, SecretValue>;
