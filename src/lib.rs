//! vault2conjur - Clone a HashiCorp Vault namespace into CyberArk Conjur.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Vault tree -> policy YAML
//! │   ├── init          # Vault tree -> Conjur variable values
//! │   ├── dump          # Vault tree -> JSON dump
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Flag/file/default layering
//!     ├── source/       # SourceStore trait + Vault KV v2 client
//!     ├── target/       # TargetStore trait + Conjur client
//!     ├── tree          # SourceTreeNode + TreeBuilder crawler
//!     ├── policy/       # Resource model, translator, YAML serializer
//!     ├── flatten       # Tree -> path-keyed secret map
//!     └── initializer   # Authenticated, partial-failure tolerant writes
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceStore -> TreeBuilder -> SourceTreeNode -+-> PolicyTranslator -> serialize -> policy.yml
//!                                               +-> flatten -> SecretInitializer -> TargetStore
//! ```

pub mod cli;
pub mod core;
pub mod error;

#[cfg(test)]
pub(crate) mod testing;
