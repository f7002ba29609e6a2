//! Generate-policy command.
//!
//! Crawls the Vault namespace, translates it into a Conjur policy and writes
//! the YAML for loading manually in Conjur.

use std::path::Path;

use crate::cli::args::VaultArgs;
use crate::cli::output;
use crate::cli::source::{load_tree, write_output};
use crate::core::config::FileConfig;
use crate::core::policy::{self, PolicyTranslator};
use crate::error::Result;

/// Generate the policy file.
pub fn execute(file: &FileConfig, vault: VaultArgs, from_dump: Option<&Path>, out: &str) -> Result<()> {
    let tree = output::step(1, 3, "Processing logical structure of the Vault namespace", || {
        load_tree(file, vault, from_dump)
    })?;

    let yaml = output::step(2, 3, "Generating the YAML policy", || {
        policy::serialize(&PolicyTranslator::default().document(&tree))
    })?;

    output::step(3, 3, "Writing the policy", || write_output(out, &yaml))?;

    if out != "-" {
        output::success(&format!("policy written to {}", output::path(out)));
    }
    output::kv("policies:", tree.folder_count());
    output::kv("variables:", tree.entry_count());
    Ok(())
}
