//! Dump-tree command.
//!
//! Saves the crawled Vault tree as JSON so later runs can translate it
//! without talking to Vault again.

use crate::cli::args::VaultArgs;
use crate::cli::output;
use crate::cli::source::{load_tree, write_output};
use crate::core::config::FileConfig;
use crate::error::{Result, SerializationError};

/// Crawl Vault and write the tree dump.
pub fn execute(file: &FileConfig, vault: VaultArgs, out: &str) -> Result<()> {
    let tree = output::step(1, 2, "Processing logical structure of the Vault namespace", || {
        load_tree(file, vault, None)
    })?;

    let json = tree.to_json().map_err(SerializationError::Json)?;
    output::step(2, 2, "Writing the tree dump", || write_output(out, &json))?;

    if out != "-" {
        output::success(&format!("tree written to {}", output::path(out)));
    }
    Ok(())
}
