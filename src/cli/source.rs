//! Obtaining the source tree, either by crawling Vault or from a dump.

use std::path::Path;
use tracing::debug;

use crate::cli::args::VaultArgs;
use crate::core::config::{FileConfig, VaultSettings};
use crate::core::source::{SourceStore, Vault};
use crate::core::tree::{SourceTreeNode, TreeBuilder};
use crate::error::{Result, SerializationError, SourceStoreError};

/// Crawl Vault, or read `from_dump` when given.
pub fn load_tree(file: &FileConfig, args: VaultArgs, from_dump: Option<&Path>) -> Result<SourceTreeNode> {
    match from_dump {
        Some(path) => read_dump(path),
        None => {
            let (flags, token) = args.into_parts();
            crawl(flags.or(&file.vault).resolve(token)?)
        }
    }
}

/// Authenticate to Vault and crawl from the configured start folder.
pub fn crawl(settings: VaultSettings) -> Result<SourceTreeNode> {
    let mut store = Vault::new(&settings.url, settings.namespace.as_deref(), &settings.mount)?;
    if !store.authenticate(&settings.token)? {
        return Err(SourceStoreError::Unauthenticated.into());
    }
    Ok(TreeBuilder::new(&store).build(&settings.start)?)
}

/// Read a tree written by `dump-tree`.
pub fn read_dump(path: &Path) -> Result<SourceTreeNode> {
    debug!(path = %path.display(), "reading tree dump");
    let contents = std::fs::read_to_string(path)?;
    Ok(SourceTreeNode::from_json(&contents).map_err(SerializationError::Json)?)
}

/// Write `contents` to `out`, or to stdout when `out` is `-`.
pub fn write_output(out: &str, contents: &str) -> Result<()> {
    if out == "-" {
        crate::cli::output::raw(contents);
    } else {
        std::fs::write(out, contents)?;
    }
    Ok(())
}
