//! Source tree model and crawler.
//!
//! [`TreeBuilder`] walks a [`SourceStore`] depth-first and materializes the
//! folder hierarchy as a [`SourceTreeNode`]. The tree is built once and only
//! read afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::constants::PATH_SEPARATOR;
use crate::core::source::SourceStore;
use crate::core::types::{FolderName, SecretKey, SecretValue};
use crate::error::SourceStoreError;

/// One folder level of the source hierarchy.
///
/// A name can carry both nested folders and key/value pairs at once when the
/// store has a folder and a secret with the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTreeNode {
    #[serde(default)]
    children: IndexMap<FolderName, SourceTreeNode>,
    #[serde(default)]
    entries: IndexMap<SecretKey, SecretValue>,
}

impl SourceTreeNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a nested folder, replacing any previous one with the same name.
    pub fn with_child(mut self, name: impl Into<FolderName>, child: SourceTreeNode) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Add a key/value pair.
    pub fn with_entry(mut self, key: impl Into<SecretKey>, value: impl Into<SecretValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Nested folders in crawl order.
    pub fn children(&self) -> &IndexMap<FolderName, SourceTreeNode> {
        &self.children
    }

    /// Key/value pairs held directly at this level, in crawl order.
    pub fn entries(&self) -> &IndexMap<SecretKey, SecretValue> {
        &self.entries
    }

    /// Number of key/value pairs in this node and everything below it.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
            + self
                .children
                .values()
                .map(SourceTreeNode::entry_count)
                .sum::<usize>()
    }

    /// Number of folders below this node.
    pub fn folder_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(SourceTreeNode::folder_count)
                .sum::<usize>()
    }

    /// Whether the node has neither folders nor entries.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.entries.is_empty()
    }

    /// Load a tree previously written with [`SourceTreeNode::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the dump is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the tree as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Depth-first crawler over a [`SourceStore`].
pub struct TreeBuilder<'a, S: SourceStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SourceStore + ?Sized> TreeBuilder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Crawl everything below `start` into a tree.
    ///
    /// The contents of `start` become the root's children; the root itself
    /// holds no entries.
    ///
    /// # Errors
    ///
    /// Returns the first `SourceStoreError` raised by the store. No partial
    /// tree is returned.
    pub fn build(&self, start: &str) -> Result<SourceTreeNode, SourceStoreError> {
        let start = folder_path(start);
        info!(start = %start, "crawling source store");

        let root = SourceTreeNode {
            children: self.crawl(&start)?,
            entries: IndexMap::new(),
        };

        info!(
            folders = root.folder_count(),
            entries = root.entry_count(),
            "crawl complete"
        );
        Ok(root)
    }

    fn crawl(&self, folder: &str) -> Result<IndexMap<FolderName, SourceTreeNode>, SourceStoreError> {
        let mut level: IndexMap<FolderName, SourceTreeNode> = IndexMap::new();

        for path in self.store.list_children(folder)? {
            let Some(name) = clean_name(&path) else {
                warn!(path = %path, "skipping entry without a name");
                continue;
            };

            if is_folder(&path) {
                debug!(path = %path, "descending into folder");
                let children = self.crawl(&path)?;
                level
                    .entry(name.to_string())
                    .or_default()
                    .children
                    .extend(children);
            } else {
                let Some(values) = self.store.read_secret_values(&path)? else {
                    debug!(path = %path, "skipping deleted secret");
                    continue;
                };
                debug!(path = %path, keys = values.len(), "read secret");
                let node = level.entry(name.to_string()).or_default();
                for (key, value) in values {
                    node.entries.insert(key, coerce_value(value));
                }
            }
        }

        Ok(level)
    }
}

/// Whether a listed path denotes a folder.
pub fn is_folder(path: &str) -> bool {
    path.ends_with(PATH_SEPARATOR)
}

/// The last non-empty segment of a listed path.
pub fn clean_name(path: &str) -> Option<&str> {
    path.split(PATH_SEPARATOR).rev().find(|s| !s.is_empty())
}

/// Render any source value as a string. Strings pass through verbatim.
pub fn coerce_value(value: serde_json::Value) -> SecretValue {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

fn folder_path(path: &str) -> String {
    if is_folder(path) {
        path.to_string()
    } else {
        format!("{}{}", path, PATH_SEPARATOR)
    }
}
