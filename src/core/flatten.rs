//! Tree flattening.
//!
//! Turns a [`SourceTreeNode`] into the path-keyed values that get written to
//! Conjur variables. Kept apart from the policy document, which never holds
//! secret values.

use tracing::{debug, warn};

use crate::core::constants::PATH_SEPARATOR;
use crate::core::tree::SourceTreeNode;
use crate::core::types::FlattenedSecretMap;

/// Flatten a tree below `current_path`.
///
/// The top-level call passes the Conjur namespace (e.g. `it/app`) so every
/// key comes out as `<namespace>/<folders...>/<key>`. Folders are visited
/// before the node's own keys.
pub fn flatten(node: &SourceTreeNode, current_path: &str) -> FlattenedSecretMap {
    let mut variables = FlattenedSecretMap::new();
    collect(node, current_path, &mut variables);
    debug!(count = variables.len(), "flattened secrets");
    variables
}

fn collect(node: &SourceTreeNode, current_path: &str, into: &mut FlattenedSecretMap) {
    for (name, child) in node.children() {
        collect(child, &join(current_path, name), into);
    }

    for (key, value) in node.entries() {
        let path = join(current_path, key);
        if into.insert(path.clone(), value.clone()).is_some() {
            warn!(path = %path, "duplicate variable path, keeping the later value");
        }
    }
}

fn join(base: &str, segment: &str) -> String {
    format!("{}{}{}", base, PATH_SEPARATOR, segment)
}
