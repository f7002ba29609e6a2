//! Tree to policy translation.

use tracing::debug;

use super::{Host, Policy, PolicyDocument, Resource, Variable};
use crate::core::constants::OWNER_HOST_ID;
use crate::core::tree::SourceTreeNode;

/// Where in the document a node is being translated.
///
/// Ownership is stated on top-level policies only; nested policies inherit it
/// from their parent in Conjur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Root,
    Nested,
}

/// Converts a source tree into Conjur resources.
#[derive(Debug, Clone)]
pub struct PolicyTranslator {
    owner: Host,
}

impl Default for PolicyTranslator {
    fn default() -> Self {
        Self::new(OWNER_HOST_ID)
    }
}

impl PolicyTranslator {
    /// Create a translator whose synthetic owner host has id `owner_id`.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner: Host::new(owner_id),
        }
    }

    /// The host that owns the top-level policies.
    pub fn owner(&self) -> &Host {
        &self.owner
    }

    /// Translate a whole tree into a document.
    pub fn document(&self, root: &SourceTreeNode) -> PolicyDocument {
        let doc = PolicyDocument::new(self.translate(root, Scope::Root));
        debug!(
            policies = doc.policy_count(),
            variables = doc.variable_count(),
            "translated tree"
        );
        doc
    }

    /// Translate one node.
    ///
    /// Folders become `!policy` entries (in stored order) followed by one
    /// `!variable` per key. At [`Scope::Root`] the owner host is emitted first
    /// and attached as `owner` to every policy.
    pub fn translate(&self, node: &SourceTreeNode, scope: Scope) -> Vec<Resource> {
        let root = scope == Scope::Root;
        let mut resources = Vec::with_capacity(
            usize::from(root) + node.children().len() + node.entries().len(),
        );

        if root {
            resources.push(Resource::Host(self.owner.clone()));
        }

        for (name, child) in node.children() {
            resources.push(Resource::Policy(Policy {
                id: name.clone(),
                owner: root.then(|| self.owner.clone()),
                body: self.translate(child, Scope::Nested),
            }));
        }

        resources.extend(
            node.entries()
                .keys()
                .map(|key| Resource::Variable(Variable::new(key.clone()))),
        );

        resources
    }
}
