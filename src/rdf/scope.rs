//! Blank node scopes
//!
//! A blank node label means something only inside the graph, dataset or
//! parser session that produced it. Each such context owns a [`Scope`], and
//! every blank node carries the [`ScopeId`] of its scope as part of its
//! identity.
//!
//! A scope hands out two kinds of identifier. Named nodes get the UUID v5 of
//! their label under the scope's UUID, which always contains `-`. Fresh nodes
//! get the label prefix (restricted to `[A-Za-z0-9_]`) followed by a counter,
//! which never does. A fresh node therefore never equals a named one.

use super::blank_node::BlankNode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};
use uuid::Uuid;

/// Opaque handle naming one blank node scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(Uuid);

impl ScopeId {
    /// Allocate a handle distinct from every other scope
    pub fn new() -> Self {
        ScopeId(Uuid::new_v4())
    }

    /// Rebuild a handle from a persisted UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        ScopeId(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope:{}", self.0)
    }
}

/// How a scope labels the blank nodes it mints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Prefix of generated labels; characters outside `[A-Za-z0-9_]` are dropped
    pub label_prefix: String,
    /// Counter value of the first generated label
    pub first_label: u64,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            label_prefix: "b".to_string(),
            first_label: 0,
        }
    }
}

/// Scope context that mints blank nodes
///
/// Fresh labels come from an atomic counter, so a shared `&Scope` can be
/// used from many threads at once.
#[derive(Debug)]
pub struct Scope {
    id: ScopeId,
    label_prefix: String,
    next_label: AtomicU64,
}

impl Scope {
    /// Create a scope with default labelling
    pub fn new() -> Self {
        Self::with_config(ScopeConfig::default())
    }

    pub fn with_config(config: ScopeConfig) -> Self {
        let id = ScopeId::new();
        let label_prefix: String = config
            .label_prefix
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        debug!("Created blank node {} with label prefix {:?}", id, label_prefix);
        Self {
            id,
            label_prefix,
            next_label: AtomicU64::new(config.first_label),
        }
    }

    /// Handle stamped on every blank node of this scope
    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// Blank node for an explicit label
    ///
    /// Asking twice for the same label yields equal nodes. The identifier is
    /// derived from the label and this scope, not the label itself, so it
    /// cannot collide with a fresh node. Use [`BlankNode::new`] to keep a
    /// label verbatim.
    pub fn blank_node(&self, label: impl AsRef<str>) -> BlankNode {
        let identifier = Uuid::new_v5(self.id.as_uuid(), label.as_ref().as_bytes());
        BlankNode::new(identifier.to_string(), self.id)
    }

    /// Blank node with a label not yet handed out by this scope
    pub fn fresh_blank_node(&self) -> BlankNode {
        let n = self.next_label.fetch_add(1, Ordering::Relaxed);
        let label = format!("{}{}", self.label_prefix, n);
        trace!("Minted blank node _:{} in {}", label, self.id);
        BlankNode::new(label, self.id)
    }

    /// Whether the node was minted for this scope
    pub fn contains(&self, node: &BlankNode) -> bool {
        node.scope() == self.id
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scope_ids_are_distinct() {
        assert_ne!(ScopeId::new(), ScopeId::new());
        let id = ScopeId::new();
        assert_eq!(ScopeId::from_uuid(*id.as_uuid()), id);
    }

    #[test]
    fn test_named_blank_nodes_in_one_scope() {
        let scope = Scope::new();
        let a = scope.blank_node("x");
        let b = scope.blank_node("x");
        assert_eq!(a, b);
        assert!(scope.contains(&a));
    }

    #[test]
    fn test_named_labels_never_match_fresh_labels() {
        let scope = Scope::new();
        let named = scope.blank_node("b0");
        let fresh = scope.fresh_blank_node();
        assert_eq!(fresh.identifier(), "b0");
        assert_ne!(named, fresh);
        assert_ne!(scope.blank_node(fresh.identifier()), fresh);
    }

    #[test]
    fn test_named_labels_are_stable_per_scope() {
        let scope = Scope::new();
        let named = scope.blank_node("x");
        let expected = Uuid::new_v5(scope.id().as_uuid(), b"x").to_string();
        assert_eq!(named.identifier(), expected);
        assert_ne!(scope.blank_node("y"), named);
        // Another scope derives a different identifier for the same label
        assert_ne!(Scope::new().blank_node("x").identifier(), named.identifier());
    }

    #[test]
    fn test_prefix_restricted_to_plain_characters() {
        let scope = Scope::with_config(ScopeConfig {
            label_prefix: "a-b.".to_string(),
            first_label: 0,
        });
        let fresh = scope.fresh_blank_node();
        assert_eq!(fresh.identifier(), "ab0");
        assert!(!fresh.identifier().contains('-'));
    }

    #[test]
    fn test_fresh_labels_follow_config() {
        let scope = Scope::with_config(ScopeConfig {
            label_prefix: "n".to_string(),
            first_label: 7,
        });
        assert_eq!(scope.fresh_blank_node().identifier(), "n7");
        assert_eq!(scope.fresh_blank_node().identifier(), "n8");
    }

    #[test]
    fn test_fresh_nodes_are_unique_across_threads() {
        let scope = Scope::new();
        let nodes: Vec<BlankNode> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..250).map(|_| scope.fresh_blank_node()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        let unique: HashSet<_> = nodes.iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_other_scope_does_not_contain_node() {
        let a = Scope::new();
        let b = Scope::new();
        assert!(!b.contains(&a.fresh_blank_node()));
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: ScopeConfig = serde_json::from_str(r#"{"label_prefix": "g"}"#).unwrap();
        assert_eq!(config.label_prefix, "g");
        assert_eq!(config.first_label, 0);
    }
}
