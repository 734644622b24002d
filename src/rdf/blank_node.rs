//! Scoped blank nodes

use super::escape;
use super::scope::ScopeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Blank node (anonymous resource)
///
/// Identity is the pair `(scope, identifier)`. Two nodes with the same label
/// from different scopes are different resources. The scope field comes
/// first so derived equality rejects cross-scope pairs before touching the
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankNode {
    scope: ScopeId,
    identifier: Arc<str>,
}

impl BlankNode {
    /// Create a blank node; the identifier is not validated
    pub fn new(identifier: impl AsRef<str>, scope: ScopeId) -> Self {
        Self {
            scope,
            identifier: Arc::from(identifier.as_ref()),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// N-Triples label, without the `_:` prefix
    pub fn ntriples_label(&self) -> String {
        escape::blank_label(&self.identifier)
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_:")?;
        escape::write_blank_label(f, &self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::TermHash;

    #[test]
    fn test_same_scope_same_identifier() {
        let scope = ScopeId::new();
        let a = BlankNode::new("b0", scope);
        let b = BlankNode::new("b0", scope);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_different_scope_same_identifier() {
        let a = BlankNode::new("b0", ScopeId::new());
        let b = BlankNode::new("b0", ScopeId::new());
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_scope_different_identifier() {
        let scope = ScopeId::new();
        assert_ne!(BlankNode::new("b0", scope), BlankNode::new("b1", scope));
    }

    #[test]
    fn test_display() {
        let scope = ScopeId::new();
        assert_eq!(BlankNode::new("b0", scope).to_string(), "_:b0");
        assert_eq!(BlankNode::new("has space", scope).to_string(), "_:x-686173207370616365");
        assert_eq!(BlankNode::new("b0", scope).ntriples_label(), "b0");
    }

    #[test]
    fn test_accessors() {
        let scope = ScopeId::new();
        let node = BlankNode::new("", scope);
        assert_eq!(node.identifier(), "");
        assert_eq!(node.scope(), scope);
    }
}
