//! The closed RDF term union
//!
//! Every RDF value is exactly one of IRI, blank node or literal. Equality
//! across variants is always false, whatever strings the values carry.

use super::blank_node::BlankNode;
use super::iri::Iri;
use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant tag of an RDF term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TermKind {
    Iri,
    BlankNode,
    Literal,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::Iri => write!(f, "IRI"),
            TermKind::BlankNode => write!(f, "blank node"),
            TermKind::Literal => write!(f, "literal"),
        }
    }
}

/// RDF term (any RDF value)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RdfTerm {
    /// Named node (IRI)
    Iri(Iri),
    /// Blank node
    BlankNode(BlankNode),
    /// Literal value
    Literal(Literal),
}

impl RdfTerm {
    pub fn kind(&self) -> TermKind {
        match self {
            RdfTerm::Iri(_) => TermKind::Iri,
            RdfTerm::BlankNode(_) => TermKind::BlankNode,
            RdfTerm::Literal(_) => TermKind::Literal,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, RdfTerm::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, RdfTerm::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, RdfTerm::Literal(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            RdfTerm::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            RdfTerm::BlankNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            RdfTerm::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl fmt::Display for RdfTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfTerm::Iri(iri) => write!(f, "{}", iri),
            RdfTerm::BlankNode(node) => write!(f, "{}", node),
            RdfTerm::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

impl From<Iri> for RdfTerm {
    fn from(iri: Iri) -> Self {
        RdfTerm::Iri(iri)
    }
}

impl From<BlankNode> for RdfTerm {
    fn from(node: BlankNode) -> Self {
        RdfTerm::BlankNode(node)
    }
}

impl From<Literal> for RdfTerm {
    fn from(lit: Literal) -> Self {
        RdfTerm::Literal(lit)
    }
}

/// Subject or graph name: an IRI or a blank node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlankNodeOrIri {
    /// Named node (IRI)
    Iri(Iri),
    /// Blank node
    BlankNode(BlankNode),
}

impl BlankNodeOrIri {
    pub fn kind(&self) -> TermKind {
        match self {
            BlankNodeOrIri::Iri(_) => TermKind::Iri,
            BlankNodeOrIri::BlankNode(_) => TermKind::BlankNode,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, BlankNodeOrIri::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, BlankNodeOrIri::BlankNode(_))
    }
}

impl fmt::Display for BlankNodeOrIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlankNodeOrIri::Iri(iri) => write!(f, "{}", iri),
            BlankNodeOrIri::BlankNode(node) => write!(f, "{}", node),
        }
    }
}

impl From<Iri> for BlankNodeOrIri {
    fn from(iri: Iri) -> Self {
        BlankNodeOrIri::Iri(iri)
    }
}

impl From<BlankNode> for BlankNodeOrIri {
    fn from(node: BlankNode) -> Self {
        BlankNodeOrIri::BlankNode(node)
    }
}

impl From<BlankNodeOrIri> for RdfTerm {
    fn from(node: BlankNodeOrIri) -> Self {
        match node {
            BlankNodeOrIri::Iri(iri) => RdfTerm::Iri(iri),
            BlankNodeOrIri::BlankNode(b) => RdfTerm::BlankNode(b),
        }
    }
}

impl TryFrom<RdfTerm> for BlankNodeOrIri {
    type Error = TermKind;

    /// Fails with the kind of the rejected term
    fn try_from(term: RdfTerm) -> Result<Self, TermKind> {
        match term {
            RdfTerm::Iri(iri) => Ok(BlankNodeOrIri::Iri(iri)),
            RdfTerm::BlankNode(b) => Ok(BlankNodeOrIri::BlankNode(b)),
            RdfTerm::Literal(_) => Err(TermKind::Literal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::ScopeId;

    #[test]
    fn test_cross_variant_never_equal() {
        let scope = ScopeId::new();
        let iri: RdfTerm = Iri::new("x").into();
        let blank: RdfTerm = BlankNode::new("x", scope).into();
        let lit: RdfTerm = Literal::new_simple_literal("x").into();
        assert_ne!(iri, blank);
        assert_ne!(iri, lit);
        assert_ne!(blank, lit);
    }

    #[test]
    fn test_kind_dispatch() {
        let iri: RdfTerm = Iri::new("http://example.org/a").into();
        assert_eq!(iri.kind(), TermKind::Iri);
        assert!(iri.is_iri());
        assert_eq!(iri.as_iri().map(Iri::as_str), Some("http://example.org/a"));
        assert!(iri.as_literal().is_none());

        let lit: RdfTerm = Literal::new_simple_literal("a").into();
        assert_eq!(lit.kind(), TermKind::Literal);
        assert!(lit.as_blank_node().is_none());
    }

    #[test]
    fn test_subject_conversions() {
        let scope = ScopeId::new();
        let node = BlankNode::new("b0", scope);
        let subject = BlankNodeOrIri::from(node.clone());
        assert!(subject.is_blank_node());
        assert_eq!(RdfTerm::from(subject), RdfTerm::BlankNode(node));

        let lit = RdfTerm::from(Literal::new_simple_literal("a"));
        assert_eq!(BlankNodeOrIri::try_from(lit), Err(TermKind::Literal));
    }

    #[test]
    fn test_display() {
        let scope = ScopeId::new();
        assert_eq!(RdfTerm::from(Iri::new("http://example.org/a")).to_string(), "<http://example.org/a>");
        assert_eq!(RdfTerm::from(BlankNode::new("b1", scope)).to_string(), "_:b1");
    }
}
