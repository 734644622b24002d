//! Conversions to and from oxrdf
//!
//! oxrdf has no notion of blank node scope: going out drops it, coming back
//! in requires the caller to name one. Blank node identifiers leave as their
//! N-Triples label and are decoded on the way back, so within one scope a
//! blank node survives the round trip unchanged.

use super::blank_node::BlankNode;
use super::error::{RdfError, RdfResult};
use super::escape;
use super::iri::Iri;
use super::literal::Literal;
use super::scope::ScopeId;
use super::term::{BlankNodeOrIri, RdfTerm};
use super::triple::Triple;
use oxrdf::{
    BlankNode as OxBlankNode,
    Literal as OxLiteral,
    NamedNode as OxNamedNode,
    Subject as OxSubject,
    Term as OxTerm,
    Triple as OxTriple,
};

impl From<&Iri> for OxNamedNode {
    fn from(iri: &Iri) -> Self {
        OxNamedNode::new_unchecked(iri.as_str())
    }
}

impl From<OxNamedNode> for Iri {
    fn from(node: OxNamedNode) -> Self {
        Iri::from(node.into_string())
    }
}

impl From<&BlankNode> for OxBlankNode {
    fn from(node: &BlankNode) -> Self {
        OxBlankNode::new_unchecked(node.ntriples_label())
    }
}

impl BlankNode {
    /// Adopt an oxrdf blank node into `scope`
    ///
    /// Labels hex-encoded on export are decoded; foreign labels are kept.
    pub fn from_oxrdf(node: &OxBlankNode, scope: ScopeId) -> Self {
        BlankNode::new(escape::decode_blank_label(node.as_str()), scope)
    }
}

impl From<&Literal> for OxLiteral {
    fn from(lit: &Literal) -> Self {
        match lit.language_tag() {
            // oxrdf expects lowercase tags
            Some(tag) => OxLiteral::new_language_tagged_literal_unchecked(
                lit.lexical_form(),
                tag.normalized(),
            ),
            None => OxLiteral::new_typed_literal(
                lit.lexical_form(),
                OxNamedNode::from(lit.datatype()),
            ),
        }
    }
}

impl TryFrom<OxLiteral> for Literal {
    type Error = RdfError;

    fn try_from(lit: OxLiteral) -> RdfResult<Self> {
        Literal::new(
            lit.value(),
            Iri::new(lit.datatype().as_str()),
            lit.language(),
        )
    }
}

impl From<&RdfTerm> for OxTerm {
    fn from(term: &RdfTerm) -> Self {
        match term {
            RdfTerm::Iri(iri) => OxTerm::NamedNode(iri.into()),
            RdfTerm::BlankNode(node) => OxTerm::BlankNode(node.into()),
            RdfTerm::Literal(lit) => OxTerm::Literal(lit.into()),
        }
    }
}

impl From<&BlankNodeOrIri> for OxSubject {
    fn from(subject: &BlankNodeOrIri) -> Self {
        match subject {
            BlankNodeOrIri::Iri(iri) => OxSubject::NamedNode(iri.into()),
            BlankNodeOrIri::BlankNode(node) => OxSubject::BlankNode(node.into()),
        }
    }
}

impl RdfTerm {
    /// Convert an oxrdf term, placing blank nodes in `scope`
    pub fn from_oxrdf(term: OxTerm, scope: ScopeId) -> RdfResult<Self> {
        match term {
            OxTerm::NamedNode(n) => Ok(RdfTerm::Iri(n.into())),
            OxTerm::BlankNode(b) => Ok(RdfTerm::BlankNode(BlankNode::from_oxrdf(&b, scope))),
            OxTerm::Literal(l) => Ok(RdfTerm::Literal(l.try_into()?)),
            #[allow(unreachable_patterns)]
            other => Err(RdfError::UnsupportedTerm(other.to_string())),
        }
    }
}

impl BlankNodeOrIri {
    /// Convert an oxrdf subject, placing blank nodes in `scope`
    pub fn from_oxrdf(subject: OxSubject, scope: ScopeId) -> RdfResult<Self> {
        match subject {
            OxSubject::NamedNode(n) => Ok(BlankNodeOrIri::Iri(n.into())),
            OxSubject::BlankNode(b) => Ok(BlankNodeOrIri::BlankNode(BlankNode::from_oxrdf(&b, scope))),
            #[allow(unreachable_patterns)]
            other => Err(RdfError::UnsupportedTerm(other.to_string())),
        }
    }
}

impl Triple {
    /// Convert to oxrdf Triple
    pub fn to_oxrdf(&self) -> OxTriple {
        OxTriple::new(
            OxSubject::from(&self.subject),
            OxNamedNode::from(&self.predicate),
            OxTerm::from(&self.object),
        )
    }

    /// Convert an oxrdf triple, placing blank nodes in `scope`
    pub fn from_oxrdf(triple: OxTriple, scope: ScopeId) -> RdfResult<Self> {
        Ok(Triple {
            subject: BlankNodeOrIri::from_oxrdf(triple.subject, scope)?,
            predicate: triple.predicate.into(),
            object: RdfTerm::from_oxrdf(triple.object, scope)?,
        })
    }
}
