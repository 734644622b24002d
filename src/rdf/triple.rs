//! Triples and quads built from terms
//!
//! Equality is plain component-wise equality, so it inherits the scoping of
//! blank nodes: the same triple shape minted in two scopes is two triples.

use super::error::{RdfError, RdfResult};
use super::iri::Iri;
use super::term::{BlankNodeOrIri, RdfTerm};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject
    pub subject: BlankNodeOrIri,
    /// Predicate
    pub predicate: Iri,
    /// Object
    pub object: RdfTerm,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<BlankNodeOrIri>,
        predicate: Iri,
        object: impl Into<RdfTerm>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    /// Build a triple from untyped terms, checking each position
    pub fn from_terms(subject: RdfTerm, predicate: RdfTerm, object: RdfTerm) -> RdfResult<Self> {
        let subject = BlankNodeOrIri::try_from(subject).map_err(|kind| {
            RdfError::InvalidTermPosition {
                kind,
                position: "subject",
            }
        })?;
        let predicate = match predicate {
            RdfTerm::Iri(iri) => iri,
            other => {
                return Err(RdfError::InvalidTermPosition {
                    kind: other.kind(),
                    position: "predicate",
                })
            }
        };
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// RDF quad (triple + graph name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quad {
    /// Subject
    pub subject: BlankNodeOrIri,
    /// Predicate
    pub predicate: Iri,
    /// Object
    pub object: RdfTerm,
    /// Graph name (None = default graph)
    pub graph_name: Option<BlankNodeOrIri>,
}

impl Quad {
    /// Create a new quad
    pub fn new(
        subject: impl Into<BlankNodeOrIri>,
        predicate: Iri,
        object: impl Into<RdfTerm>,
        graph_name: Option<BlankNodeOrIri>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph_name,
        }
    }

    /// Create a quad in the default graph
    pub fn from_triple(triple: Triple) -> Self {
        Self {
            subject: triple.subject,
            predicate: triple.predicate,
            object: triple.object,
            graph_name: None,
        }
    }

    /// Get the triple part (without graph name)
    pub fn as_triple(&self) -> Triple {
        Triple {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(graph) = &self.graph_name {
            write!(
                f,
                "{} {} {} {} .",
                self.subject, self.predicate, self.object, graph
            )
        } else {
            write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
        }
    }
}
