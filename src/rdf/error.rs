//! RDF term errors

use super::term::TermKind;
use thiserror::Error;

/// RDF errors
#[derive(Error, Debug)]
pub enum RdfError {
    /// Language tag and datatype disagree
    #[error("Invalid literal configuration: {0}")]
    InvalidLiteralConfiguration(String),

    /// IRI rejected by the opt-in syntax check
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Term kind not allowed in a triple position
    #[error("{kind} cannot be used as {position}")]
    InvalidTermPosition {
        kind: TermKind,
        position: &'static str,
    },

    /// Foreign term with no counterpart here (e.g. RDF-star quoted triples)
    #[error("Unsupported term: {0}")]
    UnsupportedTerm(String),

    /// Configuration could not be decoded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type RdfResult<T> = Result<T, RdfError>;
