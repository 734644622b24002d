//! RDF-1.1 Term Identity
//!
//! The value layer that RDF graphs, stores and parsers are built on: IRIs,
//! blank nodes and literals, with equality and hashing that follow the
//! RDF-1.1 Concepts and Abstract Syntax recommendation.
//!
//! # Identity rules
//!
//! - IRIs are equal under simple string comparison. No normalization.
//! - Blank nodes are equal only when both the scope and the identifier match.
//!   A scope is the graph, dataset or parser session that minted the node.
//! - Literals are equal when lexical form and datatype match exactly and the
//!   language tags match case-insensitively (absent matches only absent).
//! - Terms of different kinds are never equal.
//!
//! ## Example Usage
//!
//! ```rust
//! use rdf_terms::{Iri, Literal, TermFactory, Triple};
//!
//! let factory = TermFactory::new();
//!
//! let alice = factory.create_blank_node();
//! let name = Iri::new("http://xmlns.com/foaf/0.1/name");
//! let triple = Triple::new(alice, name, Literal::new_language_tagged_literal("Alice", "en"));
//!
//! assert!(triple.subject.is_blank_node());
//! assert_eq!(triple.to_string(), "_:b0 <http://xmlns.com/foaf/0.1/name> \"Alice\"@en .");
//! ```

#![warn(clippy::all)]

pub mod rdf;

// Re-export main types for convenience
pub use rdf::{
    Iri, BlankNode, Literal, LanguageTag,
    RdfTerm, BlankNodeOrIri, TermKind,
    Scope, ScopeId, ScopeConfig,
    Triple, Quad,
    TermFactory, FactoryConfig,
    TermHash, TermSet, TermMap,
    RdfError, RdfResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
