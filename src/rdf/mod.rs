//! RDF-1.1 terms and their identity
//!
//! This module implements the RDF term model:
//! - IRIs compared by simple string comparison
//! - Blank nodes whose identity includes the scope that minted them
//! - Literals with case-insensitive language tag comparison
//! - The closed `RdfTerm` union, plus triples and quads built from it
//!
//! Equality and hashing are derived together on every type, so equal values
//! always hash alike.
//!
//! # Example
//!
//! ```rust
//! use rdf_terms::rdf::{Iri, Literal, RdfTerm, Scope, TermHash};
//!
//! let graph_a = Scope::new();
//! let graph_b = Scope::new();
//!
//! // Same label, different scopes: different resources
//! assert_ne!(graph_a.blank_node("x"), graph_b.blank_node("x"));
//!
//! // Language tags compare case-insensitively
//! let en = Literal::new("hello", Iri::rdf_lang_string(), Some("en")).unwrap();
//! let upper = Literal::new("hello", Iri::rdf_lang_string(), Some("EN")).unwrap();
//! assert_eq!(en, upper);
//! assert_eq!(en.hash_code(), upper.hash_code());
//!
//! // A tag with a non-langString datatype is rejected
//! assert!(Literal::new("5", Iri::xsd_integer(), Some("en")).is_err());
//!
//! // Variants never compare equal to each other
//! let iri: RdfTerm = Iri::new("x").into();
//! let blank: RdfTerm = graph_a.blank_node("x").into();
//! assert_ne!(iri, blank);
//! ```

mod blank_node;
mod error;
mod escape;
mod factory;
mod hashing;
mod interop;
mod iri;
mod literal;
mod namespace;
mod scope;
mod term;
mod triple;
mod validation;
pub mod vocab;

pub use error::{RdfError, RdfResult};

pub use iri::Iri;

pub use blank_node::BlankNode;

pub use scope::{Scope, ScopeConfig, ScopeId};

pub use literal::{LanguageTag, Literal};

pub use term::{BlankNodeOrIri, RdfTerm, TermKind};

pub use triple::{Quad, Triple};

pub use hashing::{TermHash, TermMap, TermSet};

pub use factory::{FactoryConfig, TermFactory};

pub use namespace::{
    NamespaceManager, Namespace,
    PrefixError, PrefixResult,
};

pub use validation::validate_iri;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdf_module_exports() {
        // Verify all main types are exported
        let _factory: TermFactory = TermFactory::new();
        let _ns_mgr = NamespaceManager::new();
        let _set: TermSet = TermSet::default();
        let _map: TermMap<usize> = TermMap::default();
    }

    #[test]
    fn test_term_set_uses_rdf_equality() {
        let scope = Scope::new();
        let mut set = TermSet::default();
        set.insert(Literal::new_language_tagged_literal("chat", "fr").into());
        set.insert(Literal::new_language_tagged_literal("chat", "FR").into());
        set.insert(scope.blank_node("x").into());
        set.insert(scope.blank_node("x").into());
        set.insert(Scope::new().blank_node("x").into());
        assert_eq!(set.len(), 3);
    }
}
