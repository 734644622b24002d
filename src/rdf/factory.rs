//! Term factory
//!
//! Bundles a [`Scope`] with construction settings, for collaborators (parsers,
//! graph builders) that create many terms in one blank node scope.

use super::blank_node::BlankNode;
use super::error::RdfResult;
use super::iri::Iri;
use super::literal::Literal;
use super::scope::{Scope, ScopeConfig, ScopeId};
use super::term::{BlankNodeOrIri, RdfTerm};
use super::triple::Triple;
use super::validation::validate_iri;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Factory settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Labelling of fresh blank nodes
    pub scope: ScopeConfig,
    /// Reject IRIs that are not absolute RFC 3987 IRIs
    pub validate_iris: bool,
}

impl FactoryConfig {
    /// Load settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> RdfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Creates terms, with all blank nodes in the factory's own scope
#[derive(Debug)]
pub struct TermFactory {
    scope: Scope,
    validate_iris: bool,
}

impl TermFactory {
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    pub fn with_config(config: FactoryConfig) -> Self {
        let scope = Scope::with_config(config.scope);
        debug!(
            "Term factory ready in {} (IRI validation: {})",
            scope.id(),
            config.validate_iris
        );
        Self {
            scope,
            validate_iris: config.validate_iris,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_id(&self) -> ScopeId {
        self.scope.id()
    }

    /// Create an IRI, checking syntax only when configured to
    pub fn create_iri(&self, value: impl AsRef<str>) -> RdfResult<Iri> {
        let value = value.as_ref();
        if self.validate_iris {
            validate_iri(value)?;
        }
        Ok(Iri::new(value))
    }

    /// Fresh blank node, distinct from every other node of this factory
    pub fn create_blank_node(&self) -> BlankNode {
        self.scope.fresh_blank_node()
    }

    /// Blank node for a label; equal labels give equal nodes
    ///
    /// Named nodes never equal nodes from [`TermFactory::create_blank_node`].
    pub fn create_blank_node_named(&self, name: impl AsRef<str>) -> BlankNode {
        self.scope.blank_node(name)
    }

    pub fn create_literal(&self, lexical_form: impl AsRef<str>) -> Literal {
        Literal::new_simple_literal(lexical_form)
    }

    pub fn create_typed_literal(
        &self,
        lexical_form: impl AsRef<str>,
        datatype: Iri,
    ) -> RdfResult<Literal> {
        Literal::new_typed_literal(lexical_form, datatype)
    }

    pub fn create_language_literal(
        &self,
        lexical_form: impl AsRef<str>,
        language: impl AsRef<str>,
    ) -> Literal {
        Literal::new_language_tagged_literal(lexical_form, language)
    }

    pub fn create_triple(
        &self,
        subject: impl Into<BlankNodeOrIri>,
        predicate: Iri,
        object: impl Into<RdfTerm>,
    ) -> Triple {
        Triple::new(subject, predicate, object)
    }
}

impl Default for TermFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::RdfError;

    #[test]
    fn test_iris_unvalidated_by_default() {
        let factory = TermFactory::new();
        assert_eq!(factory.create_iri("not an iri").unwrap().as_str(), "not an iri");
    }

    #[test]
    fn test_iri_validation_when_enabled() {
        let factory = TermFactory::with_config(FactoryConfig {
            validate_iris: true,
            ..Default::default()
        });
        assert!(factory.create_iri("http://example.org/a").is_ok());
        assert!(matches!(factory.create_iri("not an iri"), Err(RdfError::InvalidIri(_))));
    }

    #[test]
    fn test_blank_nodes_share_factory_scope() {
        let factory = TermFactory::new();
        let a = factory.create_blank_node();
        let b = factory.create_blank_node();
        assert_ne!(a, b);
        assert_eq!(a.scope(), factory.scope_id());
        assert_eq!(factory.create_blank_node_named("x"), factory.create_blank_node_named("x"));
    }

    #[test]
    fn test_named_node_distinct_from_fresh_node() {
        let factory = TermFactory::new();
        let named = factory.create_blank_node_named("b0");
        let fresh = factory.create_blank_node();
        assert_eq!(fresh.identifier(), "b0");
        assert_ne!(named, fresh);
    }

    #[test]
    fn test_factories_do_not_share_blank_nodes() {
        let f1 = TermFactory::new();
        let f2 = TermFactory::new();
        assert_ne!(f1.create_blank_node_named("x"), f2.create_blank_node_named("x"));
        // Both start their counters at the same label
        assert_ne!(f1.create_blank_node(), f2.create_blank_node());
    }

    #[test]
    fn test_config_from_json() {
        let config = FactoryConfig::from_json(
            r#"{"validate_iris": true, "scope": {"label_prefix": "g", "first_label": 10}}"#,
        )
        .unwrap();
        assert!(config.validate_iris);
        let factory = TermFactory::with_config(config);
        assert_eq!(factory.create_blank_node().identifier(), "g10");

        assert_eq!(FactoryConfig::from_json("{}").unwrap(), FactoryConfig::default());
        assert!(matches!(FactoryConfig::from_json("[1"), Err(RdfError::InvalidConfig(_))));
    }

    #[test]
    fn test_literals_and_triples() {
        let factory = TermFactory::new();
        let lit = factory.create_language_literal("hallo", "DE");
        assert_eq!(lit, factory.create_language_literal("hallo", "de"));
        assert!(factory.create_typed_literal("x", Iri::rdf_lang_string()).is_err());

        let triple = factory.create_triple(
            factory.create_blank_node(),
            Iri::new("http://www.w3.org/2000/01/rdf-schema#label"),
            factory.create_literal("thing"),
        );
        assert!(triple.subject.is_blank_node());
    }
}
