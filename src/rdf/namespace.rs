//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation. Expansion
//! is plain concatenation; the resulting IRI is compared like any other.

use super::iri::Iri;
use super::vocab::{rdf, rdfs, xsd};
use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Not of the form `prefix:local`
    #[error("Invalid compact IRI: {0}")]
    InvalidCompactIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager with common prefixes
///
/// Prefixes keep registration order, so `prefixes()` and tie-breaking in
/// `compact` are deterministic.
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with common prefixes
    pub fn new() -> Self {
        let mut mgr = Self::empty();

        mgr.add_prefix("rdf", rdf::NAMESPACE);
        mgr.add_prefix("rdfs", rdfs::NAMESPACE);
        mgr.add_prefix("xsd", xsd::NAMESPACE);
        mgr.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        mgr.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        mgr.add_prefix("dc", "http://purl.org/dc/elements/1.1/");
        mgr.add_prefix("dcterms", "http://purl.org/dc/terms/");

        mgr
    }

    /// Manager with no prefixes at all
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Add a prefix, replacing any previous binding
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<Iri> {
        let (prefix, local) = compact_iri
            .split_once(':')
            .ok_or_else(|| PrefixError::InvalidCompactIri(compact_iri.to_string()))?;
        let iri = self.get_iri(prefix)?;
        Ok(Iri::new(format!("{}{}", iri, local)))
    }

    /// Compact an IRI using the longest matching namespace
    pub fn compact(&self, iri: &Iri) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns))
            .fold(None, |best: Option<(&String, &String)>, (prefix, ns)| match best {
                Some((_, best_ns)) if best_ns.len() >= ns.len() => best,
                _ => Some((prefix, ns)),
            })
            .map(|(prefix, ns)| format!("{}:{}", prefix, &iri.as_str()[ns.len()..]))
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}
