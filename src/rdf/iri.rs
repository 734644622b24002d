//! IRI terms
//!
//! Two IRIs are equal iff their strings are equal under simple string
//! comparison (RFC 3987 §5.1). No normalization happens, ever: not on
//! construction and not on comparison. `http://x/%41` and `http://x/A` are
//! different IRIs.

use super::escape;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// IRI (named node)
///
/// Stored as native Unicode without percent-encoding. The constructor
/// accepts any string, including the empty string; use
/// [`validate_iri`](super::validate_iri) when syntax matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Create an IRI from a string, exactly as given
    pub fn new(value: impl AsRef<str>) -> Self {
        Iri(Arc::from(value.as_ref()))
    }

    /// The IRI exactly as constructed
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this IRI starts with the given namespace
    pub fn starts_with(&self, namespace: &str) -> bool {
        self.0.starts_with(namespace)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        escape::write_iri(f, &self.0)?;
        f.write_str(">")
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri(Arc::from(s))
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::TermHash;

    #[test]
    fn test_iri_value_roundtrip() {
        let iri = Iri::new("http://example.org/alice");
        assert_eq!(iri.as_str(), "http://example.org/alice");
        assert_eq!(iri.to_string(), "<http://example.org/alice>");
    }

    #[test]
    fn test_no_normalization() {
        assert_ne!(Iri::new("http://x/%41"), Iri::new("http://x/A"));
        assert_ne!(Iri::new("HTTP://example.org/"), Iri::new("http://example.org/"));
        assert_ne!(Iri::new("http://example.org"), Iri::new("http://example.org/"));
    }

    #[test]
    fn test_unicode_kept_native() {
        let iri = Iri::new("http://example.org/café");
        assert_eq!(iri.as_str(), "http://example.org/café");
        assert_ne!(iri, Iri::new("http://example.org/caf%C3%A9"));
    }

    #[test]
    fn test_equal_iris_hash_identically() {
        let a = Iri::new("http://example.org/alice");
        let b = Iri::from(String::from("http://example.org/alice"));
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_empty_iri_is_accepted() {
        let iri = Iri::new("");
        assert_eq!(iri.as_str(), "");
        assert_eq!(iri, Iri::from(""));
    }

    #[test]
    fn test_serde_is_plain_string() {
        let iri = Iri::new("http://example.org/alice");
        let json = serde_json::to_string(&iri).unwrap();
        assert_eq!(json, "\"http://example.org/alice\"");
    }
}
