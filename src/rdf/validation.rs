//! Opt-in IRI syntax checks
//!
//! Term construction never validates. Callers that care about RFC 3987
//! syntax (parsers, the term factory when configured to) ask here.

use super::error::{RdfError, RdfResult};
use tracing::debug;

/// Check that `iri` is an absolute IRI per RFC 3987
pub fn validate_iri(iri: &str) -> RdfResult<()> {
    match oxiri::Iri::parse(iri) {
        Ok(_) => Ok(()),
        Err(e) => {
            debug!("IRI {:?} failed validation: {}", iri, e);
            Err(RdfError::InvalidIri(format!("{}: {}", iri, e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_iris() {
        assert!(validate_iri("http://example.org/alice").is_ok());
        assert!(validate_iri("urn:isbn:0451450523").is_ok());
        assert!(validate_iri("http://example.org/café").is_ok());
    }

    #[test]
    fn test_invalid_iris() {
        assert!(matches!(validate_iri(""), Err(RdfError::InvalidIri(_))));
        assert!(matches!(validate_iri("not an iri"), Err(RdfError::InvalidIri(_))));
        assert!(matches!(validate_iri("relative/path"), Err(RdfError::InvalidIri(_))));
    }
}
