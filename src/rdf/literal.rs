//! Literals
//!
//! A literal is a lexical form, a datatype IRI and, for `rdf:langString`
//! only, a language tag. Two literals are equal when all three match; the
//! language tag is compared ASCII case-insensitively as BCP 47 prescribes,
//! so `"chat"@FR` and `"chat"@fr` are the same literal.

use super::error::{RdfError, RdfResult};
use super::escape;
use super::iri::Iri;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// BCP 47 language tag
///
/// Keeps the spelling it was created with, but compares, hashes and orders
/// as its ASCII-lowercased form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(Arc<str>);

impl LanguageTag {
    pub fn new(tag: impl AsRef<str>) -> Self {
        LanguageTag(Arc::from(tag.as_ref()))
    }

    /// The tag as originally spelled
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for comparison
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for LanguageTag {}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.folded() {
            state.write_u8(b);
        }
        // Terminator, as `str` does, so ("ab", "c") and ("a", "bc") differ
        state.write_u8(0xff);
    }
}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawLiteral")]
pub struct Literal {
    lexical_form: Arc<str>,
    datatype: Iri,
    language: Option<LanguageTag>,
}

impl Literal {
    /// Create a literal from its three components
    ///
    /// A language tag requires `rdf:langString` as datatype, and
    /// `rdf:langString` requires a language tag. Any other pairing fails with
    /// [`RdfError::InvalidLiteralConfiguration`].
    pub fn new(
        lexical_form: impl AsRef<str>,
        datatype: Iri,
        language: Option<&str>,
    ) -> RdfResult<Self> {
        match (language, datatype.is_lang_string()) {
            (Some(tag), false) => {
                debug!("Rejected literal tagged @{} with datatype {}", tag, datatype);
                Err(RdfError::InvalidLiteralConfiguration(format!(
                    "language tag @{} requires datatype {}, got {}",
                    tag,
                    Iri::rdf_lang_string(),
                    datatype
                )))
            }
            (None, true) => {
                debug!("Rejected untagged literal with datatype {}", datatype);
                Err(RdfError::InvalidLiteralConfiguration(format!(
                    "datatype {} requires a language tag",
                    datatype
                )))
            }
            (language, _) => Ok(Self {
                lexical_form: Arc::from(lexical_form.as_ref()),
                datatype,
                language: language.map(LanguageTag::new),
            }),
        }
    }

    /// Simple literal, typed `xsd:string`
    pub fn new_simple_literal(lexical_form: impl AsRef<str>) -> Self {
        Self {
            lexical_form: Arc::from(lexical_form.as_ref()),
            datatype: Iri::xsd_string(),
            language: None,
        }
    }

    /// Literal with an explicit datatype and no language tag
    pub fn new_typed_literal(lexical_form: impl AsRef<str>, datatype: Iri) -> RdfResult<Self> {
        Self::new(lexical_form, datatype, None)
    }

    /// Language-tagged literal; the datatype is fixed to `rdf:langString`
    pub fn new_language_tagged_literal(
        lexical_form: impl AsRef<str>,
        language: impl AsRef<str>,
    ) -> Self {
        Self {
            lexical_form: Arc::from(lexical_form.as_ref()),
            datatype: Iri::rdf_lang_string(),
            language: Some(LanguageTag::new(language)),
        }
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// Language tag as originally spelled
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    /// Language tag string, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_ref().map(LanguageTag::as_str)
    }
}

/// Unchecked wire form; decoding goes through [`Literal::new`]
#[derive(Deserialize)]
struct RawLiteral {
    lexical_form: String,
    datatype: Iri,
    language: Option<String>,
}

impl TryFrom<RawLiteral> for Literal {
    type Error = RdfError;

    fn try_from(raw: RawLiteral) -> RdfResult<Self> {
        Literal::new(raw.lexical_form, raw.datatype, raw.language.as_deref())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        escape::write_quoted(f, &self.lexical_form)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if self.datatype.is_xsd_string() {
            Ok(())
        } else {
            write!(f, "^^{}", self.datatype)
        }
    }
}
