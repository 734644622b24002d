//! Well-known vocabulary IRIs

use super::iri::Iri;

/// RDF vocabulary
pub mod rdf {
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const JSON: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON";
    pub const HTML: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#HTML";
}

/// RDF Schema vocabulary
pub mod rdfs {
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XML Schema datatypes
pub mod xsd {
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

impl Iri {
    /// `rdf:langString`, datatype of every language-tagged literal
    pub fn rdf_lang_string() -> Self {
        Iri::new(rdf::LANG_STRING)
    }

    /// `xsd:string`, datatype of simple literals
    pub fn xsd_string() -> Self {
        Iri::new(xsd::STRING)
    }

    pub fn xsd_integer() -> Self {
        Iri::new(xsd::INTEGER)
    }

    pub fn xsd_boolean() -> Self {
        Iri::new(xsd::BOOLEAN)
    }

    pub fn xsd_double() -> Self {
        Iri::new(xsd::DOUBLE)
    }

    pub fn is_lang_string(&self) -> bool {
        self.as_str() == rdf::LANG_STRING
    }

    pub fn is_xsd_string(&self) -> bool {
        self.as_str() == xsd::STRING
    }
}
