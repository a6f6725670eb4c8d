//! RDF vocabulary constants used when classifying query triples.
//!
//! - `rdf:` / `rdfs:` / `xsd:` -- W3C core vocabularies
//! - `dc:` / `dcterms:` -- Dublin Core elements and terms
//! - `skos:` -- Simple Knowledge Organization System

/// Standard RDF/RDFS/XSD namespace URIs and terms
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// Dublin Core (`dc:` elements 1.1 and `dcterms:`)
pub mod dc {
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    pub const TERMS_TITLE: &str = "http://purl.org/dc/terms/title";
}

/// SKOS (`skos:` prefix)
pub mod skos {
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
}

/// Predicates that conventionally point at human-readable literals.
pub const DEFAULT_ANNOTATION_PREDICATES: &[&str] = &[
    standard::RDFS_LABEL,
    standard::RDFS_COMMENT,
    dc::TERMS_TITLE,
    dc::TITLE,
    skos::PREF_LABEL,
    skos::ALT_LABEL,
    skos::DEFINITION,
];
