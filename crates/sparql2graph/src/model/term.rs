//! RDF/JS terms: stable identity keys and display labels.
//!
//! Terms arrive in the RDF/JS shape the query parser produces:
//! `{ "termType": "NamedNode", "value": "http://..." }`. Anything that is not
//! one of the four pattern term types collapses to [`Term::Unknown`] so the
//! graph build stays total over odd input.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::prefix::Prefixes;

/// Identity key shared by every term outside the known variants.
pub const UNKNOWN_KEY: &str = "term:unknown";
/// Display label for terms outside the known variants.
pub const UNKNOWN_LABEL: &str = "<?>";

/// A term appearing in a triple pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Term {
    /// `?name`
    Variable(String),
    /// A full IRI.
    NamedNode(String),
    /// `_:name`, scoped to the query.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
    /// Missing, `null`, not an object, or an unrecognized `termType`.
    #[default]
    Unknown,
}

/// Literal value with its optional language tag and datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: String,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl Literal {
    /// A literal with neither language nor datatype.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged literal.
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// A literal with a datatype IRI.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn iri(iri: impl Into<String>) -> Self {
        Term::NamedNode(iri.into())
    }

    pub fn blank(name: impl Into<String>) -> Self {
        Term::BlankNode(name.into())
    }

    pub fn literal(literal: Literal) -> Self {
        Term::Literal(literal)
    }

    /// The IRI of a named node.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::NamedNode(iri) => Some(iri),
            _ => None,
        }
    }

    /// Stable identity key. Equal terms always produce equal keys.
    pub fn key(&self) -> String {
        match self {
            Term::Variable(name) => format!("var:?{name}"),
            Term::BlankNode(name) => format!("bnode:{name}"),
            Term::NamedNode(iri) => format!("iri:{iri}"),
            Term::Literal(lit) => format!(
                "lit:{}|{}|{}",
                lit.value,
                lit.language.as_deref().unwrap_or(""),
                lit.datatype.as_deref().unwrap_or("")
            ),
            Term::Unknown => UNKNOWN_KEY.to_string(),
        }
    }

    /// Human-readable label, compacting IRIs with the given prefixes.
    pub fn label(&self, prefixes: &Prefixes) -> String {
        match self {
            Term::Variable(name) => format!("?{name}"),
            Term::BlankNode(name) => format!("_:{name}"),
            Term::NamedNode(iri) => prefixes.compact(iri),
            Term::Literal(lit) => match (&lit.language, &lit.datatype) {
                (Some(lang), _) => format!("\"{}\"@{lang}", lit.value),
                (None, Some(dt)) => format!("\"{}\"^^{}", lit.value, prefixes.compact(dt)),
                (None, None) => format!("\"{}\"", lit.value),
            },
            Term::Unknown => UNKNOWN_LABEL.to_string(),
        }
    }
}

/// Text of a scalar JSON value. Numbers and booleans are written out, anything
/// else has no text.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Read an RDF/JS term object. Anything that is not an object with one of the
/// four pattern term types becomes [`Term::Unknown`].
impl From<&Value> for Term {
    fn from(raw: &Value) -> Self {
        let Some(term_type) = raw.get("termType").and_then(Value::as_str) else {
            return Term::Unknown;
        };
        let value = raw.get("value").and_then(scalar_text).unwrap_or_default();
        match term_type {
            "Variable" => Term::Variable(value),
            "NamedNode" => Term::NamedNode(value),
            "BlankNode" => Term::BlankNode(value),
            "Literal" => Term::Literal(Literal {
                value,
                language: non_empty(raw.get("language").and_then(scalar_text)),
                datatype: non_empty(
                    raw.get("datatype")
                        .and_then(|dt| dt.get("value"))
                        .and_then(scalar_text),
                ),
            }),
            _ => Term::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Term::from(&raw))
    }
}
