//! Serde model for the SPARQL.js query AST.
//!
//! These types match the JSON the SPARQL.js parser emits for a query. We only
//! model the parts the graph build reads: query type, prefixes, projection and
//! the WHERE pattern tree.
//!
//! Design notes:
//! - Loading is total over any JSON document. A missing, `null` or wrongly
//!   typed section degrades to empty instead of failing the load.
//! - Projection, triples and pattern groups are read from a
//!   [`serde_json::Value`] and folded into closed enums. Kinds we do not draw
//!   (filter, bind, values, minus, service, sub-queries) and entries that are
//!   not objects end up in [`Pattern::Other`].
//! - A predicate object without a `termType` is a property path expression.
//! - Unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::prefix::Prefixes;
use crate::model::term::{scalar_text, Term};

/// Top-level parsed query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAst {
    /// `SELECT`, `CONSTRUCT`, `ASK`, `DESCRIBE`.
    #[serde(default, deserialize_with = "text")]
    pub query_type: Option<String>,
    /// Parser-level kind (`query` / `update`).
    #[serde(default, rename = "type", deserialize_with = "text")]
    pub kind: Option<String>,
    #[serde(default)]
    pub prefixes: Prefixes,
    #[serde(default)]
    pub variables: Option<Projection>,
    #[serde(default, rename = "where", deserialize_with = "pattern_list")]
    pub where_clause: Option<Vec<Pattern>>,
}

impl QueryAst {
    /// The WHERE patterns, empty when the clause is absent.
    pub fn where_patterns(&self) -> &[Pattern] {
        self.where_clause.as_deref().unwrap_or(&[])
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_str().map(str::to_string))
}

/// A WHERE clause that is not an array has no patterns.
fn pattern_list<'de, D>(deserializer: D) -> Result<Option<Vec<Pattern>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw
        .as_array()
        .map(|entries| entries.iter().map(Pattern::from).collect()))
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// The SELECT projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `SELECT *`
    Wildcard,
    /// An explicit variable list.
    Items(Vec<SelectItem>),
}

/// One entry of an explicit projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// `?x`
    Variable(String),
    /// `(expr AS ?x)`, keeps the bound variable name.
    Alias(String),
    /// Anything else the parser put in the list.
    Other,
}

impl SelectItem {
    /// The variable this item makes visible in the result, if any.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            SelectItem::Variable(name) | SelectItem::Alias(name) => Some(name),
            SelectItem::Other => None,
        }
    }
}

/// `(expr AS ?x)` entries carry the bound variable next to the expression.
impl From<&Value> for SelectItem {
    fn from(raw: &Value) -> Self {
        match (raw.get("termType").and_then(Value::as_str), raw.get("variable")) {
            (Some("Variable"), _) => {
                SelectItem::Variable(raw.get("value").and_then(scalar_text).unwrap_or_default())
            }
            (None, Some(variable)) => match Term::from(variable) {
                Term::Variable(name) => SelectItem::Alias(name),
                _ => SelectItem::Other,
            },
            _ => SelectItem::Other,
        }
    }
}

/// Older parser versions write `SELECT *` as `["*"]`, newer ones as
/// `[{ "termType": "Wildcard", "value": "*" }]`.
fn is_wildcard(entry: &Value) -> bool {
    entry.as_str() == Some("*") || entry.get("termType").and_then(Value::as_str) == Some("Wildcard")
}

/// `"*"` is a wildcard. An array lists the projected items. Any other shape
/// projects nothing.
impl From<&Value> for Projection {
    fn from(raw: &Value) -> Self {
        match raw {
            Value::String(s) if s == "*" => Projection::Wildcard,
            Value::Array(entries) if entries.iter().any(is_wildcard) => Projection::Wildcard,
            Value::Array(entries) => Projection::Items(entries.iter().map(SelectItem::from).collect()),
            _ => Projection::Items(Vec::new()),
        }
    }
}

impl<'de> Deserialize<'de> for Projection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Projection::from(&raw))
    }
}

// ---------------------------------------------------------------------------
// Triple patterns
// ---------------------------------------------------------------------------

/// A single `subject predicate object` pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Term,
    pub predicate: Predicate,
    pub object: Term,
}

impl TriplePattern {
    /// Build a triple from its three positions.
    pub fn new(subject: Term, predicate: impl Into<Predicate>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// The predicate position: a plain term or a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Term(Term),
    Path(PropertyPath),
}

impl Default for Predicate {
    fn default() -> Self {
        Predicate::Term(Term::Unknown)
    }
}

impl From<Term> for Predicate {
    fn from(term: Term) -> Self {
        Predicate::Term(term)
    }
}

impl From<PropertyPath> for Predicate {
    fn from(path: PropertyPath) -> Self {
        Predicate::Path(path)
    }
}

/// A property path expression such as `foaf:knows/foaf:name` or `^ex:p`.
///
/// Only the operator and its operands are kept; path semantics are not
/// evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyPath {
    /// Operator symbol: `/`, `|`, `^`, `*`, `+`, `?`, `!`.
    pub path_type: String,
    pub items: Vec<Predicate>,
}

/// A triple that is not an object has three unknown positions.
impl From<&Value> for TriplePattern {
    fn from(raw: &Value) -> Self {
        let position = |key: &str| raw.get(key).unwrap_or(&Value::Null);
        Self {
            subject: Term::from(position("subject")),
            predicate: Predicate::from(position("predicate")),
            object: Term::from(position("object")),
        }
    }
}

impl<'de> Deserialize<'de> for TriplePattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(TriplePattern::from(&raw))
    }
}

/// An object with a `termType` is a plain term, an object without one is a
/// path. Anything else is an unknown term.
impl From<&Value> for Predicate {
    fn from(raw: &Value) -> Self {
        let Some(fields) = raw.as_object() else {
            return Predicate::default();
        };
        match fields.get("termType") {
            Some(term_type) if !term_type.is_null() => Predicate::Term(Term::from(raw)),
            _ => Predicate::Path(PropertyPath {
                path_type: fields.get("pathType").and_then(scalar_text).unwrap_or_default(),
                items: fields
                    .get("items")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(Predicate::from).collect())
                    .unwrap_or_default(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Predicate::from(&raw))
    }
}

// ---------------------------------------------------------------------------
// Pattern groups
// ---------------------------------------------------------------------------

/// A node of the WHERE pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Basic graph pattern (`bgp`).
    Basic(Vec<TriplePattern>),
    /// `OPTIONAL { ... }`
    Optional(Vec<Pattern>),
    /// `{ ... } UNION { ... }`, one pattern list per branch.
    Union(Vec<Vec<Pattern>>),
    /// Nested `{ ... }` group.
    Group(Vec<Pattern>),
    /// `GRAPH <name> { ... }`
    NamedGraph { name: Term, patterns: Vec<Pattern> },
    /// Any other pattern kind, or a malformed one. Carries the kind tag.
    Other(String),
}

/// Pattern entries of a nested group. Entries that are not pattern objects,
/// including nested arrays, become [`Pattern::Other`].
fn nested(entries: &[Value]) -> Vec<Pattern> {
    entries.iter().map(Pattern::from).collect()
}

/// A union branch arrives either as one pattern object or as a pattern array.
fn branch(raw: &Value) -> Vec<Pattern> {
    match raw {
        Value::Array(entries) => nested(entries),
        single => vec![Pattern::from(single)],
    }
}

impl From<&Value> for Pattern {
    fn from(raw: &Value) -> Self {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let triples = raw.get("triples").and_then(Value::as_array);
        let patterns = raw.get("patterns").and_then(Value::as_array);
        match (kind.as_str(), triples, patterns) {
            ("bgp", Some(triples), _) => {
                Pattern::Basic(triples.iter().map(TriplePattern::from).collect())
            }
            ("union", _, Some(branches)) => Pattern::Union(branches.iter().map(branch).collect()),
            ("optional", _, Some(entries)) => Pattern::Optional(nested(entries)),
            ("group", _, Some(entries)) => Pattern::Group(nested(entries)),
            ("graph", _, Some(entries)) => Pattern::NamedGraph {
                name: raw.get("name").map(Term::from).unwrap_or_default(),
                patterns: nested(entries),
            },
            _ => Pattern::Other(kind),
        }
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Pattern::from(&raw))
    }
}
