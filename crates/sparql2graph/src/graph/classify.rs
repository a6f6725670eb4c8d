//! Edge classification from a triple's predicate and object.

use std::collections::HashSet;

use crate::ast::model::Predicate;
use crate::graph::model::EdgeCategory;
use crate::model::term::Term;
use crate::model::vocab::{standard, DEFAULT_ANNOTATION_PREDICATES};

/// Predicates whose literal objects are annotations rather than data values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationPredicates {
    iris: HashSet<String>,
}

impl AnnotationPredicates {
    /// A set with no annotation predicates at all.
    pub fn empty() -> Self {
        Self {
            iris: HashSet::new(),
        }
    }

    /// This set plus `extra`.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.iris.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, iri: &str) -> bool {
        self.iris.contains(iri)
    }

    pub fn len(&self) -> usize {
        self.iris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iris.is_empty()
    }
}

impl Default for AnnotationPredicates {
    fn default() -> Self {
        Self::empty().with_extra(DEFAULT_ANNOTATION_PREDICATES.iter().copied())
    }
}

/// Classify an edge: `rdf:type`, property path, literal object (annotation or
/// datatype), otherwise object property. A path is never `rdf:type`, so the
/// first two checks can run in either order.
pub fn classify_edge(
    predicate: &Predicate,
    object: &Term,
    annotations: &AnnotationPredicates,
) -> EdgeCategory {
    let predicate_iri = match predicate {
        Predicate::Term(term) => term.as_iri(),
        Predicate::Path(_) => return EdgeCategory::Path,
    };

    if predicate_iri == Some(standard::RDF_TYPE) {
        return EdgeCategory::RdfType;
    }

    if let Term::Literal(_) = object {
        return match predicate_iri {
            Some(iri) if annotations.contains(iri) => EdgeCategory::AnnotationProp,
            _ => EdgeCategory::DatatypeProp,
        };
    }

    EdgeCategory::ObjectProp
}
