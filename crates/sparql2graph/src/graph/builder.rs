//! Graph model builder: turns a parsed query into nodes and edges.
//!
//! The [`GraphModelBuilder`] flattens the WHERE clause, deduplicates terms into
//! nodes, classifies one edge per triple and finally runs the `rdf:type`
//! heuristics. Each call to [`build`](GraphModelBuilder::build) works on fresh
//! state; the builder itself only holds immutable options.

use std::collections::HashSet;

use tracing::debug;

use crate::ast::model::{Predicate, Projection, QueryAst};
use crate::graph::classify::{classify_edge, AnnotationPredicates};
use crate::graph::flatten::flatten_patterns;
use crate::graph::heuristics::apply_type_heuristics;
use crate::graph::model::{EdgeCategory, EdgeEffect, GraphEdge, GraphModel};
use crate::graph::nodes::NodeTable;
use crate::model::term::Term;

/// Query type reported when the AST carries none.
pub const UNKNOWN_QUERY_TYPE: &str = "UNKNOWN";
/// Edge label for property paths.
pub const PATH_LABEL: &str = "[path]";
/// Edge label for predicates that are neither an IRI nor a path.
pub const PREDICATE_LABEL: &str = "[predicate]";

// ---------------------------------------------------------------------------
// BuildOptions
// ---------------------------------------------------------------------------

/// Options controlling how edges are classified.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub annotation_predicates: AnnotationPredicates,
}

// ---------------------------------------------------------------------------
// GraphModelBuilder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct GraphModelBuilder {
    options: BuildOptions,
}

impl GraphModelBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Build the graph model for `ast`.
    pub fn build(&self, ast: &QueryAst) -> GraphModel {
        let prefixes = ast.prefixes.clone();
        let query_type = query_type(ast);
        let selected = selected_variable_keys(ast);
        let triples = flatten_patterns(ast.where_patterns());

        let mut nodes = NodeTable::new();
        let mut edges: Vec<GraphEdge> = Vec::with_capacity(triples.len());

        for scoped in &triples {
            let triple = scoped.triple;
            let source = nodes.ensure(&triple.subject, &prefixes, &selected);
            let target = nodes.ensure(&triple.object, &prefixes, &selected);

            let category = classify_edge(
                &triple.predicate,
                &triple.object,
                &self.options.annotation_predicates,
            );
            let label = match &triple.predicate {
                Predicate::Term(term @ Term::NamedNode(_)) => term.label(&prefixes),
                _ if category == EdgeCategory::Path => PATH_LABEL.to_string(),
                _ => PREDICATE_LABEL.to_string(),
            };

            edges.push(GraphEdge {
                id: format!("e:{source}::{label}::{target}::{}", edges.len()),
                source,
                target,
                label,
                category,
                effect: EdgeEffect::None,
                optional: scoped.scope.optional,
                branches: scoped.scope.branches.clone(),
                graph: scoped.scope.graph.map(|name| name.label(&prefixes)),
            });
        }

        apply_type_heuristics(&mut nodes, &edges);

        debug!(
            query_type = %query_type,
            triples = triples.len(),
            nodes = nodes.len(),
            edges = edges.len(),
            "built graph model"
        );

        GraphModel {
            query_type,
            prefixes,
            nodes: nodes.into_nodes(),
            edges,
            where_triple_count: triples.len(),
        }
    }
}

/// Build with default options.
pub fn build_graph_model(ast: &QueryAst) -> GraphModel {
    GraphModelBuilder::default().build(ast)
}

fn query_type(ast: &QueryAst) -> String {
    [ast.query_type.as_deref(), ast.kind.as_deref()]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty())
        .unwrap_or(UNKNOWN_QUERY_TYPE)
        .to_string()
}

/// Identity keys of the variables a SELECT returns. Empty for `SELECT *` and
/// for every other query form.
pub fn selected_variable_keys(ast: &QueryAst) -> HashSet<String> {
    if ast.query_type.as_deref() != Some("SELECT") {
        return HashSet::new();
    }
    match &ast.variables {
        Some(Projection::Items(items)) => items
            .iter()
            .filter_map(|item| item.variable_name())
            .map(|name| Term::variable(name).key())
            .collect(),
        Some(Projection::Wildcard) | None => HashSet::new(),
    }
}
