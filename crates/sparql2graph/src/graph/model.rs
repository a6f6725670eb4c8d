//! The renderable graph model: nodes, edges and their classification tags.

use serde::Serialize;

use crate::model::prefix::Prefixes;

/// What kind of term a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Variable,
    Iri,
    Blank,
    Literal,
}

/// Role of a node, refined by the type heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeCategory {
    Class,
    Individual,
    Literal,
    Variable,
    Unknown,
}

/// Edge classification derived from the predicate and object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeCategory {
    RdfType,
    ObjectProp,
    DatatypeProp,
    AnnotationProp,
    Path,
}

/// Change marker for diff views. Query graphs are always `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeEffect {
    #[default]
    None,
    Insert,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub category: NodeCategory,
    pub is_selected_var: bool,
}

/// Position of an edge inside a UNION: which union (numbered in encounter
/// order) and which of its branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BranchRef {
    pub union: usize,
    pub branch: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub category: EdgeCategory,
    pub effect: EdgeEffect,
    /// Set when the triple sits inside an OPTIONAL block.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    /// Enclosing union branches, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<BranchRef>,
    /// Label of the innermost enclosing `GRAPH` name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphModel {
    pub query_type: String,
    pub prefixes: Prefixes,
    /// First-seen order.
    pub nodes: Vec<GraphNode>,
    /// Triple order.
    pub edges: Vec<GraphEdge>,
    pub where_triple_count: usize,
}

impl GraphModel {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
