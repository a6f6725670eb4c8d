//! Per-build node table: one node per term identity key, in first-seen order.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::graph::model::{GraphNode, NodeCategory, NodeKind};
use crate::model::prefix::Prefixes;
use crate::model::term::Term;

#[derive(Debug, Default)]
pub struct NodeTable {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from finished nodes, e.g. to rerun heuristics on a model.
    /// Later duplicates of an id are dropped.
    pub fn from_nodes(nodes: impl IntoIterator<Item = GraphNode>) -> Self {
        let mut table = Self::new();
        for node in nodes {
            table.insert(node);
        }
        table
    }

    /// Return the node id for `term`, creating the node on first sight.
    pub fn ensure(&mut self, term: &Term, prefixes: &Prefixes, selected: &HashSet<String>) -> String {
        let id = term.key();
        if self.index.contains_key(&id) {
            return id;
        }

        let kind = node_kind(term);
        let category = match kind {
            NodeKind::Literal => NodeCategory::Literal,
            NodeKind::Variable => NodeCategory::Variable,
            NodeKind::Iri | NodeKind::Blank => NodeCategory::Unknown,
        };
        trace!(id = %id, ?kind, "new node");

        self.insert(GraphNode {
            is_selected_var: selected.contains(&id),
            label: term.label(prefixes),
            id: id.clone(),
            kind,
            category,
        });
        id
    }

    fn insert(&mut self, node: GraphNode) {
        if self.index.contains_key(&node.id) {
            return;
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    pub fn get(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.index.get(id).map(|&i| &mut self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<GraphNode> {
        self.nodes
    }
}

/// Unknown terms are drawn like IRIs.
fn node_kind(term: &Term) -> NodeKind {
    match term {
        Term::Variable(_) => NodeKind::Variable,
        Term::BlankNode(_) => NodeKind::Blank,
        Term::Literal(_) => NodeKind::Literal,
        Term::NamedNode(_) | Term::Unknown => NodeKind::Iri,
    }
}
