//! Infer class / individual roles from `rdf:type` edges.

use crate::graph::model::{EdgeCategory, GraphEdge, NodeCategory, NodeKind};
use crate::graph::nodes::NodeTable;

/// For every `rdfType` edge, mark an IRI target as a class and an
/// uncategorized IRI, variable or blank source as an individual.
///
/// Categories are only ever upgraded, so running this twice is a no-op.
pub fn apply_type_heuristics(nodes: &mut NodeTable, edges: &[GraphEdge]) {
    for edge in edges.iter().filter(|e| e.category == EdgeCategory::RdfType) {
        if let Some(target) = nodes.get_mut(&edge.target) {
            if target.kind == NodeKind::Iri {
                target.category = NodeCategory::Class;
            }
        }
        if let Some(source) = nodes.get_mut(&edge.source) {
            let typable = matches!(source.kind, NodeKind::Iri | NodeKind::Variable | NodeKind::Blank);
            if typable && source.category == NodeCategory::Unknown {
                source.category = NodeCategory::Individual;
            }
        }
    }
}
