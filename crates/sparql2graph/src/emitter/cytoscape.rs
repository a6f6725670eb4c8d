use std::io::Write;

use serde::Serialize;

use super::GraphEmitter;
use crate::graph::model::{GraphEdge, GraphModel, GraphNode};

/// Writes Cytoscape.js `elements`: every node as `{ "data": node }`, then
/// every edge as `{ "data": edge }`.
pub struct CytoscapeEmitter<W: Write> {
    writer: W,
    pretty: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Element<'a> {
    Node { data: &'a GraphNode },
    Edge { data: &'a GraphEdge },
}

impl<W: Write> CytoscapeEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn compact(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }
}

impl<W: Write> GraphEmitter for CytoscapeEmitter<W> {
    fn emit(&mut self, model: &GraphModel) -> std::io::Result<()> {
        let elements: Vec<Element<'_>> = model
            .nodes
            .iter()
            .map(|data| Element::Node { data })
            .chain(model.edges.iter().map(|data| Element::Edge { data }))
            .collect();
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &elements)?;
        } else {
            serde_json::to_writer(&mut self.writer, &elements)?;
        }
        writeln!(self.writer)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
