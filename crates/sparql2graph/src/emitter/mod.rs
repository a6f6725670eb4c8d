pub mod cytoscape;
pub mod json;

use crate::graph::model::GraphModel;

/// Trait for writing a graph model in different output formats.
pub trait GraphEmitter {
    /// Write one graph model.
    fn emit(&mut self, model: &GraphModel) -> std::io::Result<()>;
    /// Flush any buffered output.
    fn flush(&mut self) -> std::io::Result<()>;
}
