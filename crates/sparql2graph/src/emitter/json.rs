use std::io::Write;

use super::GraphEmitter;
use crate::graph::model::GraphModel;

/// Writes the graph model as a single JSON document.
pub struct JsonEmitter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Pretty-printed output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Single-line output.
    pub fn compact(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }
}

impl<W: Write> GraphEmitter for JsonEmitter<W> {
    fn emit(&mut self, model: &GraphModel) -> std::io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, model)?;
        } else {
            serde_json::to_writer(&mut self.writer, model)?;
        }
        writeln!(self.writer)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
