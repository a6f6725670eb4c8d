//! Turn parsed SPARQL query ASTs into renderable graph models.
//!
//! The pipeline is one-way: [`ast`] loads the parser's JSON, [`graph`]
//! flattens the WHERE clause into nodes and classified edges, and [`emitter`]
//! writes the result for a renderer.

pub mod ast;
pub mod emitter;
pub mod graph;
pub mod model;

pub use ast::model::QueryAst;
pub use graph::builder::{build_graph_model, BuildOptions, GraphModelBuilder};
pub use graph::model::GraphModel;
