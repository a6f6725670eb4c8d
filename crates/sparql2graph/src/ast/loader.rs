//! Load a parsed query AST from JSON.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::QueryAst;

/// Errors that can occur during loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse an AST from a JSON string.
pub fn from_str(content: &str) -> Result<QueryAst, LoadError> {
    let ast: QueryAst = serde_json::from_str(content)?;
    Ok(ast)
}

/// Read and parse an AST from any reader.
pub fn load_reader<R: Read>(mut reader: R) -> Result<QueryAst, LoadError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    from_str(&content)
}

/// Load an AST JSON file from disk. `-` reads standard input.
pub fn load_json(path: &Path) -> Result<QueryAst, LoadError> {
    if path.as_os_str() == "-" {
        return load_reader(std::io::stdin().lock());
    }
    let content = std::fs::read_to_string(path)?;
    from_str(&content)
}
