//! JSON interchange for document trees.
//!
//! Trees travel between tools in the internally tagged shape
//! `{"type": "paragraph", "children": [...]}`; the serde derives on
//! [`Node`] produce exactly that, so these helpers only add the error
//! wrapper.

use crate::ast::Node;
use thiserror::Error;

pub type JsonResult<T> = Result<T, JsonError>;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("malformed tree JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Deserialize a tree from its tagged JSON form.
pub fn from_json(src: &str) -> JsonResult<Node> {
    Ok(serde_json::from_str(src)?)
}

/// Serialize a tree to its tagged JSON form.
pub fn to_json(node: &Node) -> JsonResult<String> {
    Ok(serde_json::to_string(node)?)
}
