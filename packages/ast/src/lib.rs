pub mod ast;
pub mod json;

pub use ast::{Attribute, Node, NodeKind};
pub use json::{from_json, to_json, JsonError, JsonResult};
