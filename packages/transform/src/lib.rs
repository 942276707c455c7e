//! Structural simplifier for hybrid document trees.
//!
//! Upstream parsing wraps inline content (including lone component
//! references and pure whitespace) in paragraph containers, and wraps the
//! block-level content of component elements in paragraphs too. Renderers
//! then see paragraph wrappers the author never intended around unwrapped
//! components. This crate removes the redundant wrappers and nothing else:
//!
//! - **Pass 1** dissolves paragraphs whose children are all transparent
//!   (inline components or blank text) into their parent's child sequence.
//! - **Pass 2** lets a component element with exactly one paragraph child
//!   adopt that paragraph's children. With two or more children the
//!   paragraph boundaries separate distinct blocks and are kept.
//!
//! Mixed-content paragraphs are never touched, and sibling order is always
//! preserved. Untouched nodes keep their identity (nodes are moved, never
//! cloned or rebuilt). Both transforms are total: any tree built from the
//! [`untangle_ast::Node`] kinds goes through without error.
//!
//! ```rust
//! use untangle_ast::Node;
//! use untangle_transform::unwrap_all;
//!
//! let mut tree = Node::root(vec![Node::paragraph(vec![
//!     Node::inline_component("Badge"),
//! ])]);
//! unwrap_all(&mut tree);
//! assert_eq!(tree, Node::root(vec![Node::inline_component("Badge")]));
//! ```

pub mod classify;
pub mod unwrap;

pub use classify::children_are_transparent;
pub use unwrap::{unwrap_all, unwrap_component_only_paragraphs};
