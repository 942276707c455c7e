//! The two wrapper-removal passes.

use tracing::{debug, instrument};
use untangle_ast::{Node, NodeKind};
use untangle_visit::{rewrite, Edit};

use crate::classify::children_are_transparent;

/// Remove paragraph wrappers around component-only content (pass 1 only).
///
/// Mutates the tree in place. Paragraphs with any non-transparent child are
/// left untouched, same node, same position.
#[instrument(skip_all)]
pub fn unwrap_component_only_paragraphs(root: &mut Node) {
    unwrap_paragraphs(root);
}

/// Remove paragraph wrappers around component-only content, then hoist the
/// single paragraph child of component elements.
///
/// Two complete traversals: pass 2 starts only after pass 1 has swept the
/// whole tree. Mutates the tree in place.
#[instrument(skip_all)]
pub fn unwrap_all(root: &mut Node) {
    unwrap_paragraphs(root);
    hoist_component_paragraphs(root);
}

/// Pass 1: a paragraph whose children are all transparent dissolves into
/// them at its own position; an empty paragraph disappears outright.
fn unwrap_paragraphs(root: &mut Node) {
    rewrite(root, &[NodeKind::Paragraph], &mut |node| match node {
        Node::Paragraph { children } if children_are_transparent(&children) => {
            debug!(replacements = children.len(), "dissolving paragraph wrapper");
            Edit::Splice(children)
        }
        node => Edit::Keep(node),
    });
}

/// Pass 2: a component element whose only child is a paragraph adopts that
/// paragraph's children. With two or more children the paragraph boundaries
/// are the only separator between distinct blocks, so they stay; a single
/// non-paragraph child stays as well.
fn hoist_component_paragraphs(root: &mut Node) {
    rewrite(
        root,
        &[NodeKind::InlineComponent, NodeKind::BlockComponent],
        &mut |mut node| {
            if let Node::InlineComponent { children, .. }
            | Node::BlockComponent { children, .. } = &mut node
            {
                match children.pop() {
                    Some(Node::Paragraph { children: inner }) if children.is_empty() => {
                        debug!(adopted = inner.len(), "hoisting single paragraph child");
                        *children = inner;
                    }
                    Some(other) => children.push(other),
                    None => {}
                }
            }
            Edit::Keep(node)
        },
    );
}
