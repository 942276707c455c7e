//! Mutable tree traversal with structural replacement.
//!
//! This is the traversal layer the rewrite passes are built on: a
//! depth-first, pre-order walk that can replace a visited node with zero or
//! more nodes in its parent's child sequence and continue correctly
//! afterward.
//!
//! Rather than splicing into a live `Vec` with index arithmetic, each child
//! sequence is rebuilt: every node expands to zero or more output nodes, so
//! there is no cursor to keep consistent across replacements. Nodes are
//! moved into the rebuilt sequence, never cloned, so untouched nodes keep
//! their identity.

use untangle_ast::{Node, NodeKind};

/// Outcome of visiting a matched node.
pub enum Edit {
    /// Hand the node back, possibly with its own fields edited in place.
    /// The walk descends into its (current) children.
    Keep(Node),
    /// Replace the node with zero or more nodes at its position in the
    /// parent's child sequence. Replacements are not re-matched against the
    /// interest set and are not descended into; the walk resumes at the
    /// first sibling after the spliced-in span.
    Splice(Vec<Node>),
}

/// Depth-first, pre-order rewrite of the tree under `root`.
///
/// `edit` fires for every node whose kind is in `kinds` and that sits in
/// some parent's child sequence. The root has no parent sequence to splice
/// into, so it is descended through but never passed to `edit`.
///
/// An empty tree, or a tree containing no node of an interesting kind, is
/// left untouched.
pub fn rewrite<F>(root: &mut Node, kinds: &[NodeKind], edit: &mut F)
where
    F: FnMut(Node) -> Edit,
{
    if let Some(children) = root.children_mut() {
        rewrite_children(children, kinds, edit);
    }
}

fn rewrite_children<F>(children: &mut Vec<Node>, kinds: &[NodeKind], edit: &mut F)
where
    F: FnMut(Node) -> Edit,
{
    let input = std::mem::take(children);
    children.reserve(input.len());
    for node in input {
        let mut node = if kinds.contains(&node.kind()) {
            match edit(node) {
                Edit::Keep(node) => node,
                Edit::Splice(replacement) => {
                    children.extend(replacement);
                    continue;
                }
            }
        } else {
            node
        };
        if let Some(nested) = node.children_mut() {
            rewrite_children(nested, kinds, edit);
        }
        children.push(node);
    }
}
