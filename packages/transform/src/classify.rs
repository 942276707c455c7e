//! Wrapper eligibility.

use untangle_ast::Node;

/// Whether a paragraph wrapper around `children` may be removed.
///
/// Every child must be transparent: an inline component reference, or text
/// that is blank once trimmed. An empty sequence is vacuously transparent.
/// Only the given slice is inspected, never siblings or ancestors, and
/// nothing is mutated.
pub fn children_are_transparent(children: &[Node]) -> bool {
    children.iter().all(|child| match child {
        Node::InlineComponent { .. } => true,
        Node::Text { value } => value.trim().is_empty(),
        // Every other kind carries its own renderable content; a paragraph
        // holding one is load-bearing and stays.
        Node::Root { .. }
        | Node::Paragraph { .. }
        | Node::BlockComponent { .. }
        | Node::Heading { .. }
        | Node::List { .. }
        | Node::ListItem { .. }
        | Node::Blockquote { .. }
        | Node::Emphasis { .. }
        | Node::Strong { .. }
        | Node::InlineCode { .. }
        | Node::Code { .. }
        | Node::ThematicBreak => false,
    })
}
