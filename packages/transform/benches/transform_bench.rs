use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use untangle_ast::{Attribute, Node};
use untangle_transform::{unwrap_all, unwrap_component_only_paragraphs};

/// A document shaped like real component-heavy docs output: per section a
/// heading, prose, a wrapped component reference, and a card whose body the
/// parser wrapped in a paragraph.
fn synthetic_document(sections: usize) -> Node {
    let mut children = Vec::with_capacity(sections * 4);
    for i in 0..sections {
        children.push(Node::heading(2, vec![Node::text(format!("Section {i}"))]));
        children.push(Node::paragraph(vec![
            Node::text("Some prose mentioning "),
            Node::inline_component("term"),
            Node::text(" inline."),
        ]));
        children.push(Node::paragraph(vec![
            Node::text("  "),
            Node::inline_component_with(
                "figure",
                vec![Attribute::new("src", format!("fig-{i}.png"))],
                vec![],
            ),
            Node::text("  "),
        ]));
        children.push(Node::block_component(
            "card",
            vec![Node::paragraph(vec![Node::text("card body text")])],
        ));
    }
    Node::root(children)
}

fn bench_unwrap_component_only(c: &mut Criterion) {
    let doc = synthetic_document(250);
    c.bench_function("unwrap_component_only_paragraphs", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut tree| {
                unwrap_component_only_paragraphs(black_box(&mut tree));
                tree
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_unwrap_all(c: &mut Criterion) {
    let doc = synthetic_document(250);
    c.bench_function("unwrap_all", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut tree| {
                unwrap_all(black_box(&mut tree));
                tree
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_unwrap_component_only, bench_unwrap_all);
criterion_main!(benches);
