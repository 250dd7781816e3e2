use super::{walk, Walk};
use crate::node::{words, Block, Document, Inline, Node};

fn describe(node: Node<'_>) -> String {
    match node {
        Node::Block(block) => block.kind().to_string(),
        Node::Inline(Inline::Str(text)) => format!("Str:{text}"),
        Node::Inline(inline) => format!("{inline:?}"),
    }
}

#[test]
fn test_pre_order_depth_first() {
    let document = Document::new(vec![
        Block::Header {
            level: 1,
            content: words("T"),
        },
        Block::BlockQuote(vec![Block::Para(words("q"))]),
        Block::Para(words("p")),
    ]);

    let order: Vec<String> = walk(&document).map(describe).collect();
    assert_eq!(
        order,
        vec![
            "Header",
            "Str:T",
            "BlockQuote",
            "Para",
            "Str:q",
            "Para",
            "Str:p"
        ]
    );
}

#[test]
fn test_walk_descends_into_notes() {
    let document = Document::new(vec![Block::Para(vec![Inline::Note(vec![Block::Plain(
        words("n"),
    )])])]);
    let kinds: Vec<String> = walk(&document).map(describe).collect();
    assert_eq!(kinds, vec!["Para", "Note([Plain([Str(\"n\")])])", "Plain", "Str:n"]);
}

#[test]
fn test_walk_empty_document() {
    assert_eq!(walk(&Document::default()).count(), 0);
}

#[test]
fn test_walk_from_node() {
    let block = Block::BulletList(vec![
        vec![Block::Plain(words("a"))],
        vec![Block::Plain(words("b"))],
    ]);
    let count = Walk::from_node(Node::Block(&block)).count();
    // list, two plains, two strs
    assert_eq!(count, 5);
}
