use super::stringify_inlines;
use crate::node::{words, Block, Definition, Inline, QuoteKind, Style, Table};

fn plain(text: &str) -> Block {
    Block::Plain(words(text))
}

#[test]
fn test_markup_is_dropped() {
    let content = vec![
        Inline::Str("Hello".to_string()),
        Inline::Space,
        Inline::Styled(Style::Strong, words("bold")),
        Inline::SoftBreak,
        Inline::Link {
            content: words("a link"),
            target: "https://example.com".to_string(),
        },
        Inline::Space,
        Inline::Code("x + 1".to_string()),
    ];
    assert_eq!(stringify_inlines(&content), "Hello bold a link x + 1");
}

#[test]
fn test_quotes_are_kept() {
    let single = Inline::Quoted(QuoteKind::Single, words("hi"));
    let double = Inline::Quoted(QuoteKind::Double, words("there"));
    assert_eq!(single.stringify(), "'hi'");
    assert_eq!(double.stringify(), "\"there\"");
}

#[test]
fn test_line_break_renders_as_space() {
    let content = vec![
        Inline::Str("a".to_string()),
        Inline::LineBreak,
        Inline::Str("b".to_string()),
    ];
    assert_eq!(stringify_inlines(&content), "a b");
}

#[test]
fn test_block_quote_joins_paragraphs() {
    let quote = Block::BlockQuote(vec![Block::Para(words("one")), Block::Para(words("two"))]);
    assert_eq!(quote.stringify(), "one\n\ntwo");
}

#[test]
fn test_ordered_list_joins_items() {
    let list = Block::OrderedList {
        start: 3,
        items: vec![vec![plain("three")], vec![plain("four")]],
    };
    assert_eq!(list.stringify(), "three\nfour");
}

#[test]
fn test_line_block_keeps_lines() {
    let block = Block::LineBlock(vec![words("roses are red"), words("violets are blue")]);
    assert_eq!(block.stringify(), "roses are red\nviolets are blue");
}

#[test]
fn test_definition_list() {
    let list = Block::DefinitionList(vec![Definition {
        term: words("Term"),
        definitions: vec![vec![plain("first meaning")], vec![plain("second meaning")]],
    }]);
    assert_eq!(list.stringify(), "Term\nfirst meaning\nsecond meaning");
}

#[test]
fn test_table_rows() {
    let table = Block::Table(Table {
        caption: vec![plain("Prices")],
        rows: vec![
            vec![vec![plain("item")], vec![plain("cost")]],
            vec![vec![plain("tea")], vec![plain("2")]],
        ],
    });
    assert_eq!(table.stringify(), "Prices\nitem cost\ntea 2");
}

#[test]
fn test_code_and_raw_are_literal() {
    let code = Block::CodeBlock {
        language: None,
        text: "let *x* = 1;".to_string(),
    };
    assert_eq!(code.stringify(), "let *x* = 1;");
    assert_eq!(Block::HorizontalRule.stringify(), "");
}

#[test]
fn test_non_ascii_preserved() {
    let para = Block::Para(words("Grüße, 世界"));
    assert_eq!(para.stringify(), "Grüße, 世界");
}

#[test]
fn test_stringify_is_idempotent() {
    let block = Block::Div(vec![
        Block::Header {
            level: 1,
            content: words("Title"),
        },
        Block::Para(vec![Inline::Note(vec![plain("note")])]),
    ]);
    assert_eq!(block.stringify(), block.stringify());
}
