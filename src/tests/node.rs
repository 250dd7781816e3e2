use super::{words, Block, Inline};

fn s(text: &str) -> Inline {
    Inline::Str(text.to_string())
}

#[test]
fn test_words_splits_on_whitespace() {
    assert_eq!(
        words("Hello  world"),
        vec![s("Hello"), Inline::Space, s("world")]
    );
}

#[test]
fn test_words_newline_becomes_soft_break() {
    assert_eq!(
        words("one \n two"),
        vec![s("one"), Inline::SoftBreak, s("two")]
    );
}

#[test]
fn test_words_keeps_edge_whitespace() {
    // Edges are kept so text on either side of an inline span stays separated.
    assert_eq!(words(" x "), vec![Inline::Space, s("x"), Inline::Space]);
    assert!(words("").is_empty());
}

#[test]
fn test_qualifying_kinds() {
    assert!(Block::Para(Vec::new()).is_qualifying());
    assert!(Block::LineBlock(Vec::new()).is_qualifying());
    assert!(Block::Div(Vec::new()).is_qualifying());
    assert!(!Block::HorizontalRule.is_qualifying());
    assert!(!Block::Table(super::Table::default()).is_qualifying());
    assert!(!Block::Other("Custom".to_string()).is_qualifying());
}

#[test]
fn test_other_kind_name() {
    assert_eq!(Block::Other("Custom".to_string()).kind(), "Custom");
    assert_eq!(Block::HorizontalRule.kind(), "HorizontalRule");
}
