//! Plain-text flattening of tree nodes.
//!
//! Markup is dropped and descendant text is concatenated in order. Flattening borrows the tree, so
//! it can be repeated freely and always yields the same string.

use crate::node::{Block, Inline, QuoteKind};

const BLOCK_SEPARATOR: &str = "\n\n";
const LINE_SEPARATOR: &str = "\n";

impl Inline {
    #[must_use]
    /// Readable text of this inline with formatting removed.
    pub fn stringify(&self) -> String {
        match self {
            Self::Str(text) | Self::Code(text) | Self::Math(text) | Self::RawInline(text) => {
                text.clone()
            }
            Self::Space | Self::SoftBreak | Self::LineBreak => " ".to_string(),
            Self::Styled(_, content)
            | Self::Cite(content)
            | Self::Link { content, .. }
            | Self::Image { content, .. } => stringify_inlines(content),
            Self::Quoted(kind, content) => {
                let mark = match kind {
                    QuoteKind::Single => '\'',
                    QuoteKind::Double => '"',
                };
                format!("{mark}{}{mark}", stringify_inlines(content))
            }
            Self::Note(content) => join_blocks(content, BLOCK_SEPARATOR),
            Self::Other(_) => String::new(),
        }
    }
}

impl Block {
    #[must_use]
    /// Readable text of this block and everything nested in it.
    pub fn stringify(&self) -> String {
        match self {
            Self::Header { content, .. } | Self::Para(content) | Self::Plain(content) => {
                stringify_inlines(content)
            }
            Self::CodeBlock { text, .. } | Self::RawBlock { text, .. } => text.clone(),
            Self::BlockQuote(content) | Self::Div(content) => {
                join_blocks(content, BLOCK_SEPARATOR)
            }
            Self::BulletList(items) | Self::OrderedList { items, .. } => items
                .iter()
                .map(|item| join_blocks(item, LINE_SEPARATOR))
                .collect::<Vec<_>>()
                .join(LINE_SEPARATOR),
            Self::LineBlock(lines) => lines
                .iter()
                .map(|line| stringify_inlines(line))
                .collect::<Vec<_>>()
                .join(LINE_SEPARATOR),
            Self::DefinitionList(entries) => entries
                .iter()
                .map(|entry| {
                    std::iter::once(stringify_inlines(&entry.term))
                        .chain(
                            entry
                                .definitions
                                .iter()
                                .map(|definition| join_blocks(definition, LINE_SEPARATOR)),
                        )
                        .collect::<Vec<_>>()
                        .join(LINE_SEPARATOR)
                })
                .collect::<Vec<_>>()
                .join(LINE_SEPARATOR),
            Self::Table(table) => {
                let rows = table.rows.iter().map(|row| {
                    row.iter()
                        .map(|cell| join_blocks(cell, " "))
                        .collect::<Vec<_>>()
                        .join(" ")
                });
                std::iter::once(join_blocks(&table.caption, LINE_SEPARATOR))
                    .filter(|caption| !caption.is_empty())
                    .chain(rows)
                    .collect::<Vec<_>>()
                    .join(LINE_SEPARATOR)
            }
            Self::Figure { caption, content } => caption
                .iter()
                .chain(content)
                .map(Self::stringify)
                .collect::<Vec<_>>()
                .join(BLOCK_SEPARATOR),
            Self::HorizontalRule | Self::Other(_) => String::new(),
        }
    }
}

#[must_use]
/// Concatenated text of a run of inlines.
pub fn stringify_inlines(content: &[Inline]) -> String {
    content.iter().map(Inline::stringify).collect()
}

fn join_blocks(content: &[Block], separator: &str) -> String {
    content
        .iter()
        .map(Block::stringify)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
#[path = "tests/stringify.rs"]
mod tests;
