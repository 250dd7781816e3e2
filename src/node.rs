//! Document tree model shared by every reader.
//!
//! Readers (tree-sitter markdown, pandoc JSON) translate their own syntax trees into this closed
//! set of block and inline kinds. Segmentation only ever reads the tree, so nodes are plain data
//! with no back references.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A parsed document: the top-level blocks in source order.
pub struct Document {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    /// Wraps an ordered list of top-level blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Block-level node.
pub enum Block {
    /// Section header; opens a new segment.
    Header {
        /// Nesting depth, 1 for top-level headers.
        level: u8,
        /// Header text.
        content: Vec<Inline>,
    },
    /// Paragraph of running text.
    Para(Vec<Inline>),
    /// Inline content not wrapped in a paragraph (tight list items, table cells).
    Plain(Vec<Inline>),
    /// Quoted blocks.
    BlockQuote(Vec<Block>),
    /// Generic container.
    Div(Vec<Block>),
    /// Terms, each followed by one or more definitions.
    DefinitionList(Vec<Definition>),
    /// Unnumbered list; each item is a sequence of blocks.
    BulletList(Vec<Vec<Block>>),
    /// Numbered list.
    OrderedList {
        /// Number of the first item.
        start: u64,
        /// List items, each a sequence of blocks.
        items: Vec<Vec<Block>>,
    },
    /// Lines whose breaks are significant (verse, addresses).
    LineBlock(Vec<Vec<Inline>>),
    /// Literal code.
    CodeBlock {
        /// Language tag from the info string or first class, if any.
        language: Option<String>,
        /// Code text without fences or indentation.
        text: String,
    },
    /// Markup passed through untouched in some output format.
    RawBlock {
        /// Format the content is written in, e.g. `html`.
        format: String,
        /// Raw content.
        text: String,
    },
    /// Thematic break.
    HorizontalRule,
    /// Table; not captured itself, but its cells are.
    Table(Table),
    /// Captioned figure.
    Figure {
        /// Caption blocks.
        caption: Vec<Block>,
        /// Figure body.
        content: Vec<Block>,
    },
    /// A kind the reader recognised structurally but does not model.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One entry of a definition list.
pub struct Definition {
    /// Term being defined.
    pub term: Vec<Inline>,
    /// Definitions, each a sequence of blocks.
    pub definitions: Vec<Vec<Block>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Table reduced to what carries text: a caption and the cells of every row.
pub struct Table {
    /// Caption blocks.
    pub caption: Vec<Block>,
    /// Header, body and footer rows in order; each row is a list of cells, each cell a list of
    /// blocks.
    pub rows: Vec<Vec<Vec<Block>>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Formatting applied by a styled inline span.
pub enum Style {
    /// Emphasis.
    Emph,
    /// Strong emphasis.
    Strong,
    /// Underline.
    Underline,
    /// Strikethrough.
    Strikeout,
    /// Superscript.
    Superscript,
    /// Subscript.
    Subscript,
    /// Small capitals.
    SmallCaps,
    /// Attribute-only span with no visual style.
    Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Quotation mark kind of a quoted span.
pub enum QuoteKind {
    /// Single quotes.
    Single,
    /// Double quotes.
    Double,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Inline-level node.
pub enum Inline {
    /// A run of text without whitespace.
    Str(String),
    /// Inter-word space.
    Space,
    /// Line break in the source that renders as a space.
    SoftBreak,
    /// Hard line break.
    LineBreak,
    /// Formatted span.
    Styled(Style, Vec<Inline>),
    /// Quoted span.
    Quoted(QuoteKind, Vec<Inline>),
    /// Citation; only the rendered content is kept.
    Cite(Vec<Inline>),
    /// Inline code.
    Code(String),
    /// TeX math.
    Math(String),
    /// Raw inline markup.
    RawInline(String),
    /// Hyperlink.
    Link {
        /// Link text.
        content: Vec<Inline>,
        /// Destination URL or reference label.
        target: String,
    },
    /// Image.
    Image {
        /// Alternative text.
        content: Vec<Inline>,
        /// Image source.
        target: String,
    },
    /// Footnote body.
    Note(Vec<Block>),
    /// A kind the reader recognised structurally but does not model.
    Other(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Borrowed view of any node in the tree, yielded by [`crate::walk::walk`].
pub enum Node<'a> {
    /// A block-level node.
    Block(&'a Block),
    /// An inline-level node.
    Inline(&'a Inline),
}

impl Block {
    #[must_use]
    /// Whether this block's flattened text is captured into a segment.
    ///
    /// Exhaustive on purpose: a new block kind must be classified here.
    pub fn is_qualifying(&self) -> bool {
        match self {
            Self::Header { .. }
            | Self::Para(_)
            | Self::Plain(_)
            | Self::BlockQuote(_)
            | Self::Div(_)
            | Self::DefinitionList(_)
            | Self::BulletList(_)
            | Self::OrderedList { .. }
            | Self::LineBlock(_)
            | Self::CodeBlock { .. }
            | Self::RawBlock { .. } => true,
            Self::HorizontalRule | Self::Table(_) | Self::Figure { .. } | Self::Other(_) => false,
        }
    }

    #[must_use]
    /// Short kind name used in log output.
    pub fn kind(&self) -> &str {
        match self {
            Self::Header { .. } => "Header",
            Self::Para(_) => "Para",
            Self::Plain(_) => "Plain",
            Self::BlockQuote(_) => "BlockQuote",
            Self::Div(_) => "Div",
            Self::DefinitionList(_) => "DefinitionList",
            Self::BulletList(_) => "BulletList",
            Self::OrderedList { .. } => "OrderedList",
            Self::LineBlock(_) => "LineBlock",
            Self::CodeBlock { .. } => "CodeBlock",
            Self::RawBlock { .. } => "RawBlock",
            Self::HorizontalRule => "HorizontalRule",
            Self::Table(_) => "Table",
            Self::Figure { .. } => "Figure",
            Self::Other(kind) => kind,
        }
    }
}

impl<'a> Node<'a> {
    #[must_use]
    /// Direct children in document order.
    pub fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Block(block) => block_children(block),
            Node::Inline(inline) => inline_children(inline),
        }
    }
}

fn inlines(content: &[Inline]) -> impl Iterator<Item = Node<'_>> {
    content.iter().map(Node::Inline)
}

fn blocks(content: &[Block]) -> impl Iterator<Item = Node<'_>> {
    content.iter().map(Node::Block)
}

fn block_children(block: &Block) -> Vec<Node<'_>> {
    match block {
        Block::Header { content, .. } | Block::Para(content) | Block::Plain(content) => {
            inlines(content).collect()
        }
        Block::LineBlock(lines) => lines.iter().flatten().map(Node::Inline).collect(),
        Block::BlockQuote(content) | Block::Div(content) => blocks(content).collect(),
        Block::BulletList(items) | Block::OrderedList { items, .. } => {
            items.iter().flatten().map(Node::Block).collect()
        }
        Block::DefinitionList(entries) => entries
            .iter()
            .flat_map(|entry| {
                inlines(&entry.term).chain(entry.definitions.iter().flatten().map(Node::Block))
            })
            .collect(),
        Block::Table(table) => blocks(&table.caption)
            .chain(table.rows.iter().flatten().flatten().map(Node::Block))
            .collect(),
        Block::Figure { caption, content } => blocks(caption).chain(blocks(content)).collect(),
        Block::CodeBlock { .. }
        | Block::RawBlock { .. }
        | Block::HorizontalRule
        | Block::Other(_) => Vec::new(),
    }
}

fn inline_children(inline: &Inline) -> Vec<Node<'_>> {
    match inline {
        Inline::Styled(_, content)
        | Inline::Quoted(_, content)
        | Inline::Cite(content)
        | Inline::Link { content, .. }
        | Inline::Image { content, .. } => inlines(content).collect(),
        Inline::Note(content) => blocks(content).collect(),
        Inline::Str(_)
        | Inline::Space
        | Inline::SoftBreak
        | Inline::LineBreak
        | Inline::Code(_)
        | Inline::Math(_)
        | Inline::RawInline(_)
        | Inline::Other(_) => Vec::new(),
    }
}

/// Splits plain text into `Str` words separated by `Space`, or `SoftBreak` where the whitespace
/// run contains a newline.
#[must_use]
pub fn words(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut word = String::new();
    let mut gap: Option<Inline> = None;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                out.push(Inline::Str(std::mem::take(&mut word)));
            }
            if ch == '\n' {
                gap = Some(Inline::SoftBreak);
            } else if gap.is_none() {
                gap = Some(Inline::Space);
            }
        } else {
            if let Some(sep) = gap.take() {
                out.push(sep);
            }
            word.push(ch);
        }
    }
    if !word.is_empty() {
        out.push(Inline::Str(word));
    }
    if let Some(sep) = gap {
        out.push(sep);
    }
    out
}

#[cfg(test)]
#[path = "tests/node.rs"]
mod tests;
