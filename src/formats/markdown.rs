//! Markdown format implementation using tree-sitter-md.
//!
//! The block grammar gives the document structure; the text of each paragraph, heading and table
//! cell is then reparsed with the inline grammar so emphasis, code spans and links can be reduced
//! to their readable text. Block continuation markers (the `> ` of quoted lines) are cut out of
//! inline and code text before it is used.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::node::{words, Block, Document, Inline, Style, Table};
use tracing::debug;
use tree_sitter::{Language, Node as SyntaxNode, Parser};

/// Tree-sitter reader for CommonMark with the GitHub extensions tree-sitter-md understands.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn parse(&self, source: &str) -> Result<Document> {
        let mut block_parser = parser_for(tree_sitter_md::LANGUAGE.into(), "markdown")?;
        let tree = block_parser
            .parse(source, None)
            .ok_or(Error::Parse("markdown"))?;

        let mut reader = Reader {
            source,
            inline_parser: parser_for(tree_sitter_md::INLINE_LANGUAGE.into(), "markdown-inline")?,
        };
        let blocks = reader.blocks(tree.root_node());
        debug!(blocks = blocks.len(), "parsed markdown");
        Ok(Document::new(blocks))
    }
}

fn parser_for(language: Language, grammar: &'static str) -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|source| Error::Language { grammar, source })?;
    Ok(parser)
}

/// Byte slice of `src`, empty if the range is out of bounds or not on a char boundary.
fn slice(src: &str, start: usize, end: usize) -> &str {
    src.get(start..end).unwrap_or_default()
}

fn named_children(node: SyntaxNode<'_>) -> Vec<SyntaxNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn child_of_kind<'t>(node: SyntaxNode<'t>, kind: &str) -> Option<SyntaxNode<'t>> {
    named_children(node)
        .into_iter()
        .find(|child| child.kind() == kind)
}

struct Reader<'s> {
    source: &'s str,
    inline_parser: Parser,
}

impl Reader<'_> {
    fn text(&self, node: SyntaxNode<'_>) -> &str {
        slice(self.source, node.start_byte(), node.end_byte())
    }

    /// Node text with any `block_continuation` children cut out.
    fn text_without_continuations(&self, node: SyntaxNode<'_>) -> String {
        let mut text = String::new();
        let mut pos = node.start_byte();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "block_continuation" {
                text.push_str(slice(self.source, pos, child.start_byte()));
                pos = child.end_byte();
            }
        }
        text.push_str(slice(self.source, pos, node.end_byte()));
        text
    }

    fn blocks(&mut self, parent: SyntaxNode<'_>) -> Vec<Block> {
        let mut out = Vec::new();
        for child in named_children(parent) {
            self.push_block(child, &mut out);
        }
        out
    }

    fn push_block(&mut self, node: SyntaxNode<'_>, out: &mut Vec<Block>) {
        let kind = node.kind();
        match kind {
            "section" => out.extend(self.blocks(node)),
            "atx_heading" => out.push(self.atx_heading(node)),
            "setext_heading" => out.push(self.setext_heading(node)),
            "paragraph" => out.push(Block::Para(self.paragraph(node))),
            "block_quote" => out.push(Block::BlockQuote(self.blocks(node))),
            "list" => out.push(self.list(node)),
            "fenced_code_block" => out.push(self.fenced_code(node)),
            "indented_code_block" => out.push(self.indented_code(node)),
            "html_block" => out.push(Block::RawBlock {
                format: "html".to_string(),
                text: self.text(node).trim_end_matches('\n').to_string(),
            }),
            "pipe_table" => out.push(Block::Table(self.table(node))),
            "thematic_break" => out.push(Block::HorizontalRule),
            "block_continuation"
            | "block_quote_marker"
            | "link_reference_definition"
            | "minus_metadata"
            | "plus_metadata" => {}
            _ if kind.starts_with("list_marker") || kind.starts_with("task_list_marker") => {}
            _ => out.push(Block::Other(kind.to_string())),
        }
    }

    fn atx_heading(&mut self, node: SyntaxNode<'_>) -> Block {
        let level = named_children(node)
            .iter()
            .find_map(|child| {
                child
                    .kind()
                    .strip_prefix("atx_h")
                    .and_then(|rest| rest.strip_suffix("_marker"))
                    .and_then(|digit| digit.parse().ok())
            })
            .unwrap_or(1);
        let content = match child_of_kind(node, "inline") {
            Some(inline) => {
                let text = self.text_without_continuations(inline);
                self.parse_inlines(strip_closing_sequence(&text))
            }
            None => Vec::new(),
        };
        Block::Header { level, content }
    }

    fn setext_heading(&mut self, node: SyntaxNode<'_>) -> Block {
        let level = if child_of_kind(node, "setext_h1_underline").is_some() {
            1
        } else {
            2
        };
        let content = match child_of_kind(node, "paragraph") {
            Some(paragraph) => self.paragraph(paragraph),
            None => Vec::new(),
        };
        Block::Header { level, content }
    }

    fn paragraph(&mut self, node: SyntaxNode<'_>) -> Vec<Inline> {
        match child_of_kind(node, "inline") {
            Some(inline) => self.inline_content(inline),
            None => Vec::new(),
        }
    }

    fn list(&mut self, node: SyntaxNode<'_>) -> Block {
        let items = named_children(node)
            .into_iter()
            .filter(|child| child.kind() == "list_item")
            .collect::<Vec<_>>();

        let first_marker = items.first().and_then(|item| {
            named_children(*item)
                .into_iter()
                .find(|child| child.kind().starts_with("list_marker"))
        });
        let ordered_start = first_marker.and_then(|marker| match marker.kind() {
            "list_marker_dot" | "list_marker_parenthesis" => Some(
                self.text(marker)
                    .trim()
                    .trim_end_matches(['.', ')'])
                    .parse()
                    .unwrap_or(1),
            ),
            _ => None,
        });

        let items = items.into_iter().map(|item| self.blocks(item)).collect();
        match ordered_start {
            Some(start) => Block::OrderedList { start, items },
            None => Block::BulletList(items),
        }
    }

    fn fenced_code(&self, node: SyntaxNode<'_>) -> Block {
        let language = child_of_kind(node, "info_string").and_then(|info| {
            let tag = match child_of_kind(info, "language") {
                Some(language) => self.text(language),
                None => self.text(info).split_whitespace().next().unwrap_or_default(),
            };
            (!tag.is_empty()).then(|| tag.to_string())
        });
        let text = child_of_kind(node, "code_fence_content")
            .map(|content| {
                let mut text = self.text_without_continuations(content);
                if text.ends_with('\n') {
                    text.pop();
                }
                text
            })
            .unwrap_or_default();
        Block::CodeBlock { language, text }
    }

    fn indented_code(&self, node: SyntaxNode<'_>) -> Block {
        let raw = self.text_without_continuations(node);
        let text = raw
            .lines()
            .map(|line| {
                let indent = line.len() - line.trim_start_matches(' ').len();
                &line[indent.min(4)..]
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end_matches('\n')
            .to_string();
        Block::CodeBlock {
            language: None,
            text,
        }
    }

    fn table(&mut self, node: SyntaxNode<'_>) -> Table {
        let mut rows = Vec::new();
        for row in named_children(node) {
            if !matches!(row.kind(), "pipe_table_header" | "pipe_table_row") {
                continue;
            }
            let mut cells = Vec::new();
            for cell in named_children(row) {
                if cell.kind() == "pipe_table_cell" {
                    let text = self.text(cell).trim().to_string();
                    cells.push(vec![Block::Plain(self.parse_inlines(&text))]);
                }
            }
            rows.push(cells);
        }
        Table {
            caption: Vec::new(),
            rows,
        }
    }

    fn inline_content(&mut self, node: SyntaxNode<'_>) -> Vec<Inline> {
        let text = self.text_without_continuations(node);
        self.parse_inlines(&text)
    }

    fn parse_inlines(&mut self, text: &str) -> Vec<Inline> {
        let content = match self.inline_parser.parse(text, None) {
            Some(tree) => span(tree.root_node(), text),
            None => words(text),
        };
        trim_spaces(content)
    }
}

/// ATX heading text without its optional closing run of `#`.
///
/// The run only counts as closing when it is the whole text or follows a space or tab, so
/// `C#` keeps its hash.
fn strip_closing_sequence(text: &str) -> &str {
    let trimmed = text.trim_end_matches([' ', '\t', '\n']);
    let open = trimmed.trim_end_matches('#');
    if open.len() == trimmed.len() {
        trimmed
    } else if open.is_empty() || open.ends_with([' ', '\t']) {
        open.trim_end_matches([' ', '\t'])
    } else {
        trimmed
    }
}

fn trim_spaces(mut content: Vec<Inline>) -> Vec<Inline> {
    let is_space = |inline: &Inline| matches!(inline, Inline::Space | Inline::SoftBreak);
    while content.last().is_some_and(is_space) {
        content.pop();
    }
    let leading = content.iter().take_while(|inline| is_space(inline)).count();
    content.drain(..leading);
    content
}

/// Inline content of `node`: the text between its children plus each converted child.
fn span(node: SyntaxNode<'_>, src: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut pos = node.start_byte();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        out.extend(words(slice(src, pos, child.start_byte())));
        push_inline(child, src, &mut out);
        pos = child.end_byte();
    }
    out.extend(words(slice(src, pos, node.end_byte())));
    out
}

fn push_inline(node: SyntaxNode<'_>, src: &str, out: &mut Vec<Inline>) {
    let text = slice(src, node.start_byte(), node.end_byte());
    match node.kind() {
        "emphasis" => out.push(Inline::Styled(Style::Emph, span(node, src))),
        "strong_emphasis" => out.push(Inline::Styled(Style::Strong, span(node, src))),
        "strikethrough" => out.push(Inline::Styled(Style::Strikeout, span(node, src))),
        "emphasis_delimiter" | "code_span_delimiter" => {}
        "code_span" => out.push(Inline::Code(code_span_text(text))),
        "inline_link" | "full_reference_link" | "collapsed_reference_link" | "shortcut_link" => {
            out.push(Inline::Link {
                content: labelled(node, "link_text", src),
                target: link_target(node, src),
            });
        }
        "image" => out.push(Inline::Image {
            content: labelled(node, "image_description", src),
            target: link_target(node, src),
        }),
        "uri_autolink" | "email_autolink" => {
            let target = text.trim_start_matches('<').trim_end_matches('>');
            out.push(Inline::Link {
                content: vec![Inline::Str(target.to_string())],
                target: target.to_string(),
            });
        }
        "backslash_escape" => out.push(Inline::Str(text.chars().skip(1).collect())),
        "hard_line_break" => out.push(Inline::LineBreak),
        "html_tag" => out.push(Inline::RawInline(text.to_string())),
        "latex_block" => out.push(Inline::Math(text.trim_matches('$').to_string())),
        "entity_reference" | "numeric_character_reference" => {
            out.push(Inline::Str(decode_reference(text)));
        }
        _ => out.extend(span(node, src)),
    }
}

/// Character named by an HTML entity or numeric reference; unknown names stay literal.
fn decode_reference(text: &str) -> String {
    let Some(name) = text.strip_prefix('&').and_then(|s| s.strip_suffix(';')) else {
        return text.to_string();
    };
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => number.parse(),
        };
        let decoded = code
            .ok()
            .and_then(char::from_u32)
            .filter(|c| *c != '\0')
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return decoded.to_string();
    }
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "laquo" => '«',
        "raquo" => '»',
        _ => return text.to_string(),
    };
    decoded.to_string()
}

fn labelled(node: SyntaxNode<'_>, kind: &str, src: &str) -> Vec<Inline> {
    child_of_kind(node, kind).map_or_else(Vec::new, |label| span(label, src))
}

fn link_target(node: SyntaxNode<'_>, src: &str) -> String {
    let target = child_of_kind(node, "link_destination")
        .or_else(|| child_of_kind(node, "link_label"))
        .or_else(|| child_of_kind(node, "link_text"));
    target.map_or_else(String::new, |target| {
        slice(src, target.start_byte(), target.end_byte())
            .trim_matches(['<', '>', '[', ']'])
            .to_string()
    })
}

/// Code span content without backtick fences and the single padding space CommonMark strips.
fn code_span_text(text: &str) -> String {
    let inner = text.trim_matches('`');
    match inner.strip_prefix(' ').and_then(|s| s.strip_suffix(' ')) {
        Some(stripped) if !stripped.trim().is_empty() => stripped.to_string(),
        _ => inner.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
