//! Pandoc JSON AST reader.
//!
//! Pandoc serialises every element as `{"t": kind, "c": content}`. Elements are deserialised
//! loosely and then converted kind by kind, so an element kind this reader does not know becomes
//! `Other` instead of failing the whole document. A known kind whose content has the wrong shape
//! is still an error, except tables and figures: their shape has changed across API versions, so
//! an unreadable one is logged and kept as `Other`. Tables in the pre-1.21 five-field layout are
//! read as well.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::node::{Block, Definition, Document, Inline, QuoteKind, Style, Table};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Pandoc AST major version this reader understands.
pub const API_MAJOR_VERSION: u32 = 1;

#[derive(Deserialize)]
/// Top-level pandoc document as emitted by `pandoc -t json`.
struct PandocDocument {
    #[serde(rename = "pandoc-api-version", default)]
    api_version: Vec<u32>,
    blocks: Vec<Element>,
}

#[derive(Deserialize)]
/// Any AST element before its content is interpreted.
struct Element {
    t: String,
    #[serde(default)]
    c: Value,
}

type Attr = IgnoredAny;
type Row = (Attr, Vec<Cell>);
type Cell = (Attr, IgnoredAny, IgnoredAny, IgnoredAny, Vec<Element>);
type Caption = (IgnoredAny, Vec<Element>);

/// Reads the JSON produced by `pandoc -t json`.
pub struct PandocFormat;

impl Format for PandocFormat {
    fn name(&self) -> &'static str {
        "pandoc"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, source: &str) -> Result<Document> {
        let document: PandocDocument = serde_json::from_str(source)?;
        match document.api_version.first() {
            Some(&API_MAJOR_VERSION) => {}
            Some(major) => warn!(major, "unexpected pandoc API major version"),
            None => warn!("pandoc AST has no API version"),
        }
        let blocks = convert_blocks(document.blocks)?;
        debug!(blocks = blocks.len(), "parsed pandoc AST");
        Ok(Document::new(blocks))
    }
}

fn content<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

fn convert_blocks(elements: Vec<Element>) -> Result<Vec<Block>> {
    elements.into_iter().map(block).collect()
}

fn convert_inlines(elements: Vec<Element>) -> Result<Vec<Inline>> {
    elements.into_iter().map(inline).collect()
}

fn convert_items(items: Vec<Vec<Element>>) -> Result<Vec<Vec<Block>>> {
    items.into_iter().map(convert_blocks).collect()
}

fn convert_rows(rows: Vec<Row>) -> Result<Vec<Vec<Vec<Block>>>> {
    rows.into_iter()
        .map(|(_, cells)| {
            cells
                .into_iter()
                .map(|(_, _, _, _, blocks)| convert_blocks(blocks))
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

fn block(element: Element) -> Result<Block> {
    let Element { t, c } = element;
    let block = match t.as_str() {
        "Plain" => Block::Plain(convert_inlines(content(c)?)?),
        "Para" => Block::Para(convert_inlines(content(c)?)?),
        "LineBlock" => {
            let lines: Vec<Vec<Element>> = content(c)?;
            Block::LineBlock(lines.into_iter().map(convert_inlines).collect::<Result<_>>()?)
        }
        "CodeBlock" => {
            let ((_, classes, _), text): ((IgnoredAny, Vec<String>, IgnoredAny), String) =
                content(c)?;
            Block::CodeBlock {
                language: classes.into_iter().next(),
                text,
            }
        }
        "RawBlock" => {
            let (format, text): (String, String) = content(c)?;
            Block::RawBlock { format, text }
        }
        "BlockQuote" => Block::BlockQuote(convert_blocks(content(c)?)?),
        "OrderedList" => {
            let ((start, _, _), items): ((u64, IgnoredAny, IgnoredAny), Vec<Vec<Element>>) =
                content(c)?;
            Block::OrderedList {
                start,
                items: convert_items(items)?,
            }
        }
        "BulletList" => Block::BulletList(convert_items(content(c)?)?),
        "DefinitionList" => {
            let entries: Vec<(Vec<Element>, Vec<Vec<Element>>)> = content(c)?;
            Block::DefinitionList(
                entries
                    .into_iter()
                    .map(|(term, definitions)| -> Result<Definition> {
                        Ok(Definition {
                            term: convert_inlines(term)?,
                            definitions: convert_items(definitions)?,
                        })
                    })
                    .collect::<Result<_>>()?,
            )
        }
        "Header" => {
            let (level, _, inlines): (u8, Attr, Vec<Element>) = content(c)?;
            Block::Header {
                level,
                content: convert_inlines(inlines)?,
            }
        }
        "HorizontalRule" => Block::HorizontalRule,
        "Table" => match table(c) {
            Ok(table) => Block::Table(table),
            Err(error) => unreadable(t, &error),
        },
        "Figure" => match figure(c) {
            Ok(figure) => figure,
            Err(error) => unreadable(t, &error),
        },
        "Div" => {
            let (_, blocks): (Attr, Vec<Element>) = content(c)?;
            Block::Div(convert_blocks(blocks)?)
        }
        _ => {
            debug!(kind = %t, "unmodelled pandoc block");
            Block::Other(t)
        }
    };
    Ok(block)
}

fn unreadable(kind: String, error: &Error) -> Block {
    warn!(%kind, %error, "skipping pandoc element with unexpected shape");
    Block::Other(kind)
}

fn figure(c: Value) -> Result<Block> {
    let (_, (_, caption), body): (Attr, Caption, Vec<Element>) = content(c)?;
    Ok(Block::Figure {
        caption: convert_blocks(caption)?,
        content: convert_blocks(body)?,
    })
}

fn table(c: Value) -> Result<Table> {
    type Head = (Attr, Vec<Row>);
    type Body = (Attr, IgnoredAny, Vec<Row>, Vec<Row>);
    type Foot = (Attr, Vec<Row>);

    if c.as_array().is_some_and(|fields| fields.len() == 5) {
        return legacy_table(c);
    }

    let (_, (_, caption), _, (_, head), bodies, (_, foot)): (
        Attr,
        Caption,
        IgnoredAny,
        Head,
        Vec<Body>,
        Foot,
    ) = content(c)?;

    let mut rows = convert_rows(head)?;
    for (_, _, intermediate_head, body) in bodies {
        rows.extend(convert_rows(intermediate_head)?);
        rows.extend(convert_rows(body)?);
    }
    rows.extend(convert_rows(foot)?);

    Ok(Table {
        caption: convert_blocks(caption)?,
        rows,
    })
}

/// API 1.20 and earlier: `[caption inlines, aligns, widths, head cells, rows]`, where every cell
/// is a plain list of blocks.
fn legacy_table(c: Value) -> Result<Table> {
    let (caption, _, _, head, body): (
        Vec<Element>,
        IgnoredAny,
        IgnoredAny,
        Vec<Vec<Element>>,
        Vec<Vec<Vec<Element>>>,
    ) = content(c)?;

    let caption = convert_inlines(caption)?;
    let mut rows = Vec::new();
    if head.iter().any(|cell| !cell.is_empty()) {
        rows.push(convert_items(head)?);
    }
    for row in body {
        rows.push(convert_items(row)?);
    }

    Ok(Table {
        caption: if caption.is_empty() {
            Vec::new()
        } else {
            vec![Block::Plain(caption)]
        },
        rows,
    })
}

fn styled(style: Style, c: Value) -> Result<Inline> {
    Ok(Inline::Styled(style, convert_inlines(content(c)?)?))
}

fn inline(element: Element) -> Result<Inline> {
    let Element { t, c } = element;
    let inline = match t.as_str() {
        "Str" => Inline::Str(content(c)?),
        "Space" => Inline::Space,
        "SoftBreak" => Inline::SoftBreak,
        "LineBreak" => Inline::LineBreak,
        "Emph" => styled(Style::Emph, c)?,
        "Underline" => styled(Style::Underline, c)?,
        "Strong" => styled(Style::Strong, c)?,
        "Strikeout" => styled(Style::Strikeout, c)?,
        "Superscript" => styled(Style::Superscript, c)?,
        "Subscript" => styled(Style::Subscript, c)?,
        "SmallCaps" => styled(Style::SmallCaps, c)?,
        "Span" => {
            let (_, inlines): (Attr, Vec<Element>) = content(c)?;
            Inline::Styled(Style::Span, convert_inlines(inlines)?)
        }
        "Quoted" => {
            let (kind, inlines): (Element, Vec<Element>) = content(c)?;
            let kind = if kind.t == "SingleQuote" {
                QuoteKind::Single
            } else {
                QuoteKind::Double
            };
            Inline::Quoted(kind, convert_inlines(inlines)?)
        }
        "Cite" => {
            let (_, inlines): (IgnoredAny, Vec<Element>) = content(c)?;
            Inline::Cite(convert_inlines(inlines)?)
        }
        "Code" => {
            let (_, text): (Attr, String) = content(c)?;
            Inline::Code(text)
        }
        "Math" => {
            let (_, text): (IgnoredAny, String) = content(c)?;
            Inline::Math(text)
        }
        "RawInline" => {
            let (_, text): (IgnoredAny, String) = content(c)?;
            Inline::RawInline(text)
        }
        "Link" | "Image" => {
            let (_, inlines, (target, _)): (Attr, Vec<Element>, (String, IgnoredAny)) =
                content(c)?;
            let content = convert_inlines(inlines)?;
            if t == "Link" {
                Inline::Link { content, target }
            } else {
                Inline::Image { content, target }
            }
        }
        "Note" => Inline::Note(convert_blocks(content(c)?)?),
        _ => {
            debug!(kind = %t, "unmodelled pandoc inline");
            Inline::Other(t)
        }
    };
    Ok(inline)
}

#[cfg(test)]
#[path = "../tests/pandoc.rs"]
mod tests;
