//! Reading document sources and choosing a reader for them.

use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::pandoc::PandocFormat;
use crate::formats::Format;
use crate::node::Document;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
/// Readers available for a source document.
pub enum FormatKind {
    /// Markdown parsed with tree-sitter.
    Markdown,
    /// Pandoc JSON AST.
    Pandoc,
}

impl FormatKind {
    #[must_use]
    /// The reader implementing this format.
    pub fn reader(self) -> Box<dyn Format> {
        match self {
            Self::Markdown => Box::new(MarkdownFormat),
            Self::Pandoc => Box::new(PandocFormat),
        }
    }
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|path| path.as_os_str() == "-")
}

/// Reads a document source from `path`, or from stdin when the path is absent or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read as UTF-8 text.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    let source = match path.filter(|path| !is_stdin(Some(path))) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };
    debug!(bytes = source.len(), "read source");
    Ok(source)
}

#[must_use]
/// Picks a reader: an explicit choice wins, then the file extension, then pandoc for stdin.
///
/// `.json` selects pandoc, any of `markdown_extensions` selects markdown, and unknown extensions
/// fall back to markdown.
pub fn detect_format(
    path: Option<&Path>,
    explicit: Option<FormatKind>,
    markdown_extensions: &[String],
) -> FormatKind {
    if let Some(kind) = explicit {
        return kind;
    }
    if is_stdin(path) {
        return FormatKind::Pandoc;
    }
    let ext = path
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if PandocFormat.extensions().contains(&ext) {
        FormatKind::Pandoc
    } else if markdown_extensions.iter().any(|known| known == ext) {
        FormatKind::Markdown
    } else {
        debug!(ext, "unrecognised extension, reading as markdown");
        FormatKind::Markdown
    }
}

/// Parses a source with the given reader.
///
/// # Errors
///
/// Returns an error if the reader rejects the source.
pub fn parse(source: &str, kind: FormatKind) -> Result<Document> {
    let reader = kind.reader();
    debug!(format = reader.name(), "parsing source");
    reader.parse(source)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
