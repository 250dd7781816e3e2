//! JSON rendering of segments.
//!
//! The default artifact is `segmented_text.json`: an array of segments, each an array of block
//! texts, pretty-printed with four-space indentation. Non-ASCII text is written as-is.

use crate::error::Result;
use crate::segment::Segments;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// File name written when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "segmented_text.json";

/// Indentation width used when none is configured.
pub const DEFAULT_INDENT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Shape of the rendered JSON.
pub enum Layout {
    /// Array of arrays of strings.
    #[default]
    Plain,
    /// Array of `{"heading": {"level", "title"} | null, "texts": [...]}` objects.
    Annotated,
}

/// Renders segments as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn render(segments: &Segments, layout: Layout, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match layout {
        Layout::Plain => segments.texts().serialize(&mut ser)?,
        Layout::Annotated => segments.serialize(&mut ser)?,
    }
    let json =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(json)
}

/// Renders segments and writes them to `path` in one go.
///
/// # Errors
///
/// Returns an error if serialisation or the file write fails.
pub fn write(path: &Path, segments: &Segments, layout: Layout, indent: usize) -> Result<()> {
    let json = render(segments, layout, indent)?;
    fs::write(path, json)?;
    info!(path = %path.display(), segments = segments.len(), "wrote segments");
    Ok(())
}

#[cfg(test)]
#[path = "tests/output.rs"]
mod tests;
