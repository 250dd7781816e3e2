//! Pandoc filter mode.
//!
//! Pandoc pipes its JSON AST through the filter's stdin and reads the (possibly modified) AST back
//! from stdout. Segmentation only observes the document, so the bytes are echoed unchanged and the
//! segments are written to a file on the side once the whole document has been read.

use crate::config::Settings;
use crate::error::Result;
use crate::formats::pandoc::PandocFormat;
use crate::formats::Format;
use crate::output;
use crate::segment::Segments;
use crate::segmenter::segment;
use std::io::{Read, Write};
use tracing::info;

/// Environment variable pandoc sets when it runs a filter.
pub const PANDOC_ENV: &str = "PANDOC_VERSION";

#[must_use]
/// Whether to act as a filter: asked for explicitly or launched by pandoc.
pub fn is_filter_mode(requested: bool) -> bool {
    requested || std::env::var_os(PANDOC_ENV).is_some()
}

/// Reads a pandoc AST from `reader`, writes its segments to `settings.output` and echoes the AST
/// to `writer`.
///
/// The input is always read as pandoc JSON, whatever reader was asked for elsewhere, since pandoc
/// expects JSON back. Nothing is echoed if the input cannot be parsed.
///
/// # Errors
///
/// Returns an error if reading, parsing, writing the segments file or echoing fails.
pub fn run(
    mut reader: impl Read,
    mut writer: impl Write,
    settings: &Settings,
) -> Result<Segments> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    let document = PandocFormat.parse(&source)?;

    let segments = segment(&document);
    info!(segments = segments.len(), "segmented pandoc AST");
    output::write(&settings.output, &segments, settings.layout, settings.indent)?;

    writer.write_all(source.as_bytes())?;
    writer.flush()?;
    Ok(segments)
}

#[cfg(test)]
#[path = "tests/filter.rs"]
mod tests;
