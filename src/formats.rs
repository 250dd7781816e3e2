//! Format trait and implementations for different document sources.
//!
//! This module defines the `Format` trait which abstracts over the external parsers that turn
//! source text into a [`Document`]: tree-sitter for markdown, pandoc for everything pandoc reads.

use crate::error::Result;
use crate::node::Document;

pub mod markdown;
pub mod pandoc;

/// A document source that can be parsed into the shared tree model.
pub trait Format {
    /// Name used in logs and on the command line.
    fn name(&self) -> &'static str;
    /// File suffixes this format claims when none is given explicitly.
    fn extensions(&self) -> &[&str];
    /// Parses source text into a document tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed.
    fn parse(&self, source: &str) -> Result<Document>;
}
