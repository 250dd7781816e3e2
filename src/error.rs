//! Error type shared by the readers and the output writer.
//!
//! Segmentation itself cannot fail; everything here comes from reading input, parsing it, or
//! writing the result.

use std::io;

#[derive(Debug, thiserror::Error)]
/// Failure while reading, parsing or writing a document.
pub enum Error {
    /// Reading the source or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The pandoc AST was not valid JSON or did not have the expected shape, or output could not
    /// be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load {grammar} grammar: {source}")]
    Language {
        /// Grammar that failed to load.
        grammar: &'static str,
        /// Underlying tree-sitter error.
        source: tree_sitter::LanguageError,
    },
    /// The parser gave up without producing a tree.
    #[error("{0} parser produced no tree")]
    Parse(&'static str),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
