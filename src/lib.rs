//! segtext: split parsed documents into header-delimited text segments.
//!
//! A document is read by an external parser (tree-sitter-md for markdown, pandoc for its JSON
//! AST) into the tree model in [`node`]. [`segmenter::segment`] walks that tree once and groups
//! the flattened text of each qualifying block under the header that precedes it. [`output`]
//! writes the result as JSON.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod filter;
pub mod formats;
pub mod input;
pub mod node;
pub mod output;
pub mod segment;
pub mod segmenter;
pub mod stringify;
pub mod walk;

pub use error::{Error, Result};
pub use node::{Block, Document, Inline, Node};
pub use segment::{Heading, Segment, Segments};
pub use segmenter::{segment, segment_nodes, Segmenter};
