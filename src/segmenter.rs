//! Header-delimited segmentation of a document.
//!
//! The segmenter is fed every node of a document in pre-order. A header closes the segment in
//! progress (if it holds anything) and opens a new one; every qualifying block appends its
//! flattened text to the segment in progress; all other nodes are passed over. Once the walk ends,
//! [`Segmenter::finish`] flushes the trailing segment.
//!
//! Qualifying blocks nested inside qualifying containers are captured twice: once as part of the
//! container's text and once on their own. Consumers that need disjoint text should only feed
//! top-level blocks.

use crate::node::{Block, Document, Node};
use crate::segment::{Heading, Segment, Segments};
use crate::stringify::stringify_inlines;
use crate::walk::walk;
use tracing::debug;

#[derive(Debug, Default)]
/// Accumulates segments from a stream of nodes.
pub struct Segmenter {
    current: Segment,
    segments: Vec<Segment>,
}

impl Segmenter {
    #[must_use]
    /// Creates a segmenter with nothing collected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the segmentation rule to one node.
    pub fn visit(&mut self, node: Node<'_>) {
        let Node::Block(block) = node else {
            return;
        };

        if let Block::Header { level, content } = block {
            self.close();
            self.current.heading = Some(Heading {
                level: *level,
                title: stringify_inlines(content),
            });
        }

        if block.is_qualifying() {
            self.current.texts.push(block.stringify());
        }
    }

    #[must_use]
    /// Flushes the trailing segment and returns every segment collected.
    pub fn finish(mut self) -> Segments {
        self.close();
        debug!(segments = self.segments.len(), "segmentation finished");
        Segments(self.segments)
    }

    fn close(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let segment = std::mem::take(&mut self.current);
        debug!(
            heading = segment.heading.as_ref().map_or("", |h| h.title.as_str()),
            blocks = segment.texts.len(),
            "closed segment"
        );
        self.segments.push(segment);
    }
}

#[must_use]
/// Segments a whole document.
pub fn segment(document: &Document) -> Segments {
    segment_nodes(walk(document))
}

#[must_use]
/// Segments a pre-order node sequence produced by any traversal.
pub fn segment_nodes<'a>(nodes: impl IntoIterator<Item = Node<'a>>) -> Segments {
    nodes
        .into_iter()
        .fold(Segmenter::new(), |mut segmenter, node| {
            segmenter.visit(node);
            segmenter
        })
        .finish()
}

#[cfg(test)]
#[path = "tests/segmenter.rs"]
mod tests;
