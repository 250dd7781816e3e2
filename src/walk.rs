//! Pre-order, depth-first traversal over every node of a document.
//!
//! Segmentation consumes this flat sequence rather than recursing itself, so any tree that can be
//! walked into [`Node`]s can be segmented.

use crate::node::{Document, Node};

/// Iterator yielding each block and inline of a document, parents before children, siblings left
/// to right.
pub struct Walk<'a> {
    stack: Vec<Node<'a>>,
}

#[must_use]
/// Starts a traversal at the document's top-level blocks.
pub fn walk(document: &Document) -> Walk<'_> {
    let stack = document.blocks.iter().rev().map(Node::Block).collect();
    Walk { stack }
}

impl<'a> Walk<'a> {
    #[must_use]
    /// Starts a traversal at a single node, which is yielded first.
    pub fn from_node(node: Node<'a>) -> Self {
        Self { stack: vec![node] }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[path = "tests/walk.rs"]
mod tests;
