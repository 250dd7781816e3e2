//! Segment representation produced by the segmenter.
//!
//! A segment is the text of one header-delimited span of a document: the header's own text
//! followed by every qualifying block up to the next header. Content that precedes the first
//! header forms a segment with no heading.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Header that opened a segment.
pub struct Heading {
    /// Nesting depth of the header (1 for top-level).
    pub level: u8,
    /// Header text without markup.
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Flattened text of the qualifying blocks between one header and the next.
pub struct Segment {
    /// Opening header, absent for content before the first header.
    pub heading: Option<Heading>,
    /// Flattened block texts in visit order.
    pub texts: Vec<String>,
}

impl Segment {
    #[must_use]
    /// Whether no block text has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Every segment of a document, in document order.
pub struct Segments(pub Vec<Segment>);

impl Segments {
    #[must_use]
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// Whether the document yielded no segments at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over segments in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    #[must_use]
    /// Segment texts without headings: the list-of-lists form written to disk.
    pub fn texts(&self) -> Vec<&[String]> {
        self.0.iter().map(|segment| segment.texts.as_slice()).collect()
    }

    #[must_use]
    /// Owned list-of-lists form, convenient for comparisons.
    pub fn into_texts(self) -> Vec<Vec<String>> {
        self.0.into_iter().map(|segment| segment.texts).collect()
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
