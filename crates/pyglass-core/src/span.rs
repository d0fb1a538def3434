//! Byte spans over source text.
//!
//! A [`Span`] records the region of source a parse node covers as a start
//! offset and a length. Offset containment is inclusive at both boundaries
//! (`start <= offset <= end`): the character immediately after a node still
//! resolves to that node, which is what hover and signature-help callers
//! expect when the caret sits at the end of an expression.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte offsets into source text.
///
/// Unlike a half-open edit range, offset containment here is inclusive at
/// the end boundary; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start: usize,
    /// Length of the region in bytes.
    pub length: usize,
}

impl Span {
    /// Create a new span from a start offset and length.
    pub fn new(start: usize, length: usize) -> Self {
        Span { start, length }
    }

    /// Create a span from inclusive start and exclusive end offsets.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "Span start ({}) must be <= end ({})",
            start,
            end
        );
        Span {
            start,
            length: end - start,
        }
    }

    /// End offset of the span (`start + length`).
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check whether `offset` falls within this span.
    ///
    /// Inclusive at both boundaries: `start <= offset <= end`.
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end()
    }

    /// Check if this span contains another span entirely.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    /// Check if this span overlaps with another.
    ///
    /// Adjacent spans (one ends where another starts) do NOT overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end())
    }
}
