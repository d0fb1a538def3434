//! Line:column positions and the line index used to convert them to byte
//! offsets.
//!
//! ## Coordinate Conventions
//!
//! - Lines and columns are **1-indexed** (matching editor conventions)
//! - Byte offsets are **0-indexed**
//! - Columns count bytes within the line
//!
//! Conversions are strict rather than clamping: a position on a line that
//! does not exist, or past the end of its line, is reported as `None` so
//! that callers can short-circuit to a "not found" result instead of
//! silently resolving to the wrong location.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-indexed line:column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number, counting bytes within the line.
    pub column: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Precomputed line-start table for one source file.
///
/// Built once per file; conversions are then O(log lines) for
/// [`position_at`](LineIndex::position_at) and O(1) for
/// [`offset_at`](LineIndex::offset_at).
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of each line.
    line_starts: Vec<usize>,
    /// Total length of the indexed text in bytes.
    text_len: usize,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        LineIndex {
            line_starts,
            text_len: text.len(),
        }
    }

    /// Number of lines in the indexed text.
    ///
    /// An empty file still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a position to a byte offset.
    ///
    /// Returns `None` if the line does not exist or the column runs past the
    /// end of its line. A column one past the last character of a line is
    /// valid and maps to the line's end offset (the caret can sit there).
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        if position.line == 0 || position.column == 0 {
            return None;
        }
        let line_idx = (position.line - 1) as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_end = self.end_of_line(line_idx);
        let offset = line_start + (position.column - 1) as usize;
        if offset > line_end {
            return None;
        }
        Some(offset)
    }

    /// Convert a byte offset to a position.
    ///
    /// Returns `None` if the offset lies past the end of the text.
    pub fn position_at(&self, offset: usize) -> Option<Position> {
        if offset > self.text_len {
            return None;
        }
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line_idx] + 1;
        Some(Position::new(line_idx as u32 + 1, column as u32))
    }

    /// Offset of the last character position on a line, excluding the
    /// newline terminator.
    fn end_of_line(&self, line_idx: usize) -> usize {
        match self.line_starts.get(line_idx + 1) {
            Some(&next_start) => next_start - 1,
            None => self.text_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "abc\ndefgh\n\nxy";

    #[test]
    fn offset_at_maps_line_starts_and_interiors() {
        let index = LineIndex::new(TEXT);
        assert_eq!(index.offset_at(Position::new(1, 1)), Some(0));
        assert_eq!(index.offset_at(Position::new(1, 3)), Some(2));
        assert_eq!(index.offset_at(Position::new(2, 1)), Some(4));
        assert_eq!(index.offset_at(Position::new(2, 5)), Some(8));
        assert_eq!(index.offset_at(Position::new(4, 2)), Some(12));
    }

    #[test]
    fn offset_at_allows_caret_past_last_character() {
        let index = LineIndex::new(TEXT);
        // One past "abc" is the newline position.
        assert_eq!(index.offset_at(Position::new(1, 4)), Some(3));
        // One past the final line is the end of text.
        assert_eq!(index.offset_at(Position::new(4, 3)), Some(13));
    }

    #[test]
    fn offset_at_rejects_out_of_bounds_positions() {
        let index = LineIndex::new(TEXT);
        assert_eq!(index.offset_at(Position::new(0, 1)), None);
        assert_eq!(index.offset_at(Position::new(1, 0)), None);
        assert_eq!(index.offset_at(Position::new(1, 5)), None);
        assert_eq!(index.offset_at(Position::new(5, 1)), None);
    }

    #[test]
    fn blank_line_has_only_its_start_position() {
        let index = LineIndex::new(TEXT);
        assert_eq!(index.offset_at(Position::new(3, 1)), Some(10));
        assert_eq!(index.offset_at(Position::new(3, 2)), None);
    }

    #[test]
    fn position_at_inverts_offset_at() {
        let index = LineIndex::new(TEXT);
        for offset in 0..=TEXT.len() {
            let position = index.position_at(offset).unwrap();
            assert_eq!(index.offset_at(position), Some(offset));
        }
        assert_eq!(index.position_at(TEXT.len() + 1), None);
    }

    #[test]
    fn empty_text_has_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.offset_at(Position::new(1, 1)), Some(0));
        assert_eq!(index.offset_at(Position::new(1, 2)), None);
        assert_eq!(index.position_at(0), Some(Position::new(1, 1)));
    }
}
