//! Text span and range types for source location tracking.
//!
//! Scanners walk documents one `char` at a time, so every position here is a
//! character offset from the start of the document, not a byte offset.

use std::fmt;
use std::ops::Range;

/// A position in source text, measured in characters from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    /// The offset where this span starts.
    pub start: TextPos,
    /// The length of this span in characters.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            length: 0,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span contains the given position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Convert to an index range, suitable for slicing a `[char]` buffer.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    /// Return a new span covering both this span and the other.
    pub fn union(&self, other: &TextSpan) -> TextSpan {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        TextSpan::from_bounds(start, end)
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A text range with start and end positions, as stored on AST nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    /// Start offset (inclusive).
    pub pos: TextPos,
    /// End offset (exclusive).
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// The smallest range covering both `self` and `other`.
    #[inline]
    pub fn cover(&self, other: TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }

    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

impl From<TextSpan> for TextRange {
    fn from(span: TextSpan) -> Self {
        TextRange::new(span.start, span.end())
    }
}

/// Line and column information derived from source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column, in characters.
    pub character: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for LineAndColumn {
    /// Renders as the 1-based `line:column` pair editors expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A map from character offsets to line numbers, built from source text.
/// Used to turn token and diagnostic offsets into line/column positions.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Character offsets of the start of each line.
    line_starts: Vec<TextPos>,
}

impl LineMap {
    /// Build a line map from source text.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`, the same breaks the
    /// scanner recognizes.
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0u32];
        let mut byte_cursor = 0usize;
        let mut char_cursor = 0u32;
        for brk in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            // The `\n` of a `\r\n` pair was counted with its `\r`.
            if brk < byte_cursor {
                continue;
            }
            let line_end = if bytes[brk] == b'\r' && bytes.get(brk + 1) == Some(&b'\n') {
                brk + 2
            } else {
                brk + 1
            };
            char_cursor += text[byte_cursor..line_end].chars().count() as u32;
            byte_cursor = line_end;
            line_starts.push(char_cursor);
        }
        Self { line_starts }
    }

    /// Get the line number (0-based) for an offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line as u32,
            Err(line) => (line - 1) as u32,
        }
    }

    /// Get the line and column for an offset.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line as usize];
        LineAndColumn {
            line,
            character: pos - line_start,
        }
    }

    /// Get the offset of the start of a line.
    pub fn line_start(&self, line: u32) -> TextPos {
        self.line_starts[line as usize]
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
