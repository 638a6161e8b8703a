//! The read/unread cursor that rules scan through.

use crate::char_codes::is_line_break;

/// A cursor over a character sequence with single-step pushback.
///
/// `read` returns `None` at the end of input but still advances, so every
/// `read` can be undone by exactly one `unread`. Rules rely on that symmetry
/// to rewind to their starting position.
pub trait CharacterScanner {
    /// Return the next character and advance past it.
    fn read(&mut self) -> Option<char>;

    /// Undo the most recent `read`.
    fn unread(&mut self);

    /// Column of the cursor on its current line, 0-based.
    fn column(&self) -> usize;
}

/// A `CharacterScanner` over an in-memory document.
///
/// Owned by the scanning driver. Positions are character offsets; the
/// scannable range can be narrowed with `set_range`.
#[derive(Debug, Clone)]
pub struct DocumentScanner {
    text: Vec<char>,
    /// Current position; may run past `range_end` after reads at end of input.
    offset: usize,
    range_end: usize,
    /// Where the current token attempt began. Rules may not unread past it.
    token_offset: usize,
}

impl DocumentScanner {
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let range_end = text.len();
        Self {
            text,
            offset: 0,
            range_end,
            token_offset: 0,
        }
    }

    /// Restrict scanning to `length` characters starting at `offset`.
    /// Both bounds are clamped to the document.
    pub fn set_range(&mut self, offset: usize, length: usize) {
        let start = offset.min(self.text.len());
        self.range_end = start.saturating_add(length).min(self.text.len());
        self.offset = start;
        self.token_offset = start;
    }

    /// Move the cursor to `offset` and start a new token attempt there.
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset.min(self.range_end);
        self.token_offset = self.offset;
    }

    /// Mark the current position as the start of a token attempt.
    pub fn begin_token(&mut self) {
        self.token_offset = self.offset;
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn range_end(&self) -> usize {
        self.range_end
    }

    /// Whether the cursor has reached the end of the scannable range.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.range_end
    }

    /// Number of characters in the whole document.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The character at `offset`, if it lies in the document.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset).copied()
    }

    /// The document text between two offsets, clamped to the document.
    pub fn text_slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.text.len());
        let start = start.min(end);
        self.text[start..end].iter().collect()
    }
}

impl CharacterScanner for DocumentScanner {
    fn read(&mut self) -> Option<char> {
        let ch = if self.offset < self.range_end {
            Some(self.text[self.offset])
        } else {
            None
        };
        self.offset += 1;
        ch
    }

    fn unread(&mut self) {
        debug_assert!(
            self.offset > self.token_offset,
            "unread past the start of the token at {}",
            self.token_offset
        );
        self.offset = self.offset.saturating_sub(1);
    }

    fn column(&self) -> usize {
        let pos = self.offset.min(self.text.len());
        self.text[..pos]
            .iter()
            .rev()
            .take_while(|&&ch| !is_line_break(ch))
            .count()
    }
}
