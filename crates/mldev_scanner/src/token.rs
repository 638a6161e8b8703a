//! Token information produced by the scanner driver.

use crate::rule::Token;
use mldev_core::text::TextSpan;

/// A classified span of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo<T> {
    /// The classification returned by the winning rule or the default.
    pub token: Token<T>,
    /// Start position in the source text.
    pub pos: u32,
    /// End position in the source text (exclusive).
    pub end: u32,
}

impl<T> TokenInfo<T> {
    pub fn new(token: Token<T>, pos: u32, end: u32) -> Self {
        Self { token, pos, end }
    }

    /// The length of this token in characters.
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }

    /// The caller's marker, if the token carries one.
    pub fn data(&self) -> Option<&T> {
        self.token.data()
    }
}
