//! The contract between scanner rules and the driver that runs them.

use crate::cursor::CharacterScanner;

/// The outcome of a rule attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<T> {
    /// Nothing recognized; the cursor is back where the attempt started.
    Undefined,
    /// End of the scanned range. Only the driver produces this.
    Eof,
    /// Whitespace, carrying the caller's marker.
    Whitespace(T),
    /// A recognized token, carrying the caller's marker.
    Other(T),
}

impl<T> Token<T> {
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Token::Undefined)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    #[inline]
    pub fn is_other(&self) -> bool {
        matches!(self, Token::Other(_))
    }

    /// The caller's marker, for tokens that carry one.
    pub fn data(&self) -> Option<&T> {
        match self {
            Token::Whitespace(data) | Token::Other(data) => Some(data),
            Token::Undefined | Token::Eof => None,
        }
    }
}

/// A lexical rule.
///
/// `evaluate` either recognizes a token starting at the cursor and leaves the
/// cursor after it, or returns `Token::Undefined` with the cursor exactly where
/// it was. A rule never unreads more characters than it has read.
pub trait Rule<T> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<T>;
}

impl<T, F> Rule<T> for F
where
    F: Fn(&mut dyn CharacterScanner) -> Token<T>,
{
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<T> {
        self(scanner)
    }
}
