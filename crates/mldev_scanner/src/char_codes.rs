//! Character code constants used by the scanner rules.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const TAB: char = '\t';
pub const FORM_FEED: char = '\u{000C}';
pub const SPACE: char = ' ';

pub const DOUBLE_QUOTE: char = '"';
pub const HASH: char = '#';
pub const BACKSLASH: char = '\\';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Whitespace allowed inside a string gap (`\   \`), line breaks included.
#[inline]
pub fn is_gap_white_space(ch: char) -> bool {
    matches!(ch, SPACE | TAB | FORM_FEED | CARRIAGE_RETURN | LINE_FEED)
}
