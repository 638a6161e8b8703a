//! Recognition of character literals: `#"a"`, `#"\n"`, `#"\   \a"`.

use crate::char_codes::*;
use crate::cursor::CharacterScanner;
use crate::rule::{Rule, Token};

/// How a recognized character literal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralEnd {
    /// A closing `"`, which is part of the token.
    Quote,
    /// A carriage return or line feed, left unconsumed.
    LineBreak,
    /// The end of input.
    EndOfInput,
}

impl LiteralEnd {
    /// Whether the literal was closed by its quote.
    #[inline]
    pub fn is_terminated(self) -> bool {
        self == LiteralEnd::Quote
    }
}

/// Matches a character literal and classifies it with a caller-chosen token.
///
/// Once `#"` has been seen the rule always succeeds: a literal still open at a
/// line break or at the end of input is accepted, so text being edited keeps
/// tokenizing.
#[derive(Debug, Clone)]
pub struct CharRule<T> {
    token: T,
}

impl<T> CharRule<T> {
    pub fn new(success: T) -> Self {
        Self { token: success }
    }
}

impl<T: Clone> Rule<T> for CharRule<T> {
    fn evaluate(&self, scanner: &mut dyn CharacterScanner) -> Token<T> {
        match scan_char_literal(scanner) {
            Some(_) => Token::Other(self.token.clone()),
            None => Token::Undefined,
        }
    }
}

/// Scan one character literal at the cursor.
///
/// Returns `None`, with the cursor restored, when the input does not start
/// with `#"`. Otherwise the cursor is left after the closing quote, or before
/// the line break or end of input that cut the literal short.
///
/// Escapes are only skipped, not decoded: a backslash followed by whitespace
/// starts a gap whose whitespace run is consumed; any other character after a
/// backslash is taken as it stands.
pub fn scan_char_literal(scanner: &mut dyn CharacterScanner) -> Option<LiteralEnd> {
    if scanner.read() != Some(HASH) {
        scanner.unread();
        return None;
    }
    if scanner.read() != Some(DOUBLE_QUOTE) {
        scanner.unread();
        scanner.unread();
        return None;
    }

    loop {
        match scanner.read() {
            Some(DOUBLE_QUOTE) => return Some(LiteralEnd::Quote),
            Some(CARRIAGE_RETURN | LINE_FEED) => {
                scanner.unread();
                return Some(LiteralEnd::LineBreak);
            }
            None => {
                scanner.unread();
                return Some(LiteralEnd::EndOfInput);
            }
            Some(BACKSLASH) => skip_escape(scanner),
            Some(_) => {}
        }
    }
}

fn skip_escape(scanner: &mut dyn CharacterScanner) {
    match scanner.read() {
        Some(ch) if is_gap_white_space(ch) => {
            while matches!(scanner.read(), Some(ch) if is_gap_white_space(ch)) {}
            // Give back the character that ended the run.
            scanner.unread();
        }
        // Leave end of input for the literal loop to see.
        None => scanner.unread(),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::DocumentScanner;

    const CHAR: &str = "char";

    fn evaluate(text: &str) -> (Token<&'static str>, usize) {
        let mut scanner = DocumentScanner::new(text);
        let token = CharRule::new(CHAR).evaluate(&mut scanner);
        (token, scanner.offset())
    }

    /// A cursor that panics when a rule rewinds past where it started.
    struct StrictScanner {
        inner: DocumentScanner,
        reads: usize,
        unreads: usize,
    }

    impl CharacterScanner for StrictScanner {
        fn read(&mut self) -> Option<char> {
            self.reads += 1;
            self.inner.read()
        }

        fn unread(&mut self) {
            self.unreads += 1;
            assert!(self.unreads <= self.reads, "rule rewound past its start");
            self.inner.unread();
        }

        fn column(&self) -> usize {
            self.inner.column()
        }
    }

    #[test]
    fn test_not_a_hash_is_undefined() {
        for text in ["", "a", "\"a\"", " #\"a\"", "\n"] {
            let (token, offset) = evaluate(text);
            assert_eq!(token, Token::Undefined, "{:?}", text);
            assert_eq!(offset, 0, "{:?}", text);
        }
    }

    #[test]
    fn test_hash_without_quote_is_undefined() {
        for text in ["#", "#a", "#(1, 2)", "# \"a\"", "#\\\"a\""] {
            let (token, offset) = evaluate(text);
            assert_eq!(token, Token::Undefined, "{:?}", text);
            assert_eq!(offset, 0, "{:?}", text);
        }
    }

    #[test]
    fn test_simple_literal() {
        assert_eq!(evaluate("#\"a\""), (Token::Other(CHAR), 4));
        assert_eq!(evaluate("#\"a\" rest"), (Token::Other(CHAR), 4));
    }

    #[test]
    fn test_end_of_input_right_after_prefix() {
        let mut scanner = DocumentScanner::new("#\"");
        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::EndOfInput));
        assert_eq!(scanner.offset(), 2);
    }

    #[test]
    fn test_line_break_ends_literal_unconsumed() {
        for text in ["#\"ab\n", "#\"ab\r\n", "#\"ab\rc\""] {
            let mut scanner = DocumentScanner::new(text);
            assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::LineBreak));
            assert_eq!(scanner.offset(), 4, "{:?}", text);
            assert!(matches!(scanner.read(), Some('\n' | '\r')));
        }
        assert!(LiteralEnd::Quote.is_terminated());
        assert!(!LiteralEnd::LineBreak.is_terminated());
        assert!(!LiteralEnd::EndOfInput.is_terminated());
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let mut scanner = DocumentScanner::new("#\"\\\"\"");
        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::Quote));
        assert_eq!(scanner.offset(), 5);

        let mut scanner = DocumentScanner::new("#\"\\\"");
        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::EndOfInput));
        assert_eq!(scanner.offset(), 4);
    }

    #[test]
    fn test_escape_gap_gives_back_the_breaking_character() {
        // #"\   a"
        let mut scanner = DocumentScanner::new("#\"\\   a\"");
        let mut probe = DocumentScanner::new("#\"\\   a\"");
        for _ in 0..3 {
            probe.read();
        }
        skip_escape(&mut probe);
        assert_eq!(probe.offset(), 6);
        assert_eq!(probe.read(), Some('a'));

        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::Quote));
        assert_eq!(scanner.offset(), 8);
    }

    #[test]
    fn test_escape_gap_spans_lines() {
        let text = "#\"\\\n   \\a\" x";
        let mut scanner = DocumentScanner::new(text);
        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::Quote));
        assert_eq!(scanner.offset(), 10);
    }

    #[test]
    fn test_escape_gap_running_into_end_of_input() {
        let mut scanner = DocumentScanner::new("#\"\\  ");
        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::EndOfInput));
        assert_eq!(scanner.offset(), 5);
    }

    #[test]
    fn test_backslash_at_end_of_input() {
        let mut scanner = DocumentScanner::new("#\"\\");
        assert_eq!(scan_char_literal(&mut scanner), Some(LiteralEnd::EndOfInput));
        assert_eq!(scanner.offset(), 3);
    }

    #[test]
    fn test_undefined_is_repeatable() {
        let mut scanner = DocumentScanner::new("#x");
        let rule = CharRule::new(CHAR);
        assert_eq!(rule.evaluate(&mut scanner), Token::Undefined);
        assert_eq!(scanner.offset(), 0);
        assert_eq!(rule.evaluate(&mut scanner), Token::Undefined);
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn test_rule_never_rewinds_past_start() {
        let inputs = [
            "", "#", "#x", "#\"", "#\"a\"", "#\"\\", "#\"\\ ", "#\"\\ \n\t\\a\"", "#\"ab\n",
            "#\"\\\"", "x#\"a\"",
        ];
        for text in inputs {
            let mut scanner = StrictScanner {
                inner: DocumentScanner::new(text),
                reads: 0,
                unreads: 0,
            };
            let token = CharRule::new(CHAR).evaluate(&mut scanner);
            if token.is_undefined() {
                assert_eq!(scanner.reads, scanner.unreads, "{:?}", text);
            }
            assert!(scanner.inner.offset() <= text.chars().count(), "{:?}", text);
        }
    }
}
