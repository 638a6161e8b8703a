//! The rule-based scanner driver.
//!
//! Tries each rule at the current position in priority order; the first rule
//! that recognizes something wins. When no rule matches, one character is
//! consumed and classified with the default token.

use crate::cursor::{CharacterScanner, DocumentScanner};
use crate::rule::{Rule, Token};
use crate::token::TokenInfo;
use mldev_core::text::TextSpan;

pub struct RuleBasedScanner<T> {
    document: DocumentScanner,
    rules: Vec<Box<dyn Rule<T>>>,
    default_token: Token<T>,
    /// Start of the most recently returned token.
    token_offset: usize,
}

impl<T: Clone> RuleBasedScanner<T> {
    /// Create a scanner over `text` with no rules and an undefined default.
    pub fn new(text: &str) -> Self {
        Self {
            document: DocumentScanner::new(text),
            rules: Vec::new(),
            default_token: Token::Undefined,
            token_offset: 0,
        }
    }

    /// Append a rule. Rules added earlier take priority.
    pub fn add_rule(&mut self, rule: impl Rule<T> + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Builder-style `add_rule`.
    pub fn with_rule(mut self, rule: impl Rule<T> + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    /// The token returned for a character no rule recognizes.
    pub fn set_default_token(&mut self, token: Token<T>) {
        self.default_token = token;
    }

    /// Scan only `length` characters starting at `offset`.
    pub fn set_range(&mut self, offset: usize, length: usize) {
        self.document.set_range(offset, length);
        self.token_offset = self.document.offset();
    }

    /// Classify the next span of the document.
    pub fn next_token(&mut self) -> Token<T> {
        // A rule may end on an unreturned end-of-input read, leaving the
        // cursor past the range.
        self.document.seek(self.document.offset());
        self.token_offset = self.document.offset();
        for rule in &self.rules {
            self.document.begin_token();
            let token = rule.evaluate(&mut self.document);
            if !token.is_undefined() {
                return token;
            }
            debug_assert_eq!(
                self.document.offset(),
                self.token_offset,
                "rule returned undefined without rewinding"
            );
        }

        if self.document.read().is_none() {
            self.document.unread();
            return Token::Eof;
        }
        self.default_token.clone()
    }

    /// Start offset of the last token returned by `next_token`.
    #[inline]
    pub fn token_offset(&self) -> usize {
        self.token_offset
    }

    #[inline]
    pub fn token_length(&self) -> usize {
        self.document
            .offset()
            .min(self.document.range_end())
            .saturating_sub(self.token_offset)
    }

    pub fn token_span(&self) -> TextSpan {
        TextSpan::new(self.token_offset as u32, self.token_length() as u32)
    }

    /// The source text of the last token.
    pub fn token_text(&self) -> String {
        self.document
            .text_slice(self.token_offset, self.token_offset + self.token_length())
    }
}

impl<T: Clone> Iterator for RuleBasedScanner<T> {
    type Item = TokenInfo<T>;

    fn next(&mut self) -> Option<TokenInfo<T>> {
        let token = self.next_token();
        if token.is_eof() {
            return None;
        }
        let span = self.token_span();
        Some(TokenInfo::new(token, span.start, span.end()))
    }
}
