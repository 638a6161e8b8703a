//! mldev_scanner: Rule-based lexical scanning for Standard ML source text.
//!
//! Scanning is split the way editor tokenizers split it:
//! - a `CharacterScanner` cursor that can `read` and `unread` one character
//!   at a time,
//! - `Rule`s that try to recognize one token at the cursor and rewind it
//!   exactly when they do not match,
//! - a `RuleBasedScanner` driver that tries its rules in priority order.
//!
//! `CharRule` recognizes character literals (`#"a"`). It tolerates literals
//! left open at a line break or at the end of input; `check_char_literals`
//! reports those afterwards.

mod char_codes;
mod char_rule;
mod cursor;
mod rule;
mod scanner;
mod token;
mod validate;

pub use char_rule::{scan_char_literal, CharRule, LiteralEnd};
pub use cursor::{CharacterScanner, DocumentScanner};
pub use rule::{Rule, Token};
pub use scanner::RuleBasedScanner;
pub use token::TokenInfo;
pub use validate::{check_char_literals, check_char_literals_in_range};
