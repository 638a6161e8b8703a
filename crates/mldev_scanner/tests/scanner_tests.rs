//! Scanner integration tests.
//!
//! Drives `CharRule` through the public scanner API the way a tokenizer
//! would: character literals are recognized among other text, everything
//! else falls through to the default token.

use mldev_ast::SyntaxKind;
use mldev_scanner::{
    check_char_literals, CharRule, CharacterScanner, DocumentScanner, Rule, RuleBasedScanner,
    Token, TokenInfo,
};

/// Helper: scan all tokens from source and return the character literals as
/// (text, start, end) triples.
fn scan_chars(source: &str) -> Vec<(String, u32, u32)> {
    let chars: Vec<char> = source.chars().collect();
    char_scanner(source)
        .filter(|t| t.data() == Some(&SyntaxKind::CharLiteral))
        .map(|t| {
            let text: String = chars[t.pos as usize..t.end as usize].iter().collect();
            (text, t.pos, t.end)
        })
        .collect()
}

fn char_scanner(source: &str) -> RuleBasedScanner<SyntaxKind> {
    let mut scanner =
        RuleBasedScanner::new(source).with_rule(CharRule::new(SyntaxKind::CharLiteral));
    scanner.set_default_token(Token::Other(SyntaxKind::Unknown));
    scanner
}

/// Helper: evaluate the rule once and report (token, characters consumed).
fn evaluate_once(source: &str) -> (Token<SyntaxKind>, usize) {
    let mut document = DocumentScanner::new(source);
    let token = CharRule::new(SyntaxKind::CharLiteral).evaluate(&mut document);
    (token, document.offset())
}

#[test]
fn test_non_literal_input_is_rewound() {
    for source in ["x", "\"a\"", "#", "#a", "#(", " #\"a\"", "##\"a\""] {
        let (token, consumed) = evaluate_once(source);
        assert_eq!(token, Token::Undefined, "{:?}", source);
        assert_eq!(consumed, 0, "{:?}", source);
    }
}

#[test]
fn test_simple_literal_consumes_four_characters() {
    assert_eq!(
        evaluate_once("#\"a\""),
        (Token::Other(SyntaxKind::CharLiteral), 4)
    );
}

#[test]
fn test_prefix_then_end_of_input() {
    assert_eq!(
        evaluate_once("#\""),
        (Token::Other(SyntaxKind::CharLiteral), 2)
    );
}

#[test]
fn test_unterminated_literal_stops_before_newline() {
    let mut document = DocumentScanner::new("#\"ab\n");
    let token = CharRule::new(SyntaxKind::CharLiteral).evaluate(&mut document);
    assert_eq!(token, Token::Other(SyntaxKind::CharLiteral));
    assert_eq!(document.offset(), 4);
    assert_eq!(document.read(), Some('\n'));
}

#[test]
fn test_escape_gap() {
    // #"\   a"
    assert_eq!(
        evaluate_once("#\"\\   a\""),
        (Token::Other(SyntaxKind::CharLiteral), 8)
    );
}

#[test]
fn test_repeated_no_match_is_identical() {
    let rule = CharRule::new(SyntaxKind::CharLiteral);
    let mut document = DocumentScanner::new("#x\"");
    let first = rule.evaluate(&mut document);
    let after_first = document.offset();
    let second = rule.evaluate(&mut document);
    assert_eq!(first, Token::Undefined);
    assert_eq!(first, second);
    assert_eq!(after_first, 0);
    assert_eq!(document.offset(), 0);
}

#[test]
fn test_literals_in_declarations() {
    let source = "val a = #\"a\"\nval nl = #\"\\n\"\nval q = #\"\\\"\"\n";
    let found = scan_chars(source);
    let texts: Vec<&str> = found.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(texts, vec!["#\"a\"", "#\"\\n\"", "#\"\\\"\""]);
    assert_eq!((found[0].1, found[0].2), (8, 12));
}

#[test]
fn test_hash_alone_is_not_a_literal() {
    // Record selectors such as `#1 pair` start with `#` too.
    assert!(scan_chars("val x = #1 pair").is_empty());
}

#[test]
fn test_tokens_cover_document_without_gaps() {
    let source = "f #\"a\" #\"b\n#\"";
    let tokens: Vec<TokenInfo<SyntaxKind>> = char_scanner(source).collect();
    let mut expected_pos = 0;
    for token in &tokens {
        assert_eq!(token.pos, expected_pos);
        assert!(!token.is_empty());
        expected_pos = token.end;
    }
    assert_eq!(expected_pos as usize, source.chars().count());
}

#[test]
fn test_multibyte_content() {
    let found = scan_chars("val c = #\"λ\"");
    assert_eq!(found, vec![("#\"λ\"".to_string(), 8, 12)]);
}

#[test]
fn test_validation_after_scan() {
    let source = "val a = #\"a\nval b = #\"b\"\nval c = #\"";
    let tokens: Vec<_> = char_scanner(source).collect();
    let diagnostics = check_char_literals(
        "open.sml",
        source,
        &tokens,
        mldev_diagnostics::DiagnosticCategory::Error,
    );
    let codes: Vec<u32> = diagnostics.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1002, 1001]);
    assert_eq!(diagnostics.error_count(), 2);
}
