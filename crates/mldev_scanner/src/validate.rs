//! Diagnostics for character literals the scanner accepted while still open.

use crate::char_rule::{scan_char_literal, LiteralEnd};
use crate::cursor::DocumentScanner;
use crate::token::TokenInfo;
use mldev_ast::SyntaxKind;
use mldev_core::text::TextSpan;
use mldev_diagnostics::{messages, Diagnostic, DiagnosticCategory, DiagnosticCollection};

/// Report every `CharLiteral` token in `tokens` that is not closed by a quote.
///
/// `tokens` must come from scanning the whole of `text`. Each literal is
/// re-scanned from its start to learn how it ended; the reported span is the
/// token's span. Diagnostics are raised with `category`.
pub fn check_char_literals(
    file_name: &str,
    text: &str,
    tokens: &[TokenInfo<SyntaxKind>],
    category: DiagnosticCategory,
) -> DiagnosticCollection {
    let document = DocumentScanner::new(text);
    let range = TextSpan::new(0, document.len() as u32);
    check_in_document(file_name, document, range, tokens, category)
}

/// Like `check_char_literals`, for tokens scanned with the scanner's range
/// narrowed to `range`. A literal cut off by the end of `range` counts as
/// ending at the end of input.
pub fn check_char_literals_in_range(
    file_name: &str,
    text: &str,
    range: TextSpan,
    tokens: &[TokenInfo<SyntaxKind>],
    category: DiagnosticCategory,
) -> DiagnosticCollection {
    check_in_document(file_name, DocumentScanner::new(text), range, tokens, category)
}

fn check_in_document(
    file_name: &str,
    mut document: DocumentScanner,
    range: TextSpan,
    tokens: &[TokenInfo<SyntaxKind>],
    category: DiagnosticCategory,
) -> DiagnosticCollection {
    let mut diagnostics = DiagnosticCollection::new();
    document.set_range(range.start as usize, range.length as usize);

    for token in tokens {
        if token.data() != Some(&SyntaxKind::CharLiteral) {
            continue;
        }
        document.seek(token.pos as usize);
        let end = match scan_char_literal(&mut document) {
            Some(end) if !end.is_terminated() => end,
            _ => continue,
        };
        let message = if end == LiteralEnd::LineBreak {
            &messages::CHARACTER_LITERAL_BROKEN_BY_LINE_BREAK
        } else {
            &messages::UNTERMINATED_CHARACTER_LITERAL
        };
        diagnostics.add(
            Diagnostic::with_location(file_name.to_string(), token.span(), message, &[])
                .with_category(category),
        );
    }

    diagnostics
}
