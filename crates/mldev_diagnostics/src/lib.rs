//! mldev_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Lexical rules never fail; malformed input they tolerate is reported here by
//! later passes, as structured diagnostics carrying a code, a category and a
//! source span.

use mldev_core::text::TextSpan;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code, printed as `ML<code>`.
    pub code: u32,
    /// The default category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info (global diagnostic).
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic with file and span info.
    pub fn with_location(
        file: String,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file),
            span: Some(span),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Override the message's default category (e.g. from configuration).
    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} ML{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated by one pass or one run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // Lexical (1000-1099)
    pub const UNTERMINATED_CHARACTER_LITERAL: DiagnosticMessage = diag!(1001, Error, "Unterminated character literal.");
    pub const CHARACTER_LITERAL_BROKEN_BY_LINE_BREAK: DiagnosticMessage = diag!(1002, Error, "Character literal is not closed before the end of the line.");

    // Driver (5000-5099)
    pub const CANNOT_READ_FILE_0_1: DiagnosticMessage = diag!(5001, Error, "Cannot read file '{0}': {1}.");
    pub const NO_INPUT_FILES: DiagnosticMessage = diag!(5002, Error, "No input files specified.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("Cannot read file '{0}': {1}.", &["a.sml", "not found"]);
        assert_eq!(msg, "Cannot read file 'a.sml': not found.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::with_location(
            "chars.sml".to_string(),
            TextSpan::new(10, 3),
            &messages::UNTERMINATED_CHARACTER_LITERAL,
            &[],
        );
        assert_eq!(
            diag.to_string(),
            "chars.sml(10): error ML1001: Unterminated character literal."
        );
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::new(&messages::NO_INPUT_FILES, &[]);
        assert!(diag.file.is_none());
        assert!(diag.span.is_none());
        assert_eq!(diag.code, 5002);
        assert!(diag.is_error());
    }

    #[test]
    fn test_with_category_downgrades() {
        let diag = Diagnostic::new(&messages::UNTERMINATED_CHARACTER_LITERAL, &[])
            .with_category(DiagnosticCategory::Warning);
        assert!(!diag.is_error());
        assert_eq!(diag.to_string(), "warning ML1001: Unterminated character literal.");
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(
            Diagnostic::new(&messages::CHARACTER_LITERAL_BROKEN_BY_LINE_BREAK, &[])
                .with_category(DiagnosticCategory::Warning),
        );
        assert!(!collection.has_errors());
        collection.add(Diagnostic::new(&messages::UNTERMINATED_CHARACTER_LITERAL, &[]));
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_diagnostic_collection_sort() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::with_location(
            "b.sml".to_string(),
            TextSpan::new(10, 1),
            &messages::UNTERMINATED_CHARACTER_LITERAL,
            &[],
        ));
        collection.add(Diagnostic::with_location(
            "a.sml".to_string(),
            TextSpan::new(7, 1),
            &messages::CHARACTER_LITERAL_BROKEN_BY_LINE_BREAK,
            &[],
        ));
        collection.add(Diagnostic::with_location(
            "a.sml".to_string(),
            TextSpan::new(2, 1),
            &messages::UNTERMINATED_CHARACTER_LITERAL,
            &[],
        ));
        collection.sort();
        let spans: Vec<_> = collection
            .diagnostics()
            .iter()
            .map(|d| (d.file.as_deref(), d.span.map(|s| s.start)))
            .collect();
        assert_eq!(
            spans,
            vec![(Some("a.sml"), Some(2)), (Some("a.sml"), Some(7)), (Some("b.sml"), Some(10))]
        );
    }
}
