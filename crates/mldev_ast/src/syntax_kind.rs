//! SyntaxKind enum - token and node kinds of the Standard ML front end.

/// The kind of a syntax token or node in the AST.
///
/// Token kinds come first, then node kinds; the range helpers below rely on
/// that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    EndOfFileToken,

    // Trivia
    WhitespaceTrivia,
    NewLineTrivia,
    CommentTrivia,

    // Literals
    IntLiteral,
    RealLiteral,
    StringLiteral,
    CharLiteral,

    Identifier,

    // Punctuation
    OpenParenToken,
    CloseParenToken,
    CommaToken,
    EqualsToken,
    UnderscoreToken,
    HashToken,

    // Keywords
    ValKeyword,
    LazyKeyword,
    LetKeyword,
    InKeyword,
    EndKeyword,

    // ========================================================================
    // Nodes
    // ========================================================================

    // Patterns
    VarPat,
    WildcardPat,
    ConstantPat,
    TuplePat,
    ConPat,

    // Expressions
    VarExp,
    ConstantExp,
    TupleExp,
    AppExp,
    LetExp,

    // Bindings
    ValBind,
}

impl SyntaxKind {
    pub const FIRST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::WhitespaceTrivia;
    pub const LAST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::CommentTrivia;
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::IntLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::CharLiteral;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::ValKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::EndKeyword;
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::EndKeyword;
    pub const FIRST_PATTERN: SyntaxKind = SyntaxKind::VarPat;
    pub const LAST_PATTERN: SyntaxKind = SyntaxKind::ConPat;
    pub const FIRST_EXPRESSION: SyntaxKind = SyntaxKind::VarExp;
    pub const LAST_EXPRESSION: SyntaxKind = SyntaxKind::LetExp;

    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind is produced by the scanner rather than the parser.
    #[inline]
    pub fn is_token(self) -> bool {
        self.in_range(SyntaxKind::Unknown, Self::LAST_TOKEN)
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        self.in_range(Self::FIRST_TRIVIA_TOKEN, Self::LAST_TRIVIA_TOKEN)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self.in_range(Self::FIRST_LITERAL_TOKEN, Self::LAST_LITERAL_TOKEN)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    #[inline]
    pub fn is_pattern(self) -> bool {
        self.in_range(Self::FIRST_PATTERN, Self::LAST_PATTERN)
    }

    #[inline]
    pub fn is_expression(self) -> bool {
        self.in_range(Self::FIRST_EXPRESSION, Self::LAST_EXPRESSION)
    }

    #[inline]
    pub fn is_binding(self) -> bool {
        self == SyntaxKind::ValBind
    }

    /// The fixed source text of punctuation and keyword kinds.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::UnderscoreToken => "_",
            SyntaxKind::HashToken => "#",
            SyntaxKind::ValKeyword => "val",
            SyntaxKind::LazyKeyword => "lazy",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::EndKeyword => "end",
            _ => return None,
        };
        Some(text)
    }

    /// Map a reserved word to its keyword kind.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "val" => SyntaxKind::ValKeyword,
            "lazy" => SyntaxKind::LazyKeyword,
            "let" => SyntaxKind::LetKeyword,
            "in" => SyntaxKind::InKeyword,
            "end" => SyntaxKind::EndKeyword,
            _ => return None,
        };
        Some(kind)
    }
}
