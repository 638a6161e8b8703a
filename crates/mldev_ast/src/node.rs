//! AST node definitions for value bindings and the trees they own.
//!
//! Nodes live in an `AstArena` and refer to their children through arena
//! references. Every child has exactly one parent, so a tree is released as a
//! whole together with its arena.

use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;
use mldev_core::intern::InternedString;
use mldev_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range.
    pub range: TextRange,
    pub flags: NodeFlags,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Names and literals
// ============================================================================

#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    /// The interned text of this identifier.
    pub text: InternedString,
    /// The identifier as written, kept for printing without an interner.
    pub text_name: String,
}

/// The lexical class of a special constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Real,
    String,
    Char,
}

impl LiteralKind {
    /// The token kind the scanner assigns to literals of this class.
    pub fn token_kind(self) -> SyntaxKind {
        match self {
            LiteralKind::Int => SyntaxKind::IntLiteral,
            LiteralKind::Real => SyntaxKind::RealLiteral,
            LiteralKind::String => SyntaxKind::StringLiteral,
            LiteralKind::Char => SyntaxKind::CharLiteral,
        }
    }
}

/// A special constant, stored with its exact source text (`42`, `#"a"`).
#[derive(Debug)]
pub struct Literal<'a> {
    pub data: NodeData,
    pub kind: LiteralKind,
    pub text: &'a str,
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug)]
pub enum Pat<'a> {
    /// `_`
    Wildcard(NodeData),
    Var(Identifier),
    Constant(Literal<'a>),
    Tuple(TuplePat<'a>),
    Con(ConPat<'a>),
}

/// `(p1, ..., pn)`; the unit pattern `()` has no elements.
#[derive(Debug)]
pub struct TuplePat<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Pat<'a>>,
}

/// A constructor applied to an argument pattern, e.g. `SOME x`.
#[derive(Debug)]
pub struct ConPat<'a> {
    pub data: NodeData,
    pub constructor: Identifier,
    pub argument: &'a Pat<'a>,
}

impl<'a> Pat<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Pat::Wildcard(data) => data,
            Pat::Var(n) => &n.data,
            Pat::Constant(n) => &n.data,
            Pat::Tuple(n) => &n.data,
            Pat::Con(n) => &n.data,
        }
    }

    /// The node kind. A variable pattern is `VarPat`; its identifier keeps
    /// the `Identifier` token kind.
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Pat::Var(_) => SyntaxKind::VarPat,
            _ => self.data().kind,
        }
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.data().range
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Exp<'a> {
    Var(Identifier),
    Constant(Literal<'a>),
    Tuple(TupleExp<'a>),
    App(AppExp<'a>),
    Let(LetExp<'a>),
}

#[derive(Debug)]
pub struct TupleExp<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Exp<'a>>,
}

/// Function application by juxtaposition: `function argument`.
#[derive(Debug)]
pub struct AppExp<'a> {
    pub data: NodeData,
    pub function: &'a Exp<'a>,
    pub argument: &'a Exp<'a>,
}

/// `let <bindings> in <body> end`
#[derive(Debug)]
pub struct LetExp<'a> {
    pub data: NodeData,
    pub bindings: NodeList<'a, Bind<'a>>,
    pub body: &'a Exp<'a>,
}

impl<'a> Exp<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Exp::Var(n) => &n.data,
            Exp::Constant(n) => &n.data,
            Exp::Tuple(n) => &n.data,
            Exp::App(n) => &n.data,
            Exp::Let(n) => &n.data,
        }
    }

    /// The node kind; `VarExp` for a variable.
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Exp::Var(_) => SyntaxKind::VarExp,
            _ => self.data().kind,
        }
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.data().range
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// A binding. Value bindings are the only variant so far; passes that consume
/// bindings match on this enum exhaustively.
#[derive(Debug)]
pub enum Bind<'a> {
    Val(ValBind<'a>),
}

/// A value binding `pat = exp`, optionally lazy (`val lazy pat = exp`).
///
/// The pattern and expression are complete subtrees when the binding is
/// built, and the binding is their only parent. No validation of either
/// subtree happens here; whatever produced them is responsible for that.
#[derive(Debug)]
pub struct ValBind<'a> {
    pub data: NodeData,
    pub pat: &'a Pat<'a>,
    pub exp: &'a Exp<'a>,
    /// Evaluation of `exp` is deferred until the bound value is demanded.
    pub lazy: bool,
}

impl<'a> ValBind<'a> {
    /// A strict binding of `pat` to `exp`.
    pub fn new(pat: &'a Pat<'a>, exp: &'a Exp<'a>) -> Self {
        Self::with_lazy(pat, exp, false)
    }

    /// A binding whose laziness is given explicitly. The node's range spans
    /// from the pattern to the end of the expression.
    pub fn with_lazy(pat: &'a Pat<'a>, exp: &'a Exp<'a>, lazy: bool) -> Self {
        let range = pat.range().cover(exp.range());
        Self {
            data: NodeData::new(SyntaxKind::ValBind, range.pos, range.end),
            pat,
            exp,
            lazy,
        }
    }
}

impl<'a> From<ValBind<'a>> for Bind<'a> {
    fn from(bind: ValBind<'a>) -> Self {
        Bind::Val(bind)
    }
}

impl<'a> Bind<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Bind::Val(n) => &n.data,
        }
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.data().range
    }

    /// The pattern on the left of the binding.
    pub fn pat(&self) -> &'a Pat<'a> {
        match self {
            Bind::Val(n) => n.pat,
        }
    }

    /// The expression on the right of the binding.
    pub fn exp(&self) -> &'a Exp<'a> {
        match self {
            Bind::Val(n) => n.exp,
        }
    }

    pub fn is_lazy(&self) -> bool {
        match self {
            Bind::Val(n) => n.lazy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mldev_core::{AstArena, StringInterner};

    fn ident(interner: &StringInterner, name: &str, pos: u32) -> Identifier {
        Identifier {
            data: NodeData::new(SyntaxKind::Identifier, pos, pos + name.len() as u32),
            text: interner.intern(name),
            text_name: name.to_string(),
        }
    }

    #[test]
    fn test_val_bind_defaults_to_strict() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        // val x = y
        let pat: &Pat = arena.alloc(Pat::Var(ident(&interner, "x", 4)));
        let exp: &Exp = arena.alloc(Exp::Var(ident(&interner, "y", 8)));

        let bind = ValBind::new(pat, exp);
        assert!(!bind.lazy);
        assert!(std::ptr::eq(bind.pat, pat));
        assert!(std::ptr::eq(bind.exp, exp));
        assert_eq!(bind.data.kind, SyntaxKind::ValBind);
        assert_eq!(bind.data.range, TextRange::new(4, 9));
    }

    #[test]
    fn test_val_bind_with_lazy() {
        let arena = AstArena::new();
        let pat: &Pat = arena.alloc(Pat::Wildcard(NodeData::new(SyntaxKind::WildcardPat, 9, 10)));
        let exp: &Exp = arena.alloc(Exp::Constant(Literal {
            data: NodeData::new(SyntaxKind::ConstantExp, 13, 17),
            kind: LiteralKind::Char,
            text: arena.alloc_str("#\"a\""),
        }));

        let lazy = ValBind::with_lazy(pat, exp, true);
        assert!(lazy.lazy);
        assert!(std::ptr::eq(lazy.pat, pat));
        assert!(std::ptr::eq(lazy.exp, exp));

        let strict = ValBind::with_lazy(pat, exp, false);
        assert!(!strict.lazy);
    }

    #[test]
    fn test_bind_accessors_delegate_to_variant() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let pat: &Pat = arena.alloc(Pat::Var(ident(&interner, "xs", 0)));
        let exp: &Exp = arena.alloc(Exp::Var(ident(&interner, "ys", 5)));

        let bind: Bind = ValBind::with_lazy(pat, exp, true).into();
        assert!(bind.is_lazy());
        assert!(std::ptr::eq(bind.pat(), pat));
        assert!(std::ptr::eq(bind.exp(), exp));
        assert_eq!(bind.range(), TextRange::new(0, 7));
        assert_eq!(bind.pat().kind(), SyntaxKind::VarPat);
        assert!(bind.pat().kind().is_pattern());
        assert_eq!(bind.exp().kind(), SyntaxKind::VarExp);
        assert!(bind.exp().kind().is_expression());
        assert_eq!(bind.pat().data().kind, SyntaxKind::Identifier);
    }

    #[test]
    fn test_literal_kind_maps_to_token() {
        assert_eq!(LiteralKind::Char.token_kind(), SyntaxKind::CharLiteral);
        assert_eq!(LiteralKind::Int.token_kind(), SyntaxKind::IntLiteral);
    }
}
