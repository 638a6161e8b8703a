//! mldev_nodebuilder: Arena construction of binding trees.
//!
//! `NodeBuilder` is the factory a parser reduces into: it creates patterns
//! and expressions with their source ranges, and moves each child into the
//! arena when its parent is built. A node therefore always has exactly one
//! parent, and a finished tree is released together with its arena.

use mldev_ast::{
    AppExp, Bind, ConPat, Exp, Identifier, LetExp, Literal, LiteralKind, NodeData, NodeFlags,
    Pat, SyntaxKind, TupleExp, TuplePat, ValBind,
};
use mldev_core::text::TextRange;
use mldev_core::{AstArena, StringInterner};

pub struct NodeBuilder<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    /// Flags added to every node this builder creates.
    flags: NodeFlags,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            interner,
            flags: NodeFlags::NONE,
        }
    }

    /// A builder for trees that have no source text, such as bindings
    /// generated by a desugaring pass. Every node is flagged `SYNTHESIZED`.
    pub fn synthesized(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            interner,
            flags: NodeFlags::SYNTHESIZED,
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a AstArena {
        self.arena
    }

    fn node_data(&self, kind: SyntaxKind, range: TextRange) -> NodeData {
        NodeData::new(kind, range.pos, range.end).with_flags(self.flags)
    }

    fn token_range(pos: u32, text: &str) -> TextRange {
        TextRange::new(pos, pos + text.chars().count() as u32)
    }

    // -- Names and literals --

    /// An identifier starting at `pos`.
    pub fn create_identifier(&self, name: &str, pos: u32) -> Identifier {
        Identifier {
            data: self.node_data(SyntaxKind::Identifier, Self::token_range(pos, name)),
            text: self.interner.intern(name),
            text_name: name.to_string(),
        }
    }

    /// A special constant with its exact source text, e.g. `#"a"` or `42`.
    pub fn create_literal(&self, kind: LiteralKind, text: &str, pos: u32) -> Literal<'a> {
        Literal {
            data: self.node_data(kind.token_kind(), Self::token_range(pos, text)),
            kind,
            text: self.arena.alloc_str(text),
        }
    }

    // -- Patterns --

    pub fn create_wildcard_pat(&self, pos: u32) -> Pat<'a> {
        Pat::Wildcard(self.node_data(SyntaxKind::WildcardPat, TextRange::new(pos, pos + 1)))
    }

    pub fn create_var_pat(&self, name: &str, pos: u32) -> Pat<'a> {
        Pat::Var(self.create_identifier(name, pos))
    }

    pub fn create_constant_pat(&self, kind: LiteralKind, text: &str, pos: u32) -> Pat<'a> {
        let mut literal = self.create_literal(kind, text, pos);
        literal.data.kind = SyntaxKind::ConstantPat;
        Pat::Constant(literal)
    }

    /// `(p1, ..., pn)` spanning `pos..end`, parentheses included.
    pub fn create_tuple_pat(&self, elements: Vec<Pat<'a>>, pos: u32, end: u32) -> Pat<'a> {
        Pat::Tuple(TuplePat {
            data: self.node_data(SyntaxKind::TuplePat, TextRange::new(pos, end)),
            elements: self.arena.alloc_slice(elements),
        })
    }

    /// A constructor applied to a pattern: `SOME x`.
    pub fn create_con_pat(&self, mut constructor: Identifier, argument: Pat<'a>) -> Pat<'a> {
        constructor.data.flags |= NodeFlags::CONSTRUCTOR;
        let range = constructor.data.range.cover(argument.range());
        Pat::Con(ConPat {
            data: self.node_data(SyntaxKind::ConPat, range),
            constructor,
            argument: self.arena.alloc(argument),
        })
    }

    // -- Expressions --

    pub fn create_var_exp(&self, name: &str, pos: u32) -> Exp<'a> {
        Exp::Var(self.create_identifier(name, pos))
    }

    pub fn create_constant_exp(&self, kind: LiteralKind, text: &str, pos: u32) -> Exp<'a> {
        let mut literal = self.create_literal(kind, text, pos);
        literal.data.kind = SyntaxKind::ConstantExp;
        Exp::Constant(literal)
    }

    pub fn create_tuple_exp(&self, elements: Vec<Exp<'a>>, pos: u32, end: u32) -> Exp<'a> {
        Exp::Tuple(TupleExp {
            data: self.node_data(SyntaxKind::TupleExp, TextRange::new(pos, end)),
            elements: self.arena.alloc_slice(elements),
        })
    }

    /// `function argument`; application is left-nested, so `f x y` is
    /// `create_app_exp(create_app_exp(f, x), y)`.
    pub fn create_app_exp(&self, function: Exp<'a>, argument: Exp<'a>) -> Exp<'a> {
        let range = function.range().cover(argument.range());
        Exp::App(AppExp {
            data: self.node_data(SyntaxKind::AppExp, range),
            function: self.arena.alloc(function),
            argument: self.arena.alloc(argument),
        })
    }

    /// `let <bindings> in <body> end` spanning `pos..end`.
    pub fn create_let_exp(
        &self,
        bindings: Vec<Bind<'a>>,
        body: Exp<'a>,
        pos: u32,
        end: u32,
    ) -> Exp<'a> {
        Exp::Let(LetExp {
            data: self.node_data(SyntaxKind::LetExp, TextRange::new(pos, end)),
            bindings: self.arena.alloc_slice(bindings),
            body: self.arena.alloc(body),
        })
    }

    // -- Bindings --

    /// Build the value binding `pat = exp`.
    ///
    /// `pat` and `exp` move into the arena and become the binding's children.
    /// Nothing about either subtree is checked. The binding spans from the
    /// start of the pattern to the end of the expression.
    ///
    /// # Example
    /// ```
    /// use mldev_core::{AstArena, StringInterner};
    /// use mldev_nodebuilder::NodeBuilder;
    /// let arena = AstArena::new();
    /// let interner = StringInterner::new();
    /// let builder = NodeBuilder::new(&arena, &interner);
    /// // x = y
    /// let pat = builder.create_var_pat("x", 0);
    /// let exp = builder.create_var_exp("y", 4);
    /// let bind = builder.create_val_bind(pat, exp, false);
    /// assert!(!bind.is_lazy());
    /// assert_eq!(bind.range().end, 5);
    /// ```
    pub fn create_val_bind(&self, pat: Pat<'a>, exp: Exp<'a>, lazy: bool) -> Bind<'a> {
        let pat = self.arena.alloc(pat);
        let exp = self.arena.alloc(exp);
        let mut bind = ValBind::with_lazy(pat, exp, lazy);
        bind.data.flags |= self.flags;
        Bind::Val(bind)
    }

    /// Like `create_val_bind`, but the binding starts at `pos`, which is where
    /// the leading `val` (or `lazy`) keyword was read.
    pub fn create_val_bind_at(
        &self,
        pos: u32,
        pat: Pat<'a>,
        exp: Exp<'a>,
        lazy: bool,
    ) -> Bind<'a> {
        let mut bind = self.create_val_bind(pat, exp, lazy);
        let Bind::Val(ref mut node) = bind;
        node.data.range = TextRange::new(pos.min(node.data.range.pos), node.data.range.end);
        bind
    }

    /// Move a finished binding into the arena.
    pub fn alloc_bind(&self, bind: Bind<'a>) -> &'a Bind<'a> {
        self.arena.alloc(bind)
    }
}
