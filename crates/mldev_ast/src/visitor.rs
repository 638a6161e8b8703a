//! AST visitor trait for traversing binding trees.
//!
//! Provides an `AstVisitor` trait for customizable traversal and
//! `for_each_child_of_bind` for one-level iteration over a binding's children.

use crate::node::*;
use mldev_core::intern::InternedString;

/// A visitor that traverses the AST. Implement this trait to perform
/// operations on each node kind. Default implementations walk into children.
pub trait AstVisitor<'a> {
    fn visit_bind(&mut self, bind: &Bind<'a>) {
        match bind {
            Bind::Val(n) => self.visit_val_bind(n),
        }
    }

    fn visit_val_bind(&mut self, node: &ValBind<'a>) {
        self.visit_pat(node.pat);
        self.visit_exp(node.exp);
    }

    // -- Patterns --

    fn visit_pat(&mut self, pat: &Pat<'a>) {
        match pat {
            Pat::Wildcard(_) => {}
            Pat::Var(n) => self.visit_identifier(n),
            Pat::Constant(n) => self.visit_literal(n),
            Pat::Tuple(n) => {
                for element in n.elements.iter() {
                    self.visit_pat(element);
                }
            }
            Pat::Con(n) => {
                self.visit_identifier(&n.constructor);
                self.visit_pat(n.argument);
            }
        }
    }

    // -- Expressions --

    fn visit_exp(&mut self, exp: &Exp<'a>) {
        match exp {
            Exp::Var(n) => self.visit_identifier(n),
            Exp::Constant(n) => self.visit_literal(n),
            Exp::Tuple(n) => {
                for element in n.elements.iter() {
                    self.visit_exp(element);
                }
            }
            Exp::App(n) => {
                self.visit_exp(n.function);
                self.visit_exp(n.argument);
            }
            Exp::Let(n) => self.visit_let_exp(n),
        }
    }

    fn visit_let_exp(&mut self, node: &LetExp<'a>) {
        for bind in node.bindings.iter() {
            self.visit_bind(bind);
        }
        self.visit_exp(node.body);
    }

    // -- Leaves --

    fn visit_identifier(&mut self, _node: &Identifier) {}

    fn visit_literal(&mut self, _node: &Literal<'a>) {}
}

/// A direct child of a binding.
#[derive(Debug, Clone, Copy)]
pub enum BindChild<'a> {
    Pat(&'a Pat<'a>),
    Exp(&'a Exp<'a>),
}

/// Call `f` on each direct child of `bind`, pattern first.
pub fn for_each_child_of_bind<'a>(bind: &Bind<'a>, mut f: impl FnMut(BindChild<'a>)) {
    match bind {
        Bind::Val(n) => {
            f(BindChild::Pat(n.pat));
            f(BindChild::Exp(n.exp));
        }
    }
}

/// Names of the variables a binding introduces, in source order.
///
/// Only the pattern side binds; constructor names are not variables, and
/// bindings nested in the expression are local to it.
pub fn bound_names(bind: &Bind<'_>) -> Vec<InternedString> {
    struct Collector {
        names: Vec<InternedString>,
    }

    impl<'a> AstVisitor<'a> for Collector {
        fn visit_pat(&mut self, pat: &Pat<'a>) {
            match pat {
                Pat::Var(n) => self.names.push(n.text),
                Pat::Con(n) => self.visit_pat(n.argument),
                Pat::Tuple(n) => {
                    for element in n.elements.iter() {
                        self.visit_pat(element);
                    }
                }
                Pat::Wildcard(_) | Pat::Constant(_) => {}
            }
        }
    }

    let mut collector = Collector { names: Vec::new() };
    collector.visit_pat(bind.pat());
    collector.names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax_kind::SyntaxKind;
    use mldev_core::{AstArena, StringInterner};

    fn ident(interner: &StringInterner, name: &str) -> Identifier {
        Identifier {
            data: NodeData::new(SyntaxKind::Identifier, 0, name.len() as u32),
            text: interner.intern(name),
            text_name: name.to_string(),
        }
    }

    /// val (SOME a, _, b) = let val c = d in f c end
    fn sample<'a>(arena: &'a AstArena, interner: &StringInterner) -> &'a Bind<'a> {
        let some_a: Pat = Pat::Con(ConPat {
            data: NodeData::new(SyntaxKind::ConPat, 0, 0),
            constructor: ident(interner, "SOME"),
            argument: arena.alloc(Pat::Var(ident(interner, "a"))),
        });
        let pat: &Pat = arena.alloc(Pat::Tuple(TuplePat {
            data: NodeData::new(SyntaxKind::TuplePat, 0, 0),
            elements: arena.alloc_slice(vec![
                some_a,
                Pat::Wildcard(NodeData::new(SyntaxKind::WildcardPat, 0, 0)),
                Pat::Var(ident(interner, "b")),
            ]),
        }));

        let inner: Bind = ValBind::new(
            arena.alloc(Pat::Var(ident(interner, "c"))),
            arena.alloc(Exp::Var(ident(interner, "d"))),
        )
        .into();
        let body: &Exp = arena.alloc(Exp::App(AppExp {
            data: NodeData::new(SyntaxKind::AppExp, 0, 0),
            function: arena.alloc(Exp::Var(ident(interner, "f"))),
            argument: arena.alloc(Exp::Var(ident(interner, "c"))),
        }));
        let exp: &Exp = arena.alloc(Exp::Let(LetExp {
            data: NodeData::new(SyntaxKind::LetExp, 0, 0),
            bindings: arena.alloc_slice(vec![inner]),
            body,
        }));
        arena.alloc(ValBind::new(pat, exp).into())
    }

    #[test]
    fn test_default_walk_visits_every_identifier() {
        struct Names(Vec<String>);
        impl<'a> AstVisitor<'a> for Names {
            fn visit_identifier(&mut self, node: &Identifier) {
                self.0.push(node.text_name.clone());
            }
        }

        let arena = AstArena::new();
        let interner = StringInterner::new();
        let bind = sample(&arena, &interner);

        let mut names = Names(Vec::new());
        names.visit_bind(bind);
        assert_eq!(names.0, vec!["SOME", "a", "b", "c", "d", "f", "c"]);
    }

    #[test]
    fn test_bound_names_skips_constructors_and_nested_bindings() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let bind = sample(&arena, &interner);

        let names: Vec<&str> = bound_names(bind)
            .into_iter()
            .map(|name| interner.resolve(name))
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_for_each_child_of_bind_yields_pattern_then_expression() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let bind = sample(&arena, &interner);

        let mut kinds = Vec::new();
        for_each_child_of_bind(bind, |child| match child {
            BindChild::Pat(p) => kinds.push(p.kind()),
            BindChild::Exp(e) => kinds.push(e.kind()),
        });
        assert_eq!(kinds, vec![SyntaxKind::TuplePat, SyntaxKind::LetExp]);
    }
}
