//! mldev_printer: Binding trees back to Standard ML text.
//!
//! Prints `val` bindings with their patterns and expressions. Application
//! arguments that are themselves applications or `let` expressions are
//! parenthesized so the output reads back as the same tree.

use mldev_ast::node::*;
use mldev_ast::syntax_kind::SyntaxKind;
use mldev_core::intern::StringInterner;

/// Options for the printer.
pub struct PrinterOptions {
    /// Print `let` expressions over several lines instead of one.
    pub multi_line_let: bool,
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            multi_line_let: false,
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

/// The printer converts binding trees to text.
pub struct Printer<'i> {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
    interner: &'i StringInterner,
}

impl<'i> Printer<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self {
            output: String::with_capacity(256),
            indent_level: 0,
            options: PrinterOptions::default(),
            interner,
        }
    }

    pub fn with_options(interner: &'i StringInterner, options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(256),
            indent_level: 0,
            options,
            interner,
        }
    }

    /// Print a binding, `val` keyword included.
    pub fn print_bind(&mut self, bind: &Bind<'_>) -> String {
        self.reset();
        self.emit_bind(bind);
        std::mem::take(&mut self.output)
    }

    /// Print a sequence of top-level bindings, one per line.
    pub fn print_binds(&mut self, binds: &[Bind<'_>]) -> String {
        self.reset();
        for (i, bind) in binds.iter().enumerate() {
            if i > 0 {
                self.write_newline();
            }
            self.emit_bind(bind);
        }
        std::mem::take(&mut self.output)
    }

    pub fn print_pat(&mut self, pat: &Pat<'_>) -> String {
        self.reset();
        self.emit_pat(pat);
        std::mem::take(&mut self.output)
    }

    pub fn print_exp(&mut self, exp: &Exp<'_>) -> String {
        self.reset();
        self.emit_exp(exp);
        std::mem::take(&mut self.output)
    }

    fn reset(&mut self) {
        self.output.clear();
        self.indent_level = 0;
    }

    // ========================================================================
    // Bindings
    // ========================================================================

    fn emit_bind(&mut self, bind: &Bind<'_>) {
        match bind {
            Bind::Val(n) => {
                self.write_keyword(SyntaxKind::ValKeyword);
                self.write(" ");
                if n.lazy {
                    self.write_keyword(SyntaxKind::LazyKeyword);
                    self.write(" ");
                }
                self.emit_pat(n.pat);
                self.write(" = ");
                self.emit_exp(n.exp);
            }
        }
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    fn emit_pat(&mut self, pat: &Pat<'_>) {
        match pat {
            Pat::Wildcard(_) => self.write("_"),
            Pat::Var(n) => self.emit_identifier(n),
            Pat::Constant(n) => self.write(n.text),
            Pat::Tuple(n) => {
                self.write("(");
                for (i, element) in n.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_pat(element);
                }
                self.write(")");
            }
            Pat::Con(n) => {
                self.emit_identifier(&n.constructor);
                self.write(" ");
                if matches!(n.argument, Pat::Con(_)) {
                    self.write("(");
                    self.emit_pat(n.argument);
                    self.write(")");
                } else {
                    self.emit_pat(n.argument);
                }
            }
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn emit_exp(&mut self, exp: &Exp<'_>) {
        match exp {
            Exp::Var(n) => self.emit_identifier(n),
            Exp::Constant(n) => self.write(n.text),
            Exp::Tuple(n) => {
                self.write("(");
                for (i, element) in n.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_exp(element);
                }
                self.write(")");
            }
            Exp::App(n) => {
                // Application associates to the left: only a `let` needs
                // parentheses in function position.
                self.emit_exp_parenthesized_if(n.function, matches!(n.function, Exp::Let(_)));
                self.write(" ");
                self.emit_exp_parenthesized_if(
                    n.argument,
                    matches!(n.argument, Exp::App(_) | Exp::Let(_)),
                );
            }
            Exp::Let(n) => self.emit_let_exp(n),
        }
    }

    fn emit_exp_parenthesized_if(&mut self, exp: &Exp<'_>, parenthesize: bool) {
        if parenthesize {
            self.write("(");
            self.emit_exp(exp);
            self.write(")");
        } else {
            self.emit_exp(exp);
        }
    }

    fn emit_let_exp(&mut self, node: &LetExp<'_>) {
        self.write_keyword(SyntaxKind::LetKeyword);
        if self.options.multi_line_let {
            self.indent_level += 1;
            for bind in node.bindings.iter() {
                self.write_newline();
                self.write_indent();
                self.emit_bind(bind);
            }
            self.indent_level -= 1;
            self.write_newline();
            self.write_indent();
            self.write_keyword(SyntaxKind::InKeyword);
            self.indent_level += 1;
            self.write_newline();
            self.write_indent();
            self.emit_exp(node.body);
            self.indent_level -= 1;
            self.write_newline();
            self.write_indent();
        } else {
            for bind in node.bindings.iter() {
                self.write(" ");
                self.emit_bind(bind);
            }
            self.write(" ");
            self.write_keyword(SyntaxKind::InKeyword);
            self.write(" ");
            self.emit_exp(node.body);
            self.write(" ");
        }
        self.write_keyword(SyntaxKind::EndKeyword);
    }

    // ========================================================================
    // Writing helpers
    // ========================================================================

    fn emit_identifier(&mut self, node: &Identifier) {
        self.output.push_str(self.interner.resolve(node.text));
    }

    fn write_keyword(&mut self, kind: SyntaxKind) {
        if let Some(text) = kind.text() {
            self.output.push_str(text);
        }
    }

    #[inline]
    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }
}
