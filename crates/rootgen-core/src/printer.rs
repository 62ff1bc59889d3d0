//! C/C++ expression printer.
//!
//! Renders arena expressions as C-family source text. Integer powers use
//! the `pow(base, exp)` call form, matching what a C math library expects;
//! downstream passes may rewrite the `pow(x, 2)` idiom.

use crate::arena::ExprArena;
use crate::expr::ExprNode;
use crate::handle::ExprHandle;

/// Binding strength of a rendered node, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,
    Product,
    Unary,
    Atom,
}

/// Renders arena expressions as C source text.
#[derive(Clone, Copy, Debug, Default)]
pub struct CPrinter;

impl CPrinter {
    /// Renders `expr` as a C expression.
    #[must_use]
    pub fn print(&self, arena: &ExprArena, expr: ExprHandle) -> String {
        let mut out = String::new();
        self.write_expr(arena, expr, &mut out);
        out
    }

    fn precedence(arena: &ExprArena, expr: ExprHandle) -> Precedence {
        match arena.get(expr) {
            ExprNode::Integer(n) if n.is_negative() => Precedence::Unary,
            ExprNode::Integer(_) | ExprNode::Symbol(_) | ExprNode::Pow { .. } => Precedence::Atom,
            ExprNode::Neg(_) => Precedence::Unary,
            ExprNode::Mul(_) | ExprNode::Div { .. } => Precedence::Product,
            ExprNode::Add(_) => Precedence::Sum,
        }
    }

    fn write_expr(&self, arena: &ExprArena, expr: ExprHandle, out: &mut String) {
        match arena.get(expr) {
            ExprNode::Integer(n) => out.push_str(&n.to_string()),
            ExprNode::Symbol(id) => {
                out.push_str(arena.symbol_name(*id).unwrap_or("?"));
            }
            ExprNode::Add(args) => {
                for (i, &term) in args.iter().enumerate() {
                    let rendered = self.print(arena, term);
                    match (i, rendered.strip_prefix('-')) {
                        (0, _) => out.push_str(&rendered),
                        (_, Some(magnitude)) => {
                            out.push_str(" - ");
                            out.push_str(magnitude);
                        }
                        (_, None) => {
                            out.push_str(" + ");
                            out.push_str(&rendered);
                        }
                    }
                }
            }
            ExprNode::Mul(args) => {
                let mut factors = args.as_slice();
                if let Some((&first, rest)) = factors.split_first() {
                    if arena.get(first).as_integer().and_then(|n| n.to_i64()) == Some(-1) {
                        out.push('-');
                        factors = rest;
                    }
                }
                for (i, &factor) in factors.iter().enumerate() {
                    if i > 0 {
                        out.push('*');
                    }
                    let needs_parens = match Self::precedence(arena, factor) {
                        Precedence::Sum => true,
                        // A leading sign is only readable on the first factor.
                        Precedence::Unary => i > 0,
                        _ => false,
                    };
                    self.write_wrapped(arena, factor, needs_parens, out);
                }
            }
            ExprNode::Pow { base, exp } => {
                out.push_str("pow(");
                self.write_expr(arena, *base, out);
                out.push_str(", ");
                self.write_expr(arena, *exp, out);
                out.push(')');
            }
            ExprNode::Neg(arg) => {
                out.push('-');
                let rendered = self.print(arena, *arg);
                // `-(a + b)` and `-(-a)` keep their parentheses, `-a*b` does not.
                if Self::precedence(arena, *arg) == Precedence::Sum || rendered.starts_with('-') {
                    out.push('(');
                    out.push_str(&rendered);
                    out.push(')');
                } else {
                    out.push_str(&rendered);
                }
            }
            ExprNode::Div { num, den } => {
                let num_parens = Self::precedence(arena, *num) < Precedence::Atom;
                let den_parens = Self::precedence(arena, *den) < Precedence::Atom;
                self.write_wrapped(arena, *num, num_parens, out);
                out.push('/');
                self.write_wrapped(arena, *den, den_parens, out);
            }
        }
    }

    fn write_wrapped(&self, arena: &ExprArena, expr: ExprHandle, parens: bool, out: &mut String) {
        if parens {
            out.push('(');
            self.write_expr(arena, expr, out);
            out.push(')');
        } else {
            self.write_expr(arena, expr, out);
        }
    }
}

/// Renders `expr` with the default printer.
#[must_use]
pub fn ccode(arena: &ExprArena, expr: ExprHandle) -> String {
    CPrinter::default().print(arena, expr)
}
