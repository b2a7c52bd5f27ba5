use std::fmt::{self, Display, Formatter};

use scanner::{format_number, Token};

/// A parsed expression. Strict ownership tree: every node exclusively owns
/// its children and the whole tree is dropped with the root.
#[derive(Debug, PartialEq)]
pub enum Expr<'a> {
    Grouping(Box<Expr<'a>>),
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
    Literal(LiteralValue<'a>),
}

/// Canonical parenthesized rendering, e.g. `(group (MINUS 1.0))`.
impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Grouping(expression) => {
                write!(f, "(group {expression})")
            }
            // The operator prints by its kind name (MINUS, BANG)
            Expr::Unary { operator, right } => {
                write!(f, "({} {right})", operator.data)
            }
            Expr::Literal(value) => {
                write!(f, "{value}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Number(f64),
    Str(&'a str),
    Boolean(bool),
    Nil,
}

impl Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{}", format_number(*n)),
            LiteralValue::Str(s) => write!(f, "{s}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}
