use std::fmt::Display;

use cursor::Line;

/// One classified unit of source text.
///
/// `lexeme` is the verbatim source slice the token was scanned from (empty
/// for EOF), `line` is the line the token starts on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    pub lexeme: &'a str,
    pub line: Line,
}

impl<'a> Token<'a> {
    pub fn eof(line: Line) -> Token<'a> {
        Self { data: TokenData::Eof, lexeme: "", line }
    }

    pub fn line(&self) -> Line {
        self.line
    }
}

/// Renders the canonical `KIND lexeme literal` form, e.g. `NUMBER 12.5 12.5`
/// or `LEFT_PAREN ( null`. The literal column is `null` for everything but
/// strings and numbers.
impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.data, self.lexeme)?;
        match &self.data {
            TokenData::Str(s) => write!(f, "{s}"),
            TokenData::Number(n) => write!(f, "{}", format_number(*n)),
            _ => write!(f, "null"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, strum_macros::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenData<'a> {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    #[strum(serialize = "STRING")]
    Str(&'a str),
    Number(f64),

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
    /// Sentinel for a lexical error. Never rendered in token output; any
    /// parser that pulls one must fail.
    None,
}

/// Decimal rendering of a number literal: integral values keep one forced
/// fractional digit (`1` scans as `1.0`), everything else prints as-is.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}
