use std::collections::HashMap;

use cursor::{Cursor, Line};
use lazy_static::lazy_static;

mod token;
pub use token::{format_number, Token, TokenData};

/// A lexical diagnostic, rendered exactly as it appears on stderr.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {kind}")]
pub struct ScanError {
    pub line: Line,
    pub kind: ScanErrorKind,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorKind {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenData<'static>> = {
        use TokenData::*;
        HashMap::from([
            ("and", And),
            ("class", Class),
            ("else", Else),
            ("false", False),
            ("for", For),
            ("fun", Fun),
            ("if", If),
            ("nil", Nil),
            ("or", Or),
            ("print", Print),
            ("return", Return),
            ("super", Super),
            ("this", This),
            ("true", True),
            ("var", Var),
            ("while", While),
        ])
    };
}

/// Lazy, single-pass token source. Each `next()` call scans exactly one
/// token; nothing is buffered and the stream cannot be rewound.
///
/// Lexical errors do not stop the stream: the offending input is consumed,
/// a diagnostic is recorded, and a sentinel [`TokenData::None`] token is
/// yielded so that callers draining the stream keep going while a parser
/// pulling it fails. The stream always ends with exactly one EOF token.
#[derive(Debug)]
pub struct TokenStream<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ScanError>,
    had_error: bool,
    eof_emitted: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            had_error: false,
            eof_emitted: false,
        }
    }

    /// Line of the next character to be scanned.
    pub fn line(&self) -> Line {
        self.cursor.line()
    }

    /// Sticky: stays set once any lexical error occurred, independent of
    /// [`TokenStream::take_errors`].
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Diagnostics recorded since the last call (or since construction).
    pub fn take_errors(&mut self) -> Vec<ScanError> {
        std::mem::take(&mut self.errors)
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    fn report(&mut self, line: Line, kind: ScanErrorKind) {
        let error = ScanError { line, kind };
        log::debug!("{error}");
        self.had_error = true;
        self.errors.push(error);
    }

    /// Whitespace and `//` comments are skipped in one loop up front, so
    /// token classification below never has to re-enter itself.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\t' | '\n') => {
                    self.cursor.next();
                }
                Some('/') if self.cursor.peek_next() == Some('/') => {
                    // Stop before the newline so the arm above counts it
                    while !matches!(self.cursor.peek(), None | Some('\n')) {
                        self.cursor.next();
                    }
                }
                _ => return,
            }
        }
    }

    fn consume_if_matches(&mut self, expected: char) -> bool {
        match self.cursor.peek() {
            Some(c) if c == expected => {
                self.cursor.next();
                true
            }
            _ => false,
        }
    }

    fn token(&self, data: TokenData<'a>, start: &Cursor<'a>) -> Token<'a> {
        let token = Token { data, lexeme: start.slice_until(&self.cursor), line: start.line() };
        log::trace!("Scanned {token:?}");
        token
    }

    fn string(&mut self, start: &Cursor<'a>) -> TokenData<'a> {
        loop {
            match self.cursor.next() {
                Some('"') => {
                    let lexeme = start.slice_until(&self.cursor);
                    // Strip the quotes; embedded newlines stay verbatim
                    return TokenData::Str(&lexeme[1..lexeme.len() - 1]);
                }
                Some(_) => (),
                None => {
                    self.report(start.line(), ScanErrorKind::UnterminatedString);
                    return TokenData::None;
                }
            }
        }
    }

    fn number(&mut self, start: &Cursor<'a>) -> TokenData<'a> {
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            self.cursor.next();
        }

        if self.cursor.peek() == Some('.') {
            // The dot is part of the lexeme even when no digits follow
            // ("12." scans as one number); a second dot ends the number.
            self.cursor.next();
            while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
                self.cursor.next();
            }
        }

        let lexeme = start.slice_until(&self.cursor);
        // A digit run with at most one dot always parses
        TokenData::Number(lexeme.parse().unwrap())
    }

    fn identifier(&mut self, start: &Cursor<'a>) -> TokenData<'a> {
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.cursor.next();
        }

        let lexeme = start.slice_until(&self.cursor);
        KEYWORDS.get(lexeme).copied().unwrap_or(TokenData::Identifier)
    }
}

impl<'a> From<&'a str> for TokenStream<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted {
            return None;
        }

        self.skip_whitespace_and_comments();

        let start = self.cursor.clone();
        let c = match self.cursor.next() {
            Some(c) => c,
            None => {
                self.eof_emitted = true;
                return Some(Token::eof(self.cursor.line()));
            }
        };

        let data = match c {
            '(' => TokenData::LeftParen,
            ')' => TokenData::RightParen,
            '{' => TokenData::LeftBrace,
            '}' => TokenData::RightBrace,
            ':' => TokenData::Colon,
            ',' => TokenData::Comma,
            '.' => TokenData::Dot,
            '-' => TokenData::Minus,
            '+' => TokenData::Plus,
            ';' => TokenData::Semicolon,
            '*' => TokenData::Star,

            // A '//' comment can't reach this point, the skip loop ate it
            '/' => TokenData::Slash,

            '!' => {
                if self.consume_if_matches('=') {
                    TokenData::BangEqual
                } else {
                    TokenData::Bang
                }
            }
            '=' => {
                if self.consume_if_matches('=') {
                    TokenData::EqualEqual
                } else {
                    TokenData::Equal
                }
            }
            '<' => {
                if self.consume_if_matches('=') {
                    TokenData::LessEqual
                } else {
                    TokenData::Less
                }
            }
            '>' => {
                if self.consume_if_matches('=') {
                    TokenData::GreaterEqual
                } else {
                    TokenData::Greater
                }
            }

            '"' => self.string(&start),

            d if d.is_ascii_digit() => self.number(&start),

            a if a.is_ascii_alphabetic() || a == '_' => self.identifier(&start),

            c => {
                self.report(start.line(), ScanErrorKind::UnexpectedCharacter(c));
                TokenData::None
            }
        };

        Some(self.token(data, &start))
    }
}
