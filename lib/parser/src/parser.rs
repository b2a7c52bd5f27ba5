mod expr;

pub use expr::{Expr, LiteralValue};
use scanner::{ScanError, Token, TokenData, TokenStream};

/// A grammar violation. The parser has no recovery or synchronization, so
/// the first error aborts the whole parse.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Expected expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// The lookahead was a lexical-error sentinel; carries the scanner's
    /// diagnostic.
    #[error("{}", .0.kind)]
    Lexical(ScanError),
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Recursive-descent parser with exactly one token of lookahead, primed at
/// construction. It exclusively owns its [`TokenStream`] and pulls tokens
/// strictly on demand: nothing past the lookahead is ever scanned.
///
/// The reachable grammar is literals and parenthesized groups only.
/// [`Parser::unary`] exists as an extension point but [`Parser::expression`]
/// does not route through it.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokens: TokenStream<'a>) -> Self {
        let line = tokens.line();
        let current = tokens.next().unwrap_or_else(|| Token::eof(line));
        Self { tokens, current }
    }

    /// Parses a single expression; anything after it is left unscanned.
    pub fn parse(&mut self) -> Result<Expr<'a>> {
        let expr = self.expression()?;
        log::debug!("Parsed {expr}");
        Ok(expr)
    }

    /// Whether the scanner hit a lexical error while feeding this parser.
    /// Sticky, like the underlying stream flag.
    pub fn had_scan_error(&self) -> bool {
        self.tokens.had_error()
    }

    /// Drains the scanner diagnostics recorded so far.
    pub fn take_scan_errors(&mut self) -> Vec<ScanError> {
        self.tokens.take_errors()
    }

    pub fn expression(&mut self) -> Result<Expr<'a>> {
        // TODO route this through unary() (and from there a binary
        // precedence chain) once operator expressions are wired up; until
        // then only literals and groups are reachable from here.
        self.primary()
    }

    /// Prefix `-`/`!` chains. Not reachable from [`Parser::expression`] yet,
    /// only by driving the rule directly.
    pub fn unary(&mut self) -> Result<Expr<'a>> {
        match self.current.data {
            TokenData::Minus | TokenData::Bang => {
                let operator = self.advance()?;
                let right = Box::new(self.unary()?);
                Ok(Expr::Unary { operator, right })
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr<'a>> {
        match self.current.data {
            TokenData::LeftParen => {
                self.advance()?;
                let expr = self.expression()?;
                self.consume(TokenData::RightParen)?;
                Ok(Expr::Grouping(Box::new(expr)))
            }
            TokenData::Number(_)
            | TokenData::Str(_)
            | TokenData::True
            | TokenData::False
            | TokenData::Nil => self.literal(),
            TokenData::None => Err(self.lexical_error()),
            found => Err(SyntaxError::ExpectedExpression { found: found.to_string() }),
        }
    }

    fn literal(&mut self) -> Result<Expr<'a>> {
        let value = match self.current.data {
            TokenData::Number(n) => LiteralValue::Number(n),
            TokenData::Str(s) => LiteralValue::Str(s),
            TokenData::True => LiteralValue::Boolean(true),
            TokenData::False => LiteralValue::Boolean(false),
            TokenData::Nil => LiteralValue::Nil,
            found => return Err(SyntaxError::ExpectedExpression { found: found.to_string() }),
        };
        self.advance()?;
        Ok(Expr::Literal(value))
    }

    /// Requires the lookahead to be `expected` and advances past it.
    fn consume(&mut self, expected: TokenData<'static>) -> Result<Token<'a>> {
        assert!(!matches!(expected, TokenData::Number(_) | TokenData::Str(_)));
        match self.current.data {
            TokenData::None => Err(self.lexical_error()),
            found if found == expected => self.advance(),
            found => Err(SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: found.to_string(),
            }),
        }
    }

    /// Returns the current token and pulls the next one into the lookahead.
    /// Refuses to step over a lexical-error sentinel. Past EOF the stream is
    /// exhausted and the lookahead stays EOF.
    fn advance(&mut self) -> Result<Token<'a>> {
        if let TokenData::None = self.current.data {
            return Err(self.lexical_error());
        }
        let line = self.tokens.line();
        let next = self.tokens.next().unwrap_or_else(|| Token::eof(line));
        log::trace!("Advancing, lookahead now {next:?}");
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn lexical_error(&self) -> SyntaxError {
        match self.tokens.errors().last() {
            Some(error) => SyntaxError::Lexical(error.clone()),
            // A sentinel always has a recorded diagnostic unless the caller
            // drained them already
            None => SyntaxError::ExpectedExpression { found: self.current.data.to_string() },
        }
    }
}
