//! Runs a front-end mode over a source string.
//!
//! The caller supplies both output sinks, so the binary can pass real
//! stdout/stderr while tests capture `Vec<u8>`s. Token and expression output
//! only ever goes to `out`, diagnostics only to `err`.

use std::io::Write;

use parser::Parser;
use scanner::{TokenData, TokenStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tokenize,
    Parse,
}

/// What the run means for the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Success,
    /// A lexical or syntax error occurred; the conventional data-error
    /// status (sysexits EX_DATAERR).
    StaticError,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::StaticError => 65,
        }
    }
}

pub fn run_source(
    source: &str,
    mode: Mode,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<Outcome> {
    log::debug!("Running {mode:?} over {} bytes of source", source.len());
    match mode {
        Mode::Tokenize => tokenize(source, out, err),
        Mode::Parse => parse(source, out, err),
    }
}

/// Drains the whole token stream, printing one `KIND lexeme literal` line
/// per token (always ending with the EOF line) and each diagnostic as it is
/// produced. Lexical errors don't stop the drain; they only fail the
/// outcome.
fn tokenize(
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<Outcome> {
    let mut stream = TokenStream::new(source);

    while let Some(token) = stream.next() {
        for error in stream.take_errors() {
            writeln!(err, "{error}")?;
        }
        // Error sentinels have no token line of their own
        if token.data != TokenData::None {
            writeln!(out, "{token}")?;
        }
    }

    Ok(if stream.had_error() { Outcome::StaticError } else { Outcome::Success })
}

/// Parses a single expression and prints its canonical rendering. On a
/// syntax error nothing is printed to `out` and a single `Error:` line goes
/// to `err`.
fn parse(source: &str, out: &mut impl Write, err: &mut impl Write) -> std::io::Result<Outcome> {
    let mut parser = Parser::new(TokenStream::new(source));

    match parser.parse() {
        Ok(expr) => {
            // A lexical error in the lookahead past the expression still
            // fails the run even though the parse itself succeeded
            if parser.had_scan_error() {
                for error in parser.take_scan_errors() {
                    writeln!(err, "{error}")?;
                }
                return Ok(Outcome::StaticError);
            }
            writeln!(out, "{expr}")?;
            Ok(Outcome::Success)
        }
        Err(error) => {
            writeln!(err, "Error: {error}")?;
            Ok(Outcome::StaticError)
        }
    }
}
