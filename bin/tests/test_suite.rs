//! End-to-end suite over the two front-end modes. Expected output is
//! embedded in the sources as comments, the way the upstream Lox test
//! suite does it:
//!
//! - `// expect: <line>` — a line that must appear on stdout
//! - `// expect-error: <line>` — a line that must appear on stderr
//!
//! Expectation comments are ordinary line comments to the scanner, so they
//! never show up in the token output themselves.

use driver::{Mode, Outcome};
use itertools::Itertools;
use lazy_regex::regex;

use pretty_assertions::assert_eq;

#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn lox_expect(mode: Mode, code: &str) {
    let output_regex = regex!(r"// expect: (.*)");
    let error_regex = regex!(r"// expect-error: (.*)");

    let mut expected_output = vec![];
    let mut expected_errors = vec![];
    for line in code.lines() {
        if let Some(cap) = error_regex.captures(line) {
            expected_errors.push(cap[1].to_string());
        } else if let Some(cap) = output_regex.captures(line) {
            expected_output.push(cap[1].to_string());
        }
    }

    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = driver::run_source(code, mode, &mut out, &mut err).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap().lines().collect_vec(),
        expected_output,
        "Actual stdout (left) does not match expectations (right)"
    );
    assert_eq!(
        String::from_utf8(err).unwrap().lines().collect_vec(),
        expected_errors,
        "Actual stderr (left) does not match expectations (right)"
    );

    let expected_outcome =
        if expected_errors.is_empty() { Outcome::Success } else { Outcome::StaticError };
    assert_eq!(outcome, expected_outcome);
}

#[test]
fn tokenize_punctuation_and_literals() {
    lox_expect(
        Mode::Tokenize,
        "\
(1) \"hi\"
// expect: LEFT_PAREN ( null
// expect: NUMBER 1 1.0
// expect: RIGHT_PAREN ) null
// expect: STRING \"hi\" hi
// expect: EOF  null
",
    );
}

#[test]
fn tokenize_operators() {
    lox_expect(
        Mode::Tokenize,
        "\
!= == <= >= ! = < >
// expect: BANG_EQUAL != null
// expect: EQUAL_EQUAL == null
// expect: LESS_EQUAL <= null
// expect: GREATER_EQUAL >= null
// expect: BANG ! null
// expect: EQUAL = null
// expect: LESS < null
// expect: GREATER > null
// expect: EOF  null
",
    );
}

#[test]
fn tokenize_keywords_and_identifiers() {
    lox_expect(
        Mode::Tokenize,
        "\
var iffy = nil
// expect: VAR var null
// expect: IDENTIFIER iffy null
// expect: EQUAL = null
// expect: NIL nil null
// expect: EOF  null
",
    );
}

#[test]
fn tokenize_number_with_trailing_dot() {
    lox_expect(
        Mode::Tokenize,
        "\
12.
// expect: NUMBER 12. 12.0
// expect: EOF  null
",
    );
}

#[test]
fn tokenize_whitespace_only() {
    lox_expect(Mode::Tokenize, " \t\n\n// expect: EOF  null\n");
}

#[test]
fn tokenize_unexpected_character() {
    lox_expect(
        Mode::Tokenize,
        "\
@
// expect-error: [line 1] Error: Unexpected character: @
// expect: EOF  null
",
    );
}

#[test]
fn tokenize_unterminated_string() {
    // The open quote has to come last: it swallows the rest of the input
    lox_expect(
        Mode::Tokenize,
        "\
// expect-error: [line 3] Error: Unterminated string.
// expect: EOF  null
\"abc",
    );
}

#[test]
fn parse_group() {
    lox_expect(
        Mode::Parse,
        "\
(nil)
// expect: (group nil)
",
    );
}

#[test]
fn parse_literals() {
    lox_expect(Mode::Parse, "true\n// expect: true\n");
    lox_expect(Mode::Parse, "123.45\n// expect: 123.45\n");
    lox_expect(Mode::Parse, "\"hello\"\n// expect: hello\n");
}

#[test]
fn parse_missing_closing_paren() {
    lox_expect(
        Mode::Parse,
        "\
(1
// expect-error: Error: Expected RIGHT_PAREN, found EOF
",
    );
}

#[test]
fn parse_no_expression() {
    lox_expect(
        Mode::Parse,
        "\
;
// expect-error: Error: Expected expression, found SEMICOLON
",
    );
}
