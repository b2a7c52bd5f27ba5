use std::{
    fmt::{Display, Formatter},
    str::Chars,
};

/// 1-based source line. Incremented by [`Cursor`] whenever a newline is
/// consumed, so a cursor's line is always the line of the *next* character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line(pub usize);

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cloneable character cursor over borrowed source text.
///
/// Cloning is cheap (a `Chars` iterator plus a line counter), which is what
/// makes zero-copy lexemes possible: the scanner clones the cursor at the
/// start of a token and later calls [`Cursor::slice_until`] with the
/// advanced cursor to get the exact source slice back.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    line: Line,
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The full source is usually too verbose to print
        f.debug_struct("Cursor")
            .field("line", &self.line)
            .field("rest", &self.as_str())
            .finish()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), line: Line(1) }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Remaining (not yet consumed) source.
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }

    /// Byte offset of the next character within the full source.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Source text between `self` (inclusive) and `end` (exclusive). Both
    /// cursors must come from the same source and `end` must not be behind
    /// `self`.
    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        assert!(std::ptr::eq(self.source, end.source));
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line.0 += 1;
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_until() {
        let mut cursor: Cursor = "ab\ncd".into();

        cursor.next(); // 'a'
        let start = cursor.clone();
        cursor.next(); // 'b'
        cursor.next(); // '\n'
        cursor.next(); // 'c'

        assert_eq!(start.slice_until(&cursor), "b\nc");
        assert_eq!(start.slice_until(&start), "");
    }

    #[test]
    fn line_tracking() {
        let mut cursor = Cursor::new("a\nb\n\nc");

        assert_eq!(cursor.line(), Line(1));
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.line(), Line(1));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(2));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(4));
        assert_eq!(cursor.next(), Some('c'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.line(), Line(4));
    }

    #[test]
    fn peeking_does_not_advance() {
        let mut cursor = Cursor::new("ab");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_next(), Some('b'));
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);

        let empty = Cursor::new("");
        assert_eq!(empty.peek(), None);
        assert_eq!(empty.peek_next(), None);
        assert_eq!(empty.line(), Line(1));
    }
}
