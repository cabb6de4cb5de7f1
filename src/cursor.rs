//! Byte cursor over a single ingested line.
//!
//! Classifiers only ever look for ASCII punctuation and digits, so every
//! position the cursor stops at is a valid `str` boundary.

/// A cursor for byte-by-byte scanning of one line.
///
/// # Example
/// ```
/// use changelog_html::cursor::Cursor;
///
/// let mut cursor = Cursor::new("* [B#42] text");
/// assert!(cursor.eat("* [B#"));
/// assert_eq!(cursor.take_digits(), Some("42"));
/// assert!(cursor.eat("] "));
/// assert_eq!(cursor.rest(), "text");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of a line.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of the line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Check if the current byte equals `b`.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume `prefix` if the remaining input starts with it.
    #[inline]
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume a non-empty run of ASCII digits.
    pub fn take_digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos > start {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    /// Everything from the cursor to the end of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}
