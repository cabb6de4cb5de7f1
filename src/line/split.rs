//! Physical line splitting and ingestion.

use std::borrow::Cow;

use memchr::memchr2;

use crate::escape::escape_text;

/// Iterator over the physical lines of a changelog.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing separator does
/// not produce an extra empty line.
///
/// # Example
/// ```
/// use changelog_html::line::Lines;
///
/// let lines: Vec<_> = Lines::new("a\r\nb\rc\n").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    /// Create a new line iterator.
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        match memchr2(b'\n', b'\r', bytes) {
            Some(end) => {
                let line = &self.rest[..end];
                let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// One physical line after trimming and escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogLine<'a> {
    text: Cow<'a, str>,
}

impl<'a> ChangelogLine<'a> {
    /// Trim surrounding whitespace, then escape once.
    ///
    /// Leading whitespace goes too, so indented continuation lines arrive
    /// flush left.
    pub fn ingest(raw: &'a str) -> Self {
        Self {
            text: escape_text(raw.trim()),
        }
    }

    /// The escaped text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True for lines that were empty or whitespace only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<&str> {
        Lines::new(input).collect()
    }

    #[test]
    fn test_split_lf() {
        assert_eq!(lines("a\nb\n"), ["a", "b"]);
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(lines("a\r\nb\r\n"), ["a", "b"]);
    }

    #[test]
    fn test_split_lone_cr() {
        assert_eq!(lines("a\rb"), ["a", "b"]);
    }

    #[test]
    fn test_split_no_trailing_newline() {
        assert_eq!(lines("a\nb"), ["a", "b"]);
    }

    #[test]
    fn test_split_keeps_blank_lines() {
        assert_eq!(lines("a\n\n\nb"), ["a", "", "", "b"]);
        assert_eq!(lines("\r\n\r\n"), ["", ""]);
    }

    #[test]
    fn test_split_empty() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_ingest_trims_both_sides() {
        let line = ChangelogLine::ingest("   continued text \t");
        assert_eq!(line.as_str(), "continued text");
    }

    #[test]
    fn test_ingest_escapes() {
        let line = ChangelogLine::ingest("* Use <b> & \"quotes\"");
        assert_eq!(line.as_str(), "* Use &lt;b&gt; &amp; &quot;quotes&quot;");
    }

    #[test]
    fn test_ingest_blank() {
        assert!(ChangelogLine::ingest(" \t ").is_blank());
        assert!(!ChangelogLine::ingest("x").is_blank());
    }
}
