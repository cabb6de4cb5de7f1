//! HTML fragment writer.
//!
//! A thin sink: the state machine decides what to emit and in which order,
//! the writer only knows the markup. Text handed to it is already escaped.

use crate::escape::escape_attr;
use crate::line::Tracker;

/// Accumulates the per-version markup of a changelog.
///
/// # Example
/// ```
/// use changelog_html::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.version_start("1.0", "2021-01-15");
/// writer.entry_start("First change");
/// writer.entry_end();
/// writer.version_end();
///
/// assert_eq!(
///     writer.into_string(),
///     "<h2>1.0 <span style=\"color: gray;\">(2021-01-15)</span></h2>\n<ul>\n  <li>First change</li>\n</ul>\n\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Markup roughly doubles short changelog lines.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len * 2),
        }
    }

    /// Write a static string.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write already-escaped text.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Changelog elements ---

    /// Version heading followed by the opening of its entry list.
    pub fn version_start(&mut self, version: &str, date: &str) {
        self.write_str("<h2>");
        self.write_text(version);
        self.write_str(" <span style=\"color: gray;\">(");
        self.write_text(date);
        self.write_str(")</span></h2>\n<ul>\n");
    }

    /// Close the entry list of a version.
    pub fn version_end(&mut self) {
        self.write_str("</ul>\n\n");
    }

    /// Open a plain entry: `  <li>text`.
    pub fn entry_start(&mut self, text: &str) {
        self.write_str("  <li>");
        self.write_text(text);
    }

    /// Open an entry prefixed with a link to its bug.
    pub fn tracked_entry_start(&mut self, tracker: Tracker, url: &str, bug_id: &str, text: &str) {
        self.write_str("  <li><a href=\"");
        self.write_text(&escape_attr(url));
        self.write_str("\" target=\"_blank\" class=\"external\">[");
        self.write_str(tracker.label());
        self.write_str(" bug ");
        self.write_text(bug_id);
        self.write_str("]</a> ");
        self.write_text(text);
    }

    /// Append a continuation line to the open entry.
    pub fn entry_continue(&mut self, text: &str) {
        self.out.push(' ');
        self.write_text(text);
    }

    /// Close the open entry.
    pub fn entry_end(&mut self) {
        self.write_str("</li>\n");
    }

    /// A complete, flagged entry for an unrecognized line.
    pub fn warning_entry(&mut self, text: &str) {
        self.write_str("  <li><span style=\"color: red;\">");
        self.write_text(text);
        self.write_str("</span></li>\n");
    }
}
