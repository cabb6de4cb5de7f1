//! Ordered line classifier.
//!
//! The changelog has no formal grammar: what a line means depends on which
//! pattern recognizes it first. Classifiers live in a ranked table and are
//! tried strictly in order, so a bug reference never falls through to the
//! generic bullet and a header wins over everything but a blank line.

use memchr::memmem;

use crate::cursor::Cursor;

use super::event::{LineEvent, Tracker};

/// Classifier function: escaped line text plus whether an entry is open.
pub type ClassifyFn = for<'a> fn(&'a str, bool) -> Option<LineEvent<'a>>;

/// Ranked classifier table. The last entry accepts every non-blank line.
pub const CLASSIFIERS: [(&str, ClassifyFn); 7] = [
    ("blank", blank),
    ("version header", version_header),
    ("bugzilla reference", bugzilla_reference),
    ("launchpad reference", launchpad_reference),
    ("new entry", new_entry),
    ("continuation", continuation),
    ("warning", warning),
];

/// Classify one ingested line.
///
/// # Example
/// ```
/// use changelog_html::line::{classify, LineEvent};
///
/// assert_eq!(
///     classify("-- 1.2.3 2021-01-15 --", false),
///     LineEvent::VersionHeader { version: "1.2.3", date: "2021-01-15" },
/// );
/// assert_eq!(classify("* Fixed", false), LineEvent::NewEntry { text: "Fixed" });
/// ```
pub fn classify(line: &str, entry_open: bool) -> LineEvent<'_> {
    CLASSIFIERS
        .iter()
        .find_map(|(_, classifier)| classifier(line, entry_open))
        // `warning` accepts every non-empty line
        .unwrap_or(LineEvent::Blank)
}

fn blank(line: &str, _entry_open: bool) -> Option<LineEvent<'_>> {
    line.is_empty().then_some(LineEvent::Blank)
}

/// `-- <version> <date> --` anywhere in the line.
///
/// Only the first `-- ` can open a header: the version runs to the next
/// space and the date runs to the first ` --` after that. A header with an
/// empty date is rejected so the line can match something else.
fn version_header(line: &str, _entry_open: bool) -> Option<LineEvent<'_>> {
    let open = memmem::find(line.as_bytes(), b"-- ")?;
    let version_start = open + 3;
    let version_len = memchr::memchr(b' ', &line.as_bytes()[version_start..])?;
    let date_start = version_start + version_len + 1;
    let date_len = memmem::find(&line.as_bytes()[date_start..], b" --")?;
    if date_len == 0 {
        return None;
    }
    Some(LineEvent::VersionHeader {
        version: &line[version_start..version_start + version_len],
        date: &line[date_start..date_start + date_len],
    })
}

fn bugzilla_reference(line: &str, _entry_open: bool) -> Option<LineEvent<'_>> {
    bug_reference(line, Tracker::Bugzilla)
}

fn launchpad_reference(line: &str, _entry_open: bool) -> Option<LineEvent<'_>> {
    bug_reference(line, Tracker::Launchpad)
}

/// `* [X#<digits>] <text>`.
fn bug_reference(line: &str, tracker: Tracker) -> Option<LineEvent<'_>> {
    let mut cursor = Cursor::new(line);
    if !cursor.eat(tracker.line_prefix()) {
        return None;
    }
    let bug_id = cursor.take_digits()?;
    if !cursor.eat("] ") {
        return None;
    }
    Some(LineEvent::BugReference {
        tracker,
        bug_id,
        text: cursor.rest(),
    })
}

/// `* <text>`.
fn new_entry(line: &str, _entry_open: bool) -> Option<LineEvent<'_>> {
    let mut cursor = Cursor::new(line);
    cursor.eat("* ").then(|| LineEvent::NewEntry { text: cursor.rest() })
}

/// Any line while an entry is open. The whole line is appended.
fn continuation(line: &str, entry_open: bool) -> Option<LineEvent<'_>> {
    entry_open.then_some(LineEvent::Continuation { text: line })
}

fn warning(line: &str, _entry_open: bool) -> Option<LineEvent<'_>> {
    (!line.is_empty()).then_some(LineEvent::WarningEntry { text: line })
}
