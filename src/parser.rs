//! Changelog state machine.
//!
//! One line in, state mutated, markup out. The parser owns its state and its
//! writer; nothing survives a call to [`ChangelogParser::finish`].

use tracing::{debug, trace};

use crate::line::{ChangelogLine, LineEvent, Lines, Tracker, classify};
use crate::options::TrackerUrls;
use crate::render::HtmlWriter;

/// Open/close flags of the current version block and change entry.
///
/// Invariant: `entry_open` implies `version_open`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    /// A `<ul>` for a version has been emitted and not closed.
    pub version_open: bool,
    /// An `<li>` for the current change has been emitted and not closed.
    pub entry_open: bool,
    /// Lines are discarded until the first version header.
    pub seen_first_version: bool,
}

/// Counts gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Version blocks opened.
    pub versions: usize,
    /// Plain `* text` entries.
    pub entries: usize,
    /// Entries carrying a Bugzilla reference.
    pub bugzilla_refs: usize,
    /// Entries carrying a Launchpad reference.
    pub launchpad_refs: usize,
    /// Lines appended to an open entry.
    pub continuations: usize,
    /// Unrecognized lines rendered as flagged entries.
    pub warnings: usize,
    /// Lines discarded before the first version header.
    pub skipped: usize,
}

impl Report {
    /// Number of `<li>` items in the output.
    pub fn list_items(&self) -> usize {
        self.entries + self.bugzilla_refs + self.launchpad_refs + self.warnings
    }
}

/// Fragment plus report, returned by [`ChangelogParser::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub fragment: String,
    pub report: Report,
}

/// Single-pass, line-driven changelog parser.
///
/// # Example
/// ```
/// use changelog_html::{ChangelogParser, TrackerUrls};
///
/// let trackers = TrackerUrls::default();
/// let mut parser = ChangelogParser::new(&trackers);
/// parser.feed("-- 1.0 2021-01-15 --");
/// parser.feed("* First change");
/// let rendered = parser.finish();
///
/// assert!(rendered.fragment.contains("<li>First change</li>"));
/// assert_eq!(rendered.report.versions, 1);
/// ```
#[derive(Debug)]
pub struct ChangelogParser<'o> {
    state: ParserState,
    writer: HtmlWriter,
    trackers: &'o TrackerUrls,
    report: Report,
    line_number: usize,
}

impl<'o> ChangelogParser<'o> {
    /// Create a parser emitting tracker links from `trackers`.
    pub fn new(trackers: &'o TrackerUrls) -> Self {
        Self::with_writer(trackers, HtmlWriter::new())
    }

    /// Create a parser around a pre-sized writer.
    pub fn with_writer(trackers: &'o TrackerUrls, writer: HtmlWriter) -> Self {
        Self {
            state: ParserState::default(),
            writer,
            trackers,
            report: Report::default(),
            line_number: 0,
        }
    }

    /// Current open/close state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Feed every line of a changelog.
    pub fn feed_all(&mut self, input: &str) {
        for raw in Lines::new(input) {
            self.feed(raw);
        }
    }

    /// Feed one raw physical line.
    pub fn feed(&mut self, raw: &str) {
        self.line_number += 1;
        let line = ChangelogLine::ingest(raw);
        let event = classify(line.as_str(), self.state.entry_open);

        if !self.state.seen_first_version && !matches!(event, LineEvent::VersionHeader { .. }) {
            if !line.is_blank() {
                trace!(line = self.line_number, kind = event.kind(), "before first version");
                self.report.skipped += 1;
            }
            return;
        }

        self.apply(event);
        debug_assert!(!self.state.entry_open || self.state.version_open);
    }

    /// Apply one classified line.
    fn apply(&mut self, event: LineEvent<'_>) {
        match event {
            LineEvent::Blank => self.close_entry(),
            LineEvent::VersionHeader { version, date } => {
                self.close_version();
                debug!(line = self.line_number, version, date, "version block");
                self.writer.version_start(version, date);
                self.state.version_open = true;
                self.state.seen_first_version = true;
                self.report.versions += 1;
            }
            LineEvent::BugReference {
                tracker,
                bug_id,
                text,
            } => {
                self.close_entry();
                let url = self.trackers.url(tracker, bug_id);
                self.writer.tracked_entry_start(tracker, &url, bug_id, text);
                self.state.entry_open = true;
                match tracker {
                    Tracker::Bugzilla => self.report.bugzilla_refs += 1,
                    Tracker::Launchpad => self.report.launchpad_refs += 1,
                }
            }
            LineEvent::NewEntry { text } => {
                self.close_entry();
                self.writer.entry_start(text);
                self.state.entry_open = true;
                self.report.entries += 1;
            }
            LineEvent::Continuation { text } => {
                debug_assert!(self.state.entry_open);
                self.writer.entry_continue(text);
                self.report.continuations += 1;
            }
            LineEvent::WarningEntry { text } => {
                self.close_entry();
                debug!(line = self.line_number, text, "unrecognized line flagged");
                self.writer.warning_entry(text);
                self.report.warnings += 1;
            }
        }
    }

    fn close_entry(&mut self) {
        if self.state.entry_open {
            self.writer.entry_end();
            self.state.entry_open = false;
        }
    }

    fn close_version(&mut self) {
        self.close_entry();
        if self.state.version_open {
            self.writer.version_end();
            self.state.version_open = false;
        }
    }

    /// Close whatever is still open and hand back the fragment.
    pub fn finish(mut self) -> Rendered {
        self.close_version();
        debug_assert!(!self.state.entry_open && !self.state.version_open);
        Rendered {
            fragment: self.writer.into_string(),
            report: self.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> Rendered {
        let trackers = TrackerUrls::default();
        let mut parser = ChangelogParser::new(&trackers);
        parser.feed_all(input);
        parser.finish()
    }

    const V1: &str = "<h2>1.0 <span style=\"color: gray;\">(2021-01-15)</span></h2>\n<ul>\n";

    #[test]
    fn test_empty_input() {
        let rendered = render("");
        assert_eq!(rendered.fragment, "");
        assert_eq!(rendered.report, Report::default());
    }

    #[test]
    fn test_preamble_discarded() {
        let rendered = render("Changelog for the project\n* not an entry yet\n\n-- 1.0 2021-01-15 --\n");
        assert_eq!(rendered.fragment, format!("{V1}</ul>\n\n"));
        assert_eq!(rendered.report.skipped, 2);
    }

    #[test]
    fn test_entry_closed_by_blank() {
        let rendered = render("-- 1.0 2021-01-15 --\n* One\n\n* Two\n");
        assert_eq!(
            rendered.fragment,
            format!("{V1}  <li>One</li>\n  <li>Two</li>\n</ul>\n\n")
        );
    }

    #[test]
    fn test_state_transitions() {
        let trackers = TrackerUrls::default();
        let mut parser = ChangelogParser::new(&trackers);
        assert_eq!(parser.state(), ParserState::default());

        parser.feed("-- 1.0 2021-01-15 --");
        assert!(parser.state().version_open);
        assert!(!parser.state().entry_open);
        assert!(parser.state().seen_first_version);

        parser.feed("* change");
        assert!(parser.state().entry_open);

        parser.feed("   continued");
        assert!(parser.state().entry_open);

        parser.feed("");
        assert!(!parser.state().entry_open);
        assert!(parser.state().version_open);
    }

    #[test]
    fn test_blank_without_entry_is_noop() {
        let rendered = render("-- 1.0 2021-01-15 --\n\n\n\n");
        assert_eq!(rendered.fragment, format!("{V1}</ul>\n\n"));
    }

    #[test]
    fn test_warning_after_blank() {
        let rendered = render("-- 1.0 2021-01-15 --\n* One\n\nstray text\n* Two");
        assert_eq!(
            rendered.fragment,
            format!(
                "{V1}  <li>One</li>\n  <li><span style=\"color: red;\">stray text</span></li>\n  <li>Two</li>\n</ul>\n\n"
            )
        );
        assert_eq!(rendered.report.warnings, 1);
        assert_eq!(rendered.report.list_items(), 3);
    }

    #[test]
    fn test_header_closes_entry_and_version() {
        let rendered = render("-- 1.0 2021-01-15 --\n* One\n-- 0.9 2020-12-01 --\n* Zero");
        assert_eq!(
            rendered.fragment,
            format!(
                "{V1}  <li>One</li>\n</ul>\n\n<h2>0.9 <span style=\"color: gray;\">(2020-12-01)</span></h2>\n<ul>\n  <li>Zero</li>\n</ul>\n\n"
            )
        );
    }

    #[test]
    fn test_report_counts() {
        let rendered = render(
            "-- 1.0 2021-01-15 --\n* [B#1] a\n* [L#2] b\n  more\n* c\n\noops\n",
        );
        assert_eq!(
            rendered.report,
            Report {
                versions: 1,
                entries: 1,
                bugzilla_refs: 1,
                launchpad_refs: 1,
                continuations: 1,
                warnings: 1,
                skipped: 0,
            }
        );
    }
}
