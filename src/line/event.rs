//! Line event types.

/// Bug tracker family a change entry can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tracker {
    /// `* [B#<id>] ...`
    Bugzilla,
    /// `* [L#<id>] ...`
    Launchpad,
}

impl Tracker {
    /// Prefix a reference line starts with, e.g. `* [B#`.
    pub fn line_prefix(self) -> &'static str {
        match self {
            Self::Bugzilla => "* [B#",
            Self::Launchpad => "* [L#",
        }
    }

    /// Human-readable name used in link text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bugzilla => "Bugzilla",
            Self::Launchpad => "Launchpad",
        }
    }
}

/// Classification of one ingested line.
///
/// Borrows its text from the line; events never outlive one step of the
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// Empty line.
    Blank,
    /// `-- <version> <date> --` anywhere in the line.
    VersionHeader {
        /// Version label.
        version: &'a str,
        /// Release date, never empty.
        date: &'a str,
    },
    /// `* [B#id] text` or `* [L#id] text`.
    BugReference {
        /// Tracker family.
        tracker: Tracker,
        /// Decimal bug id.
        bug_id: &'a str,
        /// Entry text after the reference.
        text: &'a str,
    },
    /// `* text`.
    NewEntry {
        /// Entry text after the bullet.
        text: &'a str,
    },
    /// Text appended to the open entry.
    Continuation {
        /// Whole line text.
        text: &'a str,
    },
    /// Unrecognized line, rendered as a flagged standalone entry.
    WarningEntry {
        /// Whole line text.
        text: &'a str,
    },
}

impl LineEvent<'_> {
    /// Short name of the event kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::VersionHeader { .. } => "version header",
            Self::BugReference { .. } => "bug reference",
            Self::NewEntry { .. } => "new entry",
            Self::Continuation { .. } => "continuation",
            Self::WarningEntry { .. } => "warning entry",
        }
    }
}
