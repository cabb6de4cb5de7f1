//! Line model for the changelog.
//!
//! A changelog is read one physical line at a time:
//! - split on any newline convention
//! - trimmed and escaped once on ingestion
//! - classified against a ranked pattern table

mod classify;
mod event;
mod split;

pub use classify::{CLASSIFIERS, ClassifyFn, classify};
pub use event::{LineEvent, Tracker};
pub use split::{ChangelogLine, Lines};
