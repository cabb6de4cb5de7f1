//! changelog-html: plain-text changelog to HTML help page generator
//!
//! Turns a hand-written changelog into a fragment spliced into a help page
//! template. The changelog is a sequence of version blocks:
//!
//! ```text
//! -- 0.868 2015-04-12 --
//! * [L#1433586] Fix a crash when opening the hub list
//!   and its settings page
//! * Update OpenSSL
//! ```
//!
//! # Design Principles
//! - Single pass: one line in, markup out, no re-parsing
//! - Ordered classifiers instead of a grammar; first match wins
//! - No parse errors: unrecognized lines render as flagged entries
//! - Escape once, on ingestion; emitted tags are never escaped

pub mod cursor;
pub mod error;
pub mod escape;
pub mod generate;
pub mod line;
pub mod options;
pub mod parser;
pub mod render;
pub mod template;

// Re-export primary types
pub use error::{Error, Result};
pub use generate::{Destination, Job, generate};
pub use line::{LineEvent, Tracker};
pub use options::{Banner, Options, TrackerUrls};
pub use parser::{ChangelogParser, ParserState, Report, Rendered};
pub use render::HtmlWriter;
pub use template::{SPLICE_MARKER, Template};

/// A complete help page plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Template head, banner, version blocks, template tail.
    pub html: String,
    pub report: Report,
}

/// Convert a changelog into a help page using the default options.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let changelog = "-- 1.2.3 2021-01-15 --\n* [B#4821] Fixed crash on startup\n";
/// let html = changelog_html::to_html(changelog, "<body><!-- contents --></body>").unwrap();
/// assert!(html.starts_with("<body>"));
/// assert!(html.contains("[Bugzilla bug 4821]</a> Fixed crash on startup</li>"));
/// assert!(html.ends_with("</ul>\n\n</body>"));
/// ```
pub fn to_html(changelog: &str, template: &str) -> Result<String> {
    to_html_with_options(changelog, template, &Options::default()).map(|generated| generated.html)
}

/// Convert a changelog into a help page with options.
///
/// The template is validated before any rendering happens.
pub fn to_html_with_options(
    changelog: &str,
    template: &str,
    options: &Options,
) -> Result<Generated> {
    let template = Template::parse(template)?;
    let rendered = render_fragment(changelog, options);
    Ok(Generated {
        html: template.splice(&options.banner, &rendered.fragment),
        report: rendered.report,
    })
}

/// Render only the version blocks, without banner or template.
pub fn render_fragment(changelog: &str, options: &Options) -> Rendered {
    let writer = HtmlWriter::with_capacity_for(changelog.len());
    let mut parser = ChangelogParser::with_writer(&options.trackers, writer);
    parser.feed_all(changelog);
    parser.finish()
}
