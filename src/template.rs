//! Help page template and the banner spliced into it.

use memchr::memmem;

use crate::error::{Error, Result};
use crate::escape::{escape_attr, escape_text};
use crate::options::Banner;

/// Marker replaced by the generated content.
pub const SPLICE_MARKER: &str = "<!-- contents -->";

/// A template split at its splice marker.
///
/// # Example
/// ```
/// use changelog_html::Template;
///
/// let template = Template::parse("<body><!-- contents --></body>").unwrap();
/// assert_eq!(template.head(), "<body>");
/// assert_eq!(template.tail(), "</body>");
/// assert!(Template::parse("<body></body>").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    head: &'a str,
    tail: &'a str,
}

impl<'a> Template<'a> {
    /// Split a template at its only splice marker.
    pub fn parse(source: &'a str) -> Result<Self> {
        let mut found = memmem::find_iter(source.as_bytes(), SPLICE_MARKER);
        let (Some(at), None) = (found.next(), found.next()) else {
            return Err(Error::TemplateMarker {
                marker: SPLICE_MARKER,
                found: memmem::find_iter(source.as_bytes(), SPLICE_MARKER).count(),
            });
        };
        Ok(Self {
            head: &source[..at],
            tail: &source[at + SPLICE_MARKER.len()..],
        })
    }

    /// Everything before the marker.
    pub fn head(&self) -> &'a str {
        self.head
    }

    /// Everything after the marker.
    pub fn tail(&self) -> &'a str {
        self.tail
    }

    /// `head + banner + fragment + tail`.
    pub fn splice(&self, banner: &Banner, fragment: &str) -> String {
        let mut out = String::with_capacity(self.head.len() + self.tail.len() + fragment.len() + 256);
        out.push_str(self.head);
        write_banner(&mut out, banner);
        out.push_str(fragment);
        out.push_str(self.tail);
        out
    }
}

/// Stylesheet, icon heading and description ahead of the version blocks.
pub fn write_banner(out: &mut String, banner: &Banner) {
    let title = escape_text(&banner.title);
    out.push_str(
        "\n<style type=\"text/css\">\nli { margin-left: auto; margin: 0em 0em 0em 0em; }\n</style>\n\n",
    );
    out.push_str("<h1>\n\t<img src=\"");
    out.push_str(&escape_attr(&banner.icon));
    out.push_str("\" width=\"16\" height=\"16\" alt=\"");
    out.push_str(&title);
    out.push_str("\"/>\n\t");
    out.push_str(&title);
    out.push_str("\n</h1>\n");
    out.push_str(&escape_text(&banner.description));
    out.push_str("\n\n");
}
