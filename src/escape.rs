//! HTML escaping utilities.
//!
//! Changelog text is escaped exactly once, when a line is ingested.
//! Markup emitted by the writer is never passed through here.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Lookup table for escapable characters in text content.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape the five standard HTML entities into an output buffer.
///
/// # Example
/// ```
/// use changelog_html::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "a < b & \"c\"");
/// assert_eq!(out, "a &lt; b &amp; &quot;c&quot;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.reserve(input.len() + input.len() / 8);
    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        // Escapable bytes are all ASCII, so every split point is a char boundary
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(entity(bytes[pos]));
            pos += 1;
        }
    }
}

/// Escape text, borrowing the input when nothing needs escaping.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !needs_escape(input.as_bytes()) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    escape_text_into(&mut out, input);
    Cow::Owned(out)
}

/// Escape a configuration-supplied value for a double-quoted attribute.
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(input)
}

/// Check if a byte slice contains anything that needs escaping.
#[inline]
pub fn needs_escape(input: &[u8]) -> bool {
    first_escape(input).is_some()
}

#[inline]
fn entity(b: u8) -> &'static str {
    match b {
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'&' => "&amp;",
        b'"' => "&quot;",
        b'\'' => "&#39;",
        _ => unreachable!("not an escapable byte"),
    }
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
