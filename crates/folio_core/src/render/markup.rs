//! Markup interpolation helpers.

use std::borrow::Cow;

use crate::config::ContentTrust;

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Prepares a data-source string for interpolation under the given trust.
pub fn interpolate(trust: ContentTrust, raw: &str) -> Cow<'_, str> {
    match trust {
        ContentTrust::Trusted => Cow::Borrowed(raw),
        ContentTrust::Untrusted => Cow::Owned(escape_html(raw)),
    }
}
