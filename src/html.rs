//! HTML escaping and sanitization.

use std::sync::LazyLock;

use phf::phf_map;
use regex::{Captures, Regex};

static HTML_ESCAPE_TABLE: phf::Map<char, &'static str> = phf_map! {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
    '\'' => "&#39;",
};

/// Replaces each HTML-significant character (`& < > " '`) with its entity
/// encoding, in a single left-to-right pass.
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match HTML_ESCAPE_TABLE.get(&c) {
            Some(entity) => output.push_str(entity),
            None => output.push(c),
        }
    }
    output
}

static DISALLOWED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)\s*(script|iframe|object|embed|frame|link|meta|style|svg|math)[^>]*>")
        .unwrap()
});

static URL_SCHEME_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s([\w-]+)=\s*["'\s]*(?:javascript:|data:)[^"'\s>]*"#).unwrap()
});

/// Neutralizes dangerous raw HTML while letting everything else through.
///
/// Tags on the denylist (`script`, `iframe`, `object`, `embed`, `frame`,
/// `link`, `meta`, `style`, `svg`, `math`) are entity-escaped in both their
/// opening and closing forms, and attribute assignments whose value starts
/// with `javascript:` or `data:` are stripped unless the attribute name
/// itself starts with `data-`.
pub fn sanitize_html(text: &str) -> String {
    let text = DISALLOWED_TAG.replace_all(text, |caps: &Captures| escape_html(&caps[0]));
    URL_SCHEME_ATTRIBUTE
        .replace_all(&text, |caps: &Captures| {
            if caps[1].to_ascii_lowercase().starts_with("data-") {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}
