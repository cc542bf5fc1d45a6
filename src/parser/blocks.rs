//! Line- and paragraph-level rewrites.
//!
//! Each rule is applied to the entire remaining text before the next runs,
//! in the order given here. Paragraph wrapping must come last: it decides
//! whether to add `<p>` by checking whether a chunk already starts with a
//! tag produced by an earlier rule.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::options::Options;
use super::table;

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,6}) ([^\n]+)$").unwrap());

static TASK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+\[( *[ xX]?)\]\s([^\n]+)$").unwrap());

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+] ([^\n]+)$").unwrap());

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d+\.) ([^\n]+)$").unwrap());

static THEMATIC_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^ {0,3}(?:\*(?: *\* *){2,}|_(?: *_ *){2,}|-(?: *- *){2,})[ \t]*$").unwrap()
});

static BLOCK_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*((?:>[ \t]*)+)([^\n]*)$").unwrap());

static TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([^\n]*\|[^\n]*)\n([-:| ]+)\n((?:[^\n]*\|[^\n]*(?:\n|$))*)").unwrap()
});

static CHUNK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}|\\\n").unwrap());

static OPENS_WITH_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<\w").unwrap());

pub(super) fn transform(text: &str, options: &Options) -> String {
    let text = ATX_HEADING.replace_all(text, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{}>{}</h{}>", level, &caps[2], level)
    });

    let text = TASK_ITEM.replace_all(&text, |caps: &Captures| {
        if caps[1].trim().eq_ignore_ascii_case("x") {
            format!("<li><input type=\"checkbox\" checked disabled> {}</li>", &caps[2])
        } else {
            format!("<li><input type=\"checkbox\" disabled> {}</li>", &caps[2])
        }
    });

    let text = UNORDERED_ITEM.replace_all(&text, "<li>$1</li>");

    // The numeral is echoed, not renumbered.
    let text = ORDERED_ITEM.replace_all(&text, "<li>$1 $2</li>");

    let text = THEMATIC_BREAK.replace_all(&text, "<hr/>");

    let text = BLOCK_QUOTE.replace_all(&text, |caps: &Captures| {
        if caps[2].trim().is_empty() {
            return String::new();
        }
        let depth = caps[1].matches('>').count();
        format!(
            "{}{}{}",
            "<blockquote>".repeat(depth),
            &caps[2],
            "</blockquote>".repeat(depth)
        )
    });

    let text = TABLE.replace_all(&text, |caps: &Captures| {
        let separator = &caps[2];
        if !separator.contains('|') {
            return caps[0].to_string();
        }
        table::build(
            &caps[1],
            separator,
            caps.get(3).map_or("", |m| m.as_str()),
            options,
        )
    });

    wrap_paragraphs(&text)
}

/// Splits on blank lines or a backslash hard break, wraps chunks that do
/// not already open with a tag in `<p>`, and rejoins with `<br />`.
fn wrap_paragraphs(text: &str) -> String {
    let chunks: Vec<String> = CHUNK_BOUNDARY
        .split(text)
        .map(|chunk| {
            if OPENS_WITH_TAG.is_match(chunk) {
                chunk.to_string()
            } else {
                format!("<p>{}</p>", chunk)
            }
        })
        .collect();
    chunks.join("<br />")
}
