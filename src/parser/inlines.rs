//! Span-level rewrites.
//!
//! No nesting support: each rule is a single global substitution over the
//! block-transformed text, in the order given here. Images must run before
//! links so the link rule never captures the trailing half of an image.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_]{2}(.+?)[*_]{2}").unwrap());

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\n]+)_|\*([^*\n]+)\*").unwrap());

static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

static URL_AUTOLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<((?:https?://|ftp://|mailto:|tel:)[^>\s]+)>").unwrap());

static EMAIL_AUTOLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^\s@]+@[^\s@]+\.[^\s@]+)>").unwrap());

static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[([^\]]+)\]\(([^) ]+) ?("[^)"]+")?\)"#).unwrap());

pub(super) fn transform(text: &str) -> String {
    let text = STRONG.replace_all(text, "<strong>$1</strong>");
    let text = emphasis(&text);
    let text = STRIKETHROUGH.replace_all(&text, "<del>$1</del>");
    let text = URL_AUTOLINK.replace_all(&text, "<a href=\"$1\">$1</a>");
    let text = EMAIL_AUTOLINK.replace_all(&text, "<a href=\"mailto:$1\">$1</a>");
    let text = IMAGE.replace_all(&text, "<img src=\"$2\" alt=\"$1\"></img>");
    LINK.replace_all(&text, |caps: &Captures| {
        // The captured title keeps its surrounding quotes.
        match caps.get(3) {
            Some(title) => format!(
                "<a href=\"{}\" title={}>{}</a>",
                &caps[2],
                title.as_str(),
                &caps[1]
            ),
            None => format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1]),
        }
    })
    .into_owned()
}

/// Rewrites every italic span whose delimiter does not touch an adjacent
/// asterisk, so a stray half of a `**` pair is never consumed. The
/// adjacency check needs a look around the match, which the pattern itself
/// cannot express, so matches are filtered in a manual scan.
fn emphasis(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last_match = 0;
    for caps in EMPHASIS.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let content = match caps.get(1).or_else(|| caps.get(2)) {
            Some(m) => m.as_str(),
            None => continue,
        };
        let preceded = text[..whole.start()].chars().next_back() == Some('*');
        let followed = text[whole.end()..].chars().next() == Some('*');
        if preceded || followed {
            continue;
        }
        output.push_str(&text[last_match..whole.start()]);
        output.push_str("<em>");
        output.push_str(content);
        output.push_str("</em>");
        last_match = whole.end();
    }
    output.push_str(&text[last_match..]);
    output
}
