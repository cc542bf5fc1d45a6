//! The table sub-parser.
//!
//! Receives the three raw pieces the block pass matched (header line,
//! alignment separator line, body block) and emits the finished
//! `<table>` element. Every emitted row is exactly as wide as the header:
//! short rows are padded with empty cells, long rows truncated.

use super::options::Options;
use super::PLACEHOLDER_TOKEN;
use crate::html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TableAlignment {
    None,
    Left,
    Center,
    Right,
}

impl TableAlignment {
    fn attribute(self) -> Option<&'static str> {
        match self {
            TableAlignment::None => None,
            TableAlignment::Left => Some("left"),
            TableAlignment::Center => Some("center"),
            TableAlignment::Right => Some("right"),
        }
    }
}

pub(super) fn build(header: &str, separator: &str, body: &str, options: &Options) -> String {
    let columns: Vec<&str> = header
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();
    let alignments = parse_alignments(separator);
    let alignment_for =
        |i: usize| alignments.get(i).copied().unwrap_or(TableAlignment::None);

    let mut rows: Vec<Vec<&str>> = Vec::new();
    for line in body.trim().lines() {
        if !line.contains('|') {
            continue;
        }
        let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
        // Leading/trailing pipes produce empty edge cells; only those are
        // dropped, so rows without edge pipes keep all their content.
        if cells.first() == Some(&"") {
            cells.remove(0);
        }
        if cells.last() == Some(&"") {
            cells.pop();
        }
        rows.push(
            (0..columns.len())
                .map(|i| cells.get(i).copied().unwrap_or(""))
                .collect(),
        );
    }

    let mut output = String::from("<table><thead><tr>");
    for (i, column) in columns.iter().enumerate() {
        push_cell(&mut output, "th", alignment_for(i), column, options);
    }
    output.push_str("</tr></thead>");
    if !rows.is_empty() {
        output.push_str("<tbody>");
        for row in &rows {
            output.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                push_cell(&mut output, "td", alignment_for(i), cell, options);
            }
            output.push_str("</tr>");
        }
        output.push_str("</tbody>");
    }
    output.push_str("</table>");
    output
}

/// `:---:` is centered, `:---` left, `---:` right, `---` unattributed.
fn parse_alignments(separator: &str) -> Vec<TableAlignment> {
    separator
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            match (segment.starts_with(':'), segment.ends_with(':')) {
                (true, true) => TableAlignment::Center,
                (true, false) => TableAlignment::Left,
                (false, true) => TableAlignment::Right,
                (false, false) => TableAlignment::None,
            }
        })
        .collect()
}

fn push_cell(output: &mut String, tag: &str, alignment: TableAlignment, text: &str, options: &Options) {
    let text = if options.unsafe_ {
        text.to_string()
    } else {
        escape_cell(text)
    };
    match alignment.attribute() {
        Some(align) => {
            output.push_str(&format!("<{0} align=\"{1}\">{2}</{0}>", tag, align, text));
        }
        None => {
            output.push_str(&format!("<{0}>{1}</{0}>", tag, text));
        }
    }
}

/// Escapes cell text against pipe-adjacent injection while keeping
/// placeholder tokens intact; a protected region's token may never be
/// altered by a later stage.
fn escape_cell(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last_match = 0;
    for token in PLACEHOLDER_TOKEN.find_iter(text) {
        output.push_str(&html::escape_html(&text[last_match..token.start()]));
        output.push_str(token.as_str());
        last_match = token.end();
    }
    output.push_str(&html::escape_html(&text[last_match..]));
    output
}
