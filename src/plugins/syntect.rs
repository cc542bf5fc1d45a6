//! Adapter for the Syntect syntax highlighter plugin.

use std::io::{self, Write};
use std::sync::LazyLock;

use regex::Regex;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::adapters::SyntaxHighlighterAdapter;

/// Syntect syntax highlighter plugin.
///
/// Looks the fence language up in the default syntax set; a missing or
/// empty language falls back to first-line detection, and then to plain
/// text.
pub struct SyntectAdapter {
    theme: String,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SyntectAdapter {
    /// Construct a new `SyntectAdapter` with the given syntax highlighting
    /// theme, e.g. `"base16-ocean.dark"`.
    pub fn new(theme: &str) -> Self {
        SyntectAdapter {
            theme: theme.to_string(),
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> io::Result<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme)
            .ok_or_else(|| io::Error::other(format!("unknown theme: {}", self.theme)))
    }
}

impl SyntaxHighlighterAdapter for SyntectAdapter {
    fn write_highlighted(
        &self,
        output: &mut dyn Write,
        lang: Option<&str>,
        code: &str,
    ) -> io::Result<()> {
        let syntax = lang
            .filter(|l| !l.is_empty())
            .and_then(|l| self.syntax_set.find_syntax_by_token(l))
            .or_else(|| self.syntax_set.find_syntax_by_first_line(code))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = highlighted_html_for_string(code, &self.syntax_set, syntax, self.theme()?)
            .map_err(io::Error::other)?;
        output.write_all(strip_pre_wrapper(&highlighted).as_bytes())
    }
}

/// Syntect wraps its output in a styled `<pre>` of its own; the renderer
/// already emits the enclosing `<pre><code>` pair.
fn strip_pre_wrapper(highlighted: &str) -> String {
    static PRE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<pre[^>]*>\n?").unwrap());
    PRE_TAG.replace(highlighted, "").replace("</pre>", "")
}
