use std::io::{self, Write};

use super::*;
use crate::adapters::SyntaxHighlighterAdapter;

#[test]
fn syntax_highlighter_plugin() {
    struct MockAdapter;

    impl SyntaxHighlighterAdapter for MockAdapter {
        fn write_highlighted(
            &self,
            output: &mut dyn Write,
            lang: Option<&str>,
            code: &str,
        ) -> io::Result<()> {
            write!(output, "<!--{}--><span>{}</span>", lang.unwrap_or("none"), code)
        }
    }

    let adapter = MockAdapter;
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    html_plugins(
        "```rust\nfn main() {}\n```",
        concat!(
            "<p><pre><code class=\"hljs rust lang-rust\">",
            "<!--rust--><span>fn main() {}</span>",
            "</code></pre></p>",
        ),
        &plugins,
    );
}

#[test]
fn missing_language_requests_auto_detection() {
    struct MockAdapter;

    impl SyntaxHighlighterAdapter for MockAdapter {
        fn write_highlighted(
            &self,
            output: &mut dyn Write,
            lang: Option<&str>,
            code: &str,
        ) -> io::Result<()> {
            match lang {
                Some(lang) => write!(output, "[{}]{}", lang, code),
                None => write!(output, "[auto]{}", code),
            }
        }
    }

    let adapter = MockAdapter;
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    html_plugins(
        "```\ncode\n```",
        "<p><pre><code>[auto]code</code></pre></p>",
        &plugins,
    );
}

#[test]
fn failing_highlighter_falls_back_to_escaped_code() {
    struct BrokenAdapter;

    impl SyntaxHighlighterAdapter for BrokenAdapter {
        fn write_highlighted(
            &self,
            _output: &mut dyn Write,
            _lang: Option<&str>,
            _code: &str,
        ) -> io::Result<()> {
            Err(io::Error::other("highlighter exploded"))
        }
    }

    let adapter = BrokenAdapter;
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    html_plugins(
        "```\na < b\n```",
        "<p><pre><code>a &lt; b</code></pre></p>",
        &plugins,
    );
}

#[test]
#[cfg(feature = "syntect")]
fn syntect_plugin_highlights_rust() {
    use crate::plugins::syntect::SyntectAdapter;

    let adapter = SyntectAdapter::new("base16-ocean.dark");
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    let output = markdown_to_html_with_plugins(
        "```rust\nfn main() {}\n```",
        &Options::default(),
        &plugins,
    );
    assert!(output.starts_with("<p><pre><code class=\"hljs rust lang-rust\">"));
    assert!(output.contains("<span"));
    assert!(output.ends_with("</code></pre></p>"));
}

#[test]
#[cfg(feature = "syntect")]
fn syntect_plugin_with_unknown_theme_falls_back() {
    use crate::plugins::syntect::SyntectAdapter;

    let adapter = SyntectAdapter::new("no-such-theme");
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    html_plugins(
        "```rust\nfn main() {}\n```",
        "<p><pre><code class=\"hljs rust lang-rust\">fn main() {}</code></pre></p>",
        &plugins,
    );
}
