//! A lightweight renderer for a GitHub Flavored Markdown subset.
//!
//! `minigfm` converts Markdown text to an HTML fragment through a fixed
//! sequence of text-rewriting passes rather than a full CommonMark parser.
//! It covers headings, emphasis, strikethrough, ordered/unordered/task
//! lists, blockquotes (including nesting), horizontal rules, fenced and
//! inline code, pipe tables with column alignment, links, images and
//! autolinks. User-supplied HTML is neutralized unless the `unsafe_`
//! option is set.
//!
//! ```
//! use minigfm::{markdown_to_html, Options};
//!
//! let html = markdown_to_html("# Hello\n\nThis is **bold** and _em_.", &Options::default());
//! assert_eq!(
//!     html,
//!     "<h1>Hello</h1><br /><p>This is <strong>bold</strong> and <em>em</em>.</p>",
//! );
//! ```
//!
//! Fenced code blocks are shielded from every other rewrite and can be
//! syntax highlighted through a [`plugins`] adapter; see
//! [`markdown_to_html_with_plugins`].

#![warn(missing_docs)]

pub mod adapters;
pub mod html;
mod parser;
pub mod plugins;
mod strings;

pub use crate::parser::options::{Options, Plugins, RenderPlugins};

/// Render Markdown to an HTML fragment with the given [`Options`].
///
/// ```
/// use minigfm::{markdown_to_html, Options};
///
/// assert_eq!(
///     markdown_to_html("Hello ~~world~~ there.", &Options::default()),
///     "<p>Hello <del>world</del> there.</p>",
/// );
/// ```
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    markdown_to_html_with_plugins(md, options, &Plugins::default())
}

/// Render Markdown to an HTML fragment with the given [`Options`] and
/// [`Plugins`].
///
/// When a codefence syntax highlighter is supplied, fenced code blocks are
/// run through it at restore time; a failing highlighter falls back to the
/// escaped raw code.
///
/// ````
/// use std::io::{self, Write};
///
/// use minigfm::adapters::SyntaxHighlighterAdapter;
/// use minigfm::{markdown_to_html_with_plugins, Options, Plugins};
///
/// struct Bracketed;
///
/// impl SyntaxHighlighterAdapter for Bracketed {
///     fn write_highlighted(
///         &self,
///         output: &mut dyn Write,
///         lang: Option<&str>,
///         code: &str,
///     ) -> io::Result<()> {
///         write!(output, "[{}] {}", lang.unwrap_or("auto"), code)
///     }
/// }
///
/// let adapter = Bracketed;
/// let mut plugins = Plugins::default();
/// plugins.render.codefence_syntax_highlighter = Some(&adapter);
///
/// let html = markdown_to_html_with_plugins("```rust\nlet x = 1;\n```", &Options::default(), &plugins);
/// assert_eq!(
///     html,
///     "<p><pre><code class=\"hljs rust lang-rust\">[rust] let x = 1;</code></pre></p>",
/// );
/// ````
pub fn markdown_to_html_with_plugins(md: &str, options: &Options, plugins: &Plugins) -> String {
    parser::convert(md, options, plugins)
}
