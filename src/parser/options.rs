//! Configuration for the renderer.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::SyntaxHighlighterAdapter;

/// Options affecting how Markdown is rendered.
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct Options {
    /// Allow raw HTML and dangerous URLs through untouched.
    ///
    /// When `false` (the default), tags on the denylist are entity-escaped
    /// and attribute values carrying `javascript:`/`data:` URLs are
    /// stripped; see [`crate::html::sanitize_html`].
    ///
    /// ```rust
    /// # use minigfm::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("<script>alert(1)</script>", &options),
    ///            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
    ///
    /// options.unsafe_ = true;
    /// assert_eq!(markdown_to_html("<script>alert(1)</script>", &options),
    ///            "<script>alert(1)</script>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub unsafe_: bool,
}

/// Umbrella plugins struct.
#[derive(Default, Debug, Clone)]
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    pub render: RenderPlugins<'p>,
}

/// Plugins for alternative rendering of parts of the output.
#[derive(Default, Clone)]
pub struct RenderPlugins<'p> {
    /// Syntax highlighter for fenced code blocks; `None` emits the escaped
    /// code unhighlighted.
    pub codefence_syntax_highlighter: Option<&'p dyn SyntaxHighlighterAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "codefence_syntax_highlighter",
                &self
                    .codefence_syntax_highlighter
                    .map(|_| "&dyn SyntaxHighlighterAdapter"),
            )
            .finish()
    }
}
