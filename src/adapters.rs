//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

use std::io::{self, Write};

/// Implement this adapter for creating a plugin for custom syntax
/// highlighting of codefence blocks.
pub trait SyntaxHighlighterAdapter {
    /// Writes a syntax highlighted HTML output for the body of a
    /// `<pre><code>` block.
    ///
    /// `lang`: the language token of the codefence block, or `None` when the
    /// fence carried no language, in which case the adapter should detect
    /// one itself.
    ///
    /// `code`: the source code to be syntax highlighted.
    ///
    /// Returning an error does not abort rendering; the renderer substitutes
    /// the escaped, unhighlighted code instead.
    fn write_highlighted(
        &self,
        output: &mut dyn Write,
        lang: Option<&str>,
        code: &str,
    ) -> io::Result<()>;
}
