//! The transformation pipeline.
//!
//! Every call runs the same fixed sequence: backslash escapes are resolved,
//! code regions are pulled out behind placeholder tokens, block-level and
//! then span-level constructs are rewritten, and finally the protected code
//! is spliced back in. Ordering is load-bearing throughout; no state
//! survives a call.

mod blocks;
mod inlines;
pub mod options;
mod table;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::html;
use crate::strings;
use self::options::{Options, Plugins};

/// A fenced code block lifted out of the document.
struct CodeBlock {
    /// Language token from the opening fence; empty when absent.
    info: String,
    /// Verbatim fence content.
    literal: String,
}

#[derive(Default)]
struct ProtectedRegions {
    code_blocks: Vec<CodeBlock>,
    code_spans: Vec<String>,
}

/// Matches either placeholder kind. The token shape cannot arise from
/// escaped or rendered Markdown, and none of the rewrite rules can touch it.
static PLACEHOLDER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!----CODE(?:BLOCK|INLINE)\d+---->").unwrap());

static CODE_BLOCK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!----CODEBLOCK(\d+)---->").unwrap());

static CODE_SPAN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!----CODEINLINE(\d+)---->").unwrap());

pub(crate) fn convert(markdown: &str, options: &Options, plugins: &Plugins) -> String {
    let text = strings::unescape_punctuation(markdown);
    let (text, regions) = protect(&text, options);
    let text = blocks::transform(&text, options);
    let text = inlines::transform(&text);
    restore(&text, &regions, plugins)
}

// The closing fence must repeat the opening one exactly; running the
// four-backtick pattern before the three-backtick one pairs fences by
// length without a backreference.
static FENCED_CODE_FOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)````[ ]*(\w*)\n((?s:.*?))\n````").unwrap());

static FENCED_CODE_THREE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)```[ ]*(\w*)\n((?s:.*?))\n```").unwrap());

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%%[\n ][^%]+[\n ]%%").unwrap());

/// Extracts fenced code blocks and inline code spans behind placeholder
/// tokens, strips `%%` comment regions, and sanitizes what is left unless
/// the unsafe option is set. An unterminated fence or span never matches
/// and flows through the later passes as literal text.
fn protect(text: &str, options: &Options) -> (String, ProtectedRegions) {
    let mut regions = ProtectedRegions::default();

    let text = FENCED_CODE_FOUR.replace_all(text, |caps: &Captures| {
        stash_code_block(&mut regions, caps)
    });
    let text = FENCED_CODE_THREE.replace_all(&text, |caps: &Captures| {
        stash_code_block(&mut regions, caps)
    });

    let text = CODE_SPAN.replace_all(&text, |caps: &Captures| {
        // Span content skips the general escaping pass, so escape it here.
        regions.code_spans.push(html::escape_html(&caps[1]));
        format!("<!----CODEINLINE{}---->", regions.code_spans.len() - 1)
    });

    let text = COMMENT.replace_all(&text, "");

    let protected = if options.unsafe_ {
        text.into_owned()
    } else {
        html::sanitize_html(&text)
    };
    (protected, regions)
}

fn stash_code_block(regions: &mut ProtectedRegions, caps: &Captures) -> String {
    regions.code_blocks.push(CodeBlock {
        info: caps[1].trim().to_string(),
        literal: caps[2].trim().to_string(),
    });
    format!("<!----CODEBLOCK{}---->", regions.code_blocks.len() - 1)
}

/// Splices protected code back into its placeholder positions. A token
/// whose index resolves to nothing renders as the empty string.
fn restore(text: &str, regions: &ProtectedRegions, plugins: &Plugins) -> String {
    let text = CODE_SPAN_TOKEN.replace_all(text, |caps: &Captures| {
        match lookup(&regions.code_spans, &caps[1]) {
            Some(code) => format!("<code>{}</code>", code),
            None => String::new(),
        }
    });

    CODE_BLOCK_TOKEN
        .replace_all(&text, |caps: &Captures| {
            let Some(block) = lookup(&regions.code_blocks, &caps[1]) else {
                return String::new();
            };
            let body = highlighted_body(block, plugins);
            if block.info.is_empty() {
                format!("<pre><code>{}</code></pre>", body)
            } else {
                format!(
                    "<pre><code class=\"hljs {0} lang-{0}\">{1}</code></pre>",
                    block.info, body
                )
            }
        })
        .into_owned()
}

fn lookup<'e, T>(entries: &'e [T], index: &str) -> Option<&'e T> {
    index.parse::<usize>().ok().and_then(|i| entries.get(i))
}

/// Runs the configured highlighter over a code block, falling back to the
/// escaped raw code when no highlighter is present or it fails.
fn highlighted_body(block: &CodeBlock, plugins: &Plugins) -> String {
    if let Some(highlighter) = plugins.render.codefence_syntax_highlighter {
        let lang = Some(block.info.as_str()).filter(|info| !info.is_empty());
        let mut highlighted = Vec::new();
        if highlighter
            .write_highlighted(&mut highlighted, lang, &block.literal)
            .is_ok()
        {
            return String::from_utf8_lossy(&highlighted).into_owned();
        }
    }
    html::escape_html(&block.literal)
}
