//! Markdown plain text extraction.
//!
//! [`MarkdownExtractor`] strips Markdown syntax tokens, leaving only the
//! readable text: emphasis and strikethrough markers are removed, links and
//! images are reduced to their label, inline code loses its backticks, and
//! ATX heading markers disappear. It makes a useful second pipeline stage
//! after HTML extraction, since Markdown frequently survives inside HTML
//! text nodes.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::Extractor;

/// `![alt](url)` image references reduce to their alt text.
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("IMAGE regex"));

/// `[text](url)` links reduce to their label.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("LINK regex"));

/// `**bold**` emphasis.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("BOLD regex"));

/// `__bold__` emphasis.
static BOLD_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("BOLD_UNDERSCORE regex"));

/// `~~strikethrough~~` markers.
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").expect("STRIKETHROUGH regex"));

/// `*italic*` emphasis. Applied after [`BOLD`] so double asterisks are
/// already gone.
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("ITALIC regex"));

/// `_italic_` emphasis.
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+)_").expect("ITALIC_UNDERSCORE regex"));

/// Paired backticks around inline code. An unpaired backtick is left as-is.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("INLINE_CODE regex"));

/// ATX heading markers (`# ` through `###### `) at line start.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6} +").expect("HEADING regex"));

/// Markdown-specific plain text extractor.
///
/// Stateless; construction exists only so it presents the same capability
/// surface as the other extractors.
///
/// # Example
///
/// ```rust
/// use plaintext_extractor::{Extractor, MarkdownExtractor};
///
/// let extractor = MarkdownExtractor::new();
/// let text = extractor.plain_text("see [the docs](https://example.com)")?;
/// assert_eq!(text, "see the docs");
/// # Ok::<(), plaintext_extractor::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    /// Creates a new Markdown extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for MarkdownExtractor {
    fn plain_text(&self, input: &str) -> Result<String> {
        Ok(strip_tokens(input))
    }
}

/// Strip Markdown syntax tokens from `input`.
///
/// Images before links (an image is a link with a `!` prefix), bold before
/// italic (double markers contain single ones).
fn strip_tokens(input: &str) -> String {
    let mut text = IMAGE.replace_all(input, "$1").into_owned();
    text = LINK.replace_all(&text, "$1").into_owned();
    text = BOLD.replace_all(&text, "$1").into_owned();
    text = BOLD_UNDERSCORE.replace_all(&text, "$1").into_owned();
    text = STRIKETHROUGH.replace_all(&text, "$1").into_owned();
    text = ITALIC.replace_all(&text, "$1").into_owned();
    text = ITALIC_UNDERSCORE.replace_all(&text, "$1").into_owned();
    text = INLINE_CODE.replace_all(&text, "$1").into_owned();
    HEADING.replace_all(&text, "").into_owned()
}
