//! HTML plain text extraction.
//!
//! [`HtmlExtractor`] parses a document with `dom_query` and flattens it into
//! plain text with a recursive walk in document order. Block-level elements
//! contribute a trailing line break, `<br>` becomes a newline, and list items
//! get `- ` or `1. `-style markers. The raw buffer is then passed through
//! [`crate::normalize::normalize`] to produce the canonical line-oriented
//! output.

use std::collections::HashSet;

use dom_query::{Document, NodeRef};
use tendril::StrTendril;

use crate::error::Result;
use crate::normalize::{is_space, normalize};
use crate::Extractor;

/// Tags whose content is followed by a line break in the flattened output.
///
/// `html`, `head` and `body` are deliberately absent: they wrap every
/// document and would otherwise append an unconditional trailing newline.
pub const DEFAULT_BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

/// Classification of a node as an ordered list item, an unordered list item,
/// or neither, derived from its nearest enclosing `ul`/`ol` ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListItemType {
    None,
    Unordered,
    Ordered,
}

/// HTML-specific plain text extractor.
///
/// Configuration is fixed at construction time; a single instance can be
/// shared across threads and invoked concurrently.
///
/// # Example
///
/// ```rust
/// use plaintext_extractor::{Extractor, HtmlExtractor};
///
/// let extractor = HtmlExtractor::new();
/// let text = extractor.plain_text("<h1>Title</h1><p>Body</p>")?;
/// assert_eq!(text, "Title\nBody\n");
/// # Ok::<(), plaintext_extractor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    block_tags: HashSet<String>,
}

impl HtmlExtractor {
    /// Creates an extractor with the default block-tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_block_tags(std::iter::empty::<&str>())
    }

    /// Creates an extractor whose block-tag set is the default set plus the
    /// given additional tags (matched case-insensitively).
    pub fn with_block_tags<I, S>(additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut block_tags: HashSet<String> = DEFAULT_BLOCK_TAGS
            .iter()
            .map(|tag| (*tag).to_string())
            .collect();
        block_tags.extend(additional.into_iter().map(|tag| tag.into().to_ascii_lowercase()));
        Self { block_tags }
    }

    fn extract_node(&self, node: &NodeRef, idx: usize, out: &mut String) {
        // The list marker must precede any of the item's own content.
        match list_item_type(node) {
            ListItemType::Ordered => out.push_str(&format!("{idx}. ")),
            ListItemType::Unordered => out.push_str("- "),
            ListItemType::None => {}
        }

        if node.is_text() {
            let text: StrTendril = node.text();
            if is_first_child_of_list_item(node) {
                // Markup indentation inside a list item would otherwise leave
                // a spurious gap right after the marker.
                out.push_str(text.trim_start_matches(is_space));
            } else {
                out.push_str(&text);
            }
        }

        let tag = tag_name(node);
        if tag.as_deref() == Some("br") {
            out.push('\n');
            return;
        }

        // Only a list numbers its direct children; nested lists restart
        // their own counter at their own level.
        let is_list = matches!(tag.as_deref(), Some("ul" | "ol"));
        let mut child_idx = 0;
        for child in node.children() {
            if is_list {
                child_idx += 1;
            }
            self.extract_node(&child, child_idx, out);
        }

        if let Some(tag) = tag {
            if self.block_tags.contains(&tag) {
                out.push('\n');
            }
        }
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HtmlExtractor {
    fn plain_text(&self, input: &str) -> Result<String> {
        // html5ever recovers from any malformed markup and always produces a
        // tree with an `html` element, so parsing itself cannot fail here.
        let doc = Document::from(input);
        let sel = doc.select("html");
        let Some(root) = sel.nodes().first() else {
            return Ok(String::new());
        };

        let mut buf = String::new();
        self.extract_node(root, 0, &mut buf);
        Ok(normalize(&buf))
    }
}

/// Lowercase tag name of an element node, `None` for text/comment/doctype.
fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|name| name.to_ascii_lowercase())
}

/// Walks parent links until an enclosing `ul`/`ol` or the root is found.
/// Recomputed per node; the walk is bounded by document nesting depth.
fn list_item_type(node: &NodeRef) -> ListItemType {
    if tag_name(node).as_deref() != Some("li") {
        return ListItemType::None;
    }

    let mut ancestor = node.parent();
    while let Some(parent) = ancestor {
        match tag_name(&parent).as_deref() {
            Some("ul") => return ListItemType::Unordered,
            Some("ol") => return ListItemType::Ordered,
            _ => ancestor = parent.parent(),
        }
    }

    ListItemType::None
}

/// A text node that is the first child of a list item. Given
/// `<li>This is a <b>bold</b> item.</li>` only the leading `This is a `
/// text node qualifies; later text nodes keep their whitespace.
fn is_first_child_of_list_item(node: &NodeRef) -> bool {
    if !node.is_text() || node.prev_sibling().is_some() {
        return false;
    }
    node.parent()
        .is_some_and(|parent| list_item_type(&parent) != ListItemType::None)
}
