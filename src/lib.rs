//! # plaintext-extractor
//!
//! Converts marked-up text into normalized plain text suitable for indexing,
//! summarization, or display.
//!
//! The HTML extractor walks the parsed tree in document order, injecting
//! block-level line breaks and list markers, then collapses whitespace into a
//! canonical line-oriented form. Independent extractors compose through
//! [`Pipeline`], so Markdown embedded inside HTML can be flattened by
//! chaining an HTML stage with a Markdown stage.
//!
//! ## Quick Start
//!
//! ```rust
//! use plaintext_extractor::plain_text;
//!
//! let text = plain_text("<ul><li>First</li><li>Second</li></ul>")?;
//! assert_eq!(text, "- First\n- Second\n");
//! # Ok::<(), plaintext_extractor::Error>(())
//! ```
//!
//! ## Composition
//!
//! ```rust
//! use plaintext_extractor::{Extractor, HtmlExtractor, MarkdownExtractor, Pipeline};
//!
//! let pipeline = Pipeline::new(vec![
//!     Box::new(HtmlExtractor::new()),
//!     Box::new(MarkdownExtractor::new()),
//! ]);
//! let text = pipeline.plain_text("<p>see **this**</p>")?;
//! assert_eq!(text, "see this\n");
//! # Ok::<(), plaintext_extractor::Error>(())
//! ```

mod error;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTML tree-walking extraction.
pub mod html;

/// Markdown token stripping.
pub mod markdown;

/// Whitespace normalization of raw extraction buffers.
pub mod normalize;

/// Extractor composition.
pub mod pipeline;

// Public API - re-exports
pub use error::{Error, Result};
pub use html::HtmlExtractor;
pub use markdown::MarkdownExtractor;
pub use pipeline::Pipeline;

/// A plain text extraction capability.
///
/// Anything that turns marked-up input into plain text can participate: the
/// built-in [`HtmlExtractor`] and [`MarkdownExtractor`], a [`Pipeline`] of
/// other extractors, or a plain function. Implementations hold no mutable
/// state between calls, so one instance may serve concurrent callers.
pub trait Extractor: Send + Sync {
    /// Extracts plain text from `input`.
    fn plain_text(&self, input: &str) -> Result<String>;
}

/// Plain functions and closures are extractors, which keeps pipeline stages
/// lightweight to write.
impl<F> Extractor for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn plain_text(&self, input: &str) -> Result<String> {
        self(input)
    }
}

/// Extracts plain text from an HTML string using the default block-tag set.
///
/// # Example
///
/// ```rust
/// use plaintext_extractor::plain_text;
///
/// let text = plain_text("<h1>Title</h1><p>Body</p>")?;
/// assert_eq!(text, "Title\nBody\n");
/// # Ok::<(), plaintext_extractor::Error>(())
/// ```
pub fn plain_text(html: &str) -> Result<String> {
    HtmlExtractor::new().plain_text(html)
}

/// Extracts plain text from HTML bytes with automatic encoding detection.
///
/// The charset is sniffed from `<meta>` declarations and the bytes are
/// transcoded to UTF-8 before extraction; invalid sequences become U+FFFD
/// rather than errors.
///
/// # Example
///
/// ```rust
/// use plaintext_extractor::plain_text_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let text = plain_text_bytes(html)?;
/// assert_eq!(text, "Caf\u{e9}\n");
/// # Ok::<(), plaintext_extractor::Error>(())
/// ```
pub fn plain_text_bytes(html: &[u8]) -> Result<String> {
    plain_text(&encoding::transcode_to_utf8(html))
}
