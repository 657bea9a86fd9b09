//! Character encoding detection and transcoding.
//!
//! Feeds the bytes entry point: the charset is sniffed from `<meta>`
//! declarations in the document head and the input is decoded to UTF-8
//! before parsing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("CHARSET_META regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Detect the character encoding declared by an HTML document.
///
/// Looks at `<meta charset>` first, then the `http-equiv` form, examining
/// only the first 1024 bytes. Falls back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);

    for pattern in [&CHARSET_META, &HTTP_EQUIV_CHARSET] {
        let label = pattern.captures(&head).and_then(|c| c.get(1));
        if let Some(encoding) = label.and_then(|m| Encoding::for_label(m.as_str().as_bytes())) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string using the declared encoding.
///
/// Decoding is lossy: invalid sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use plaintext_extractor::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
