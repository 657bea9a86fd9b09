//! Whitespace normalization for raw extraction buffers.
//!
//! The tree walk emits text and line breaks verbatim, which leaves behind
//! markup indentation and stacked newlines from nested block closures. This
//! module produces the canonical line-oriented form: leading whitespace is
//! trimmed, and any whitespace run containing a newline collapses to exactly
//! one newline. Runs of purely horizontal whitespace are left alone.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a maximal whitespace run containing at least one newline.
/// Deliberately the explicit ASCII whitespace class rather than `\s`, which
/// would also swallow Unicode whitespace such as NBSP.
#[allow(clippy::expect_used)]
static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\t\v\f\r ]*\n[\t\n\v\f\r ]*").expect("NEWLINE_RUN regex")
});

/// The whitespace class used throughout extraction: space, tab, newline,
/// carriage return, form feed, vertical tab.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

/// Normalize a raw extraction buffer into its canonical form.
///
/// Trims leading whitespace, then collapses every newline-containing
/// whitespace run to a single `\n`. Idempotent: applying it twice yields the
/// same result as applying it once.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_start_matches(is_space);
    NEWLINE_RUN.replace_all(trimmed, "\n").into_owned()
}
