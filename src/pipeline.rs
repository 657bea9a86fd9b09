//! Extractor composition.
//!
//! [`Pipeline`] chains independent extractors so the output of one stage
//! feeds the next, which lets mixed-markup content (Markdown inside HTML,
//! say) be flattened without either extractor knowing about the other.

use crate::error::{Error, Result};
use crate::Extractor;

/// An ordered chain of extractors, itself an [`Extractor`].
///
/// Stages run exactly once each, in declared order, with no reordering or
/// fallback. The first failing stage aborts the run: its error is returned
/// wrapped in [`Error::Stage`] with the stage index, later stages are never
/// invoked, and no partial output escapes.
///
/// # Example
///
/// ```rust
/// use plaintext_extractor::{Extractor, HtmlExtractor, MarkdownExtractor, Pipeline};
///
/// let pipeline = Pipeline::new(vec![
///     Box::new(HtmlExtractor::new()),
///     Box::new(MarkdownExtractor::new()),
/// ]);
/// let text = pipeline.plain_text("<div> html </div> *markdown*")?;
/// assert_eq!(text, "html\nmarkdown");
/// # Ok::<(), plaintext_extractor::Error>(())
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Extractor>>,
}

impl Pipeline {
    /// Creates a pipeline over the given stages. Order is significant and
    /// preserved. An empty pipeline acts as the identity extractor.
    #[must_use]
    pub fn new(stages: Vec<Box<dyn Extractor>>) -> Self {
        Self { stages }
    }

    /// Number of stages in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Extractor for Pipeline {
    fn plain_text(&self, input: &str) -> Result<String> {
        let mut text = input.to_string();
        for (stage, extractor) in self.stages.iter().enumerate() {
            text = extractor.plain_text(&text).map_err(|source| Error::Stage {
                stage,
                source: Box::new(source),
            })?;
        }
        Ok(text)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append_a(input: &str) -> Result<String> {
        Ok(format!("{input}a"))
    }

    fn append_b(input: &str) -> Result<String> {
        Ok(format!("{input}b"))
    }

    fn uppercase(input: &str) -> Result<String> {
        Ok(input.to_uppercase())
    }

    fn bracket(input: &str) -> Result<String> {
        Ok(format!("[{input}]"))
    }

    #[test]
    fn threads_output_to_input_in_declared_order() {
        let pipeline = Pipeline::new(vec![Box::new(append_a), Box::new(append_b)]);
        match pipeline.plain_text("x") {
            Ok(text) => assert_eq!(text, "xab"),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::new(vec![]);
        assert!(pipeline.is_empty());
        match pipeline.plain_text("unchanged") {
            Ok(text) => assert_eq!(text, "unchanged"),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn pipelines_nest_as_stages() {
        let inner = Pipeline::new(vec![Box::new(uppercase)]);
        let outer = Pipeline::new(vec![Box::new(inner) as Box<dyn Extractor>, Box::new(bracket)]);
        match outer.plain_text("ok") {
            Ok(text) => assert_eq!(text, "[OK]"),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }
}
