//! Error types for plaintext-extractor.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Markup parsing failed.
    #[error("markup parsing failed: {0}")]
    Parse(String),

    /// A pipeline stage failed. Carries the zero-based index of the failing
    /// stage and the error it returned; later stages were not invoked.
    #[error("pipeline stage {stage} failed: {source}")]
    Stage {
        /// Zero-based index of the failing stage.
        stage: usize,
        /// The error the stage returned, propagated unchanged.
        #[source]
        source: Box<Error>,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
