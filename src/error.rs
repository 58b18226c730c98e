//! Error types for the `docrag` crate.

use thiserror::Error;

/// Errors that can occur in the retrieval pipeline.
///
/// Two conditions are deliberately *not* errors: a PDF that parses but yields
/// no text (reported as a failed-document entry in the ingest report), and a
/// search against an empty index (returns an empty result).
#[derive(Debug, Error)]
pub enum RagError {
    /// The byte stream is not a well-formed, readable PDF.
    #[error("Extraction error: {message}")]
    Extraction {
        /// A description of the failure.
        message: String,
    },

    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred during answer generation.
    #[error("Generation error ({provider}): {message}")]
    Generation {
        /// The generation provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// Embedding failed while building the index; the whole build is aborted
    /// rather than installing a partial index.
    #[error("Index build error: {0}")]
    IndexBuild(String),

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error in the pipeline orchestration.
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

/// A convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, RagError>;
