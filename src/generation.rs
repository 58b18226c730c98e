//! Generation provider trait for producing answers from prompts.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that generates text from a prompt.
///
/// The pipeline hands it a fully assembled prompt (context plus question);
/// the provider is a thin seam over a language-model backend. Timeouts and
/// any bounded retry policy live behind this trait, not in the pipeline.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate a completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Generation`](crate::RagError::Generation) on
    /// transport, auth, or rate-limit failure.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
