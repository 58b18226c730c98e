//! Deterministic mock providers for tests and offline development.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::generation::GenerationProvider;

/// A deterministic [`EmbeddingProvider`] that needs no network.
///
/// Embeds text as a byte histogram: each byte increments one vector
/// component. Identical texts get identical vectors (cosine 1.0) and texts
/// with disjoint alphabets get orthogonal vectors, which makes retrieval
/// outcomes predictable in tests.
#[derive(Debug, Clone)]
pub struct MockEmbeddingProvider {
    dimensions: usize,
}

impl MockEmbeddingProvider {
    /// Create a mock provider producing vectors of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for MockEmbeddingProvider {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimensions];
        for byte in text.bytes() {
            vector[byte as usize % self.dimensions] += 1.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// A [`GenerationProvider`] that returns a canned reply and records every
/// prompt it receives.
#[derive(Debug, Default)]
pub struct MockGenerationProvider {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerationProvider {
    /// Create a mock provider that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), prompts: Mutex::new(Vec::new()) }
    }

    /// Every prompt passed to [`generate`](GenerationProvider::generate), in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(prompt.to_string());
        Ok(self.reply.clone())
    }
}
