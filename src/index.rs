//! In-memory vector index using cosine similarity.
//!
//! The index is built once per ingest batch and is immutable afterwards; a
//! rebuild replaces the whole index. Entries keep insertion order so that
//! equal-score search results rank stably.

use serde::{Deserialize, Serialize};

use crate::document::{Chunk, SearchResult};

/// A chunk's embedding together with the chunk it came from.
///
/// Owned exclusively by the [`VectorIndex`]; created at build time and never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedVector {
    /// The embedding vector for the chunk's text.
    pub embedding: Vec<f32>,
    /// The chunk this vector was computed from.
    pub chunk: Chunk,
}

/// An in-memory collection of chunk embeddings supporting nearest-neighbor
/// search by cosine similarity.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VectorIndex {
    entries: Vec<IndexedVector>,
}

impl VectorIndex {
    /// Build an index from `(chunk, embedding)` pairs, preserving order.
    pub fn new(entries: Vec<(Chunk, Vec<f32>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(chunk, embedding)| IndexedVector { embedding, chunk })
                .collect(),
        }
    }

    /// Number of indexed vectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct source document names among indexed chunks, in first-seen order.
    pub fn source_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !names.iter().any(|n| n == &entry.chunk.source) {
                names.push(entry.chunk.source.clone());
            }
        }
        names
    }

    /// Return the `k` most similar chunks to the query embedding, ordered by
    /// descending cosine similarity.
    ///
    /// `k` is effectively clamped to the index size. Equal scores keep
    /// insertion order (the sort is stable). An empty index returns an empty
    /// `Vec`.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<SearchResult> {
        let mut scored: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|entry| SearchResult {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(&entry.embedding, query),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str, source: &str, seq: usize) -> Chunk {
        Chunk { text: text.to_string(), source: source.to_string(), seq }
    }

    #[test]
    fn empty_index_returns_empty_result() {
        let index = VectorIndex::default();
        assert!(index.search(&[1.0, 0.0], 5).is_empty());
    }

    #[test]
    fn k_is_clamped_to_index_size() {
        let index = VectorIndex::new(vec![
            (chunk("a", "x.pdf", 0), vec![1.0, 0.0]),
            (chunk("b", "x.pdf", 1), vec![0.0, 1.0]),
        ]);
        assert_eq!(index.search(&[1.0, 1.0], 5).len(), 2);
    }

    #[test]
    fn cosine_is_scale_invariant() {
        let index = VectorIndex::new(vec![
            (chunk("long", "x.pdf", 0), vec![10.0, 0.0]),
            (chunk("short", "x.pdf", 1), vec![0.0, 0.1]),
        ]);
        let results = index.search(&[0.0, 1.0], 2);
        assert_eq!(results[0].chunk.text, "short");
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let index = VectorIndex::new(vec![
            (chunk("first", "x.pdf", 0), vec![1.0, 0.0]),
            (chunk("second", "x.pdf", 1), vec![2.0, 0.0]),
            (chunk("third", "x.pdf", 2), vec![3.0, 0.0]),
        ]);
        let results = index.search(&[1.0, 0.0], 3);
        let texts: Vec<&str> = results.iter().map(|r| r.chunk.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn zero_magnitude_embedding_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn source_names_are_distinct_and_ordered() {
        let index = VectorIndex::new(vec![
            (chunk("a", "one.pdf", 0), vec![1.0]),
            (chunk("b", "two.pdf", 0), vec![1.0]),
            (chunk("c", "one.pdf", 1), vec![1.0]),
        ]);
        assert_eq!(index.source_names(), vec!["one.pdf", "two.pdf"]);
    }
}
