//! Data types for documents, chunks, search results, and chat turns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named input to ingestion: a document name plus its raw PDF bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInput {
    /// Document name, unique within a processing batch.
    pub name: String,
    /// The raw byte stream of the document.
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    /// Create a new input from a name and raw bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }
}

/// A source document with its extracted text.
///
/// Created at extraction time and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Document name, unique within a processing batch.
    pub name: String,
    /// The full extracted text, page texts concatenated in page order.
    pub text: String,
    /// Whitespace-separated word count of the extracted text.
    pub word_count: usize,
}

impl Document {
    /// Create a document from a name and extracted text, computing the word count.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        Self { name: name.into(), text, word_count }
    }
}

/// A bounded segment of a [`Document`]'s text, the unit of embedding and retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// The text content of the chunk.
    pub text: String,
    /// Name of the source document.
    pub source: String,
    /// Sequence index of this chunk within its document.
    pub seq: usize,
}

/// A retrieved [`Chunk`] paired with a similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// The cosine similarity score (higher is more relevant).
    pub score: f32,
}

/// A generated answer together with the document names cited in its context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    /// The generated answer text.
    pub text: String,
    /// Distinct source document names among the retrieved chunks.
    pub sources: Vec<String>,
}

/// One question/answer exchange recorded in the session history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    /// The user's question.
    pub question: String,
    /// The assembled context supplied to the generation provider.
    pub context: String,
    /// The generated answer text.
    pub answer: String,
    /// Distinct source document names cited for this turn.
    pub sources: Vec<String>,
    /// When the turn was recorded.
    pub created_at: DateTime<Utc>,
}
