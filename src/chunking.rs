//! Document chunking.
//!
//! Splitting is a greedy forward scan over characters: each chunk takes up
//! to `chunk_size` characters from the cursor, preferring to break at the
//! largest natural boundary inside that window — paragraph, then sentence,
//! then word. The cursor then steps back by `overlap` characters so
//! consecutive chunks share an identical overlap region.

use crate::document::{Chunk, Document};

/// A strategy for splitting documents into chunks.
///
/// Implementations produce [`Chunk`]s carrying the source document name and
/// a per-document sequence index. Embeddings are attached later by the
/// pipeline.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// Returns an empty `Vec` if the document has empty text.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Splits text into overlapping chunks, breaking at natural boundaries.
///
/// Boundary preference inside each window, largest first: paragraph break
/// (`\n\n`), sentence end (`. `, `! `, `? `, or a lone newline), word break
/// (space). A hard cut at `chunk_size` happens only when no usable boundary
/// exists in the window. A boundary is usable only when the resulting chunk
/// is longer than `overlap`, which keeps the cursor moving forward.
///
/// # Example
///
/// ```rust,ignore
/// use docrag::BoundaryChunker;
///
/// let chunker = BoundaryChunker::new(1000, 200);
/// let chunks = chunker.chunk(&document);
/// ```
#[derive(Debug, Clone)]
pub struct BoundaryChunker {
    chunk_size: usize,
    overlap: usize,
}

impl BoundaryChunker {
    /// Create a new `BoundaryChunker`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk, > 0
    /// * `overlap` — number of overlapping characters between consecutive
    ///   chunks, < `chunk_size`
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self { chunk_size, overlap }
    }
}

impl Chunker for BoundaryChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        split_text(&document.text, self.chunk_size, self.overlap)
            .into_iter()
            .enumerate()
            .map(|(seq, text)| Chunk { text, source: document.name.clone(), seq })
            .collect()
    }
}

/// Split `text` into chunks of at most `chunk_size` characters where
/// consecutive chunks share `overlap` trailing/leading characters.
///
/// Requires `chunk_size > overlap`; [`RagConfig`](crate::RagConfig)
/// validates this at build time. Empty text yields an empty `Vec`; text no
/// longer than `chunk_size` yields exactly one chunk.
pub fn split_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let window_end = (start + chunk_size).min(chars.len());
        let end = if window_end == chars.len() {
            // Remainder fits in one chunk — take it whole.
            window_end
        } else {
            find_break(&chars, start, window_end, overlap)
        };

        chunks.push(chars[start..end].iter().collect());

        if end == chars.len() {
            break;
        }
        // The next chunk repeats the trailing `overlap` characters.
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}

/// Find the break position for the window `chars[start..window_end]`.
///
/// Scans for the last occurrence of each boundary class, largest first, and
/// returns the position just past the boundary text. Falls back to
/// `window_end` (a hard cut) when no boundary leaves a chunk longer than
/// `overlap`.
fn find_break(chars: &[char], start: usize, window_end: usize, overlap: usize) -> usize {
    if let Some(end) = last_pair(chars, start, window_end, |a, b| a == '\n' && b == '\n') {
        if end - start > overlap {
            return end;
        }
    }
    let sentence = last_pair(chars, start, window_end, |a, b| {
        (a == '.' || a == '!' || a == '?') && b == ' '
    })
    .max(last_single(chars, start, window_end, |c| c == '\n'));
    if let Some(end) = sentence {
        if end - start > overlap {
            return end;
        }
    }
    if let Some(end) = last_single(chars, start, window_end, |c| c == ' ') {
        if end - start > overlap {
            return end;
        }
    }
    window_end
}

/// Position just past the last two-character boundary matching `pred`, if any.
fn last_pair(
    chars: &[char],
    start: usize,
    window_end: usize,
    pred: impl Fn(char, char) -> bool,
) -> Option<usize> {
    (start..window_end.saturating_sub(1))
        .rev()
        .find(|&i| pred(chars[i], chars[i + 1]))
        .map(|i| i + 2)
}

/// Position just past the last one-character boundary matching `pred`, if any.
fn last_single(
    chars: &[char],
    start: usize,
    window_end: usize,
    pred: impl Fn(char) -> bool,
) -> Option<usize> {
    (start..window_end).rev().find(|&i| pred(chars[i])).map(|i| i + 1)
}
