//! Text extraction from PDF byte streams.

use tracing::debug;

use crate::error::{RagError, Result};

/// Extracts plain text from a document byte stream.
///
/// Implementations must treat "parses but contains no text" as a success
/// with an empty (or whitespace-only) string; the pipeline turns that into a
/// failed-document entry rather than an error. Only an unreadable or
/// malformed byte stream is an error.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the document.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Extraction`] if the byte stream is not a
    /// well-formed document.
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// A [`TextExtractor`] for PDF byte streams, backed by the
/// [pdf-extract](https://docs.rs/pdf_extract) crate.
///
/// Pages are extracted in page order and concatenated, each page terminated
/// by a newline. A page without extractable text (a scanned image, say)
/// contributes an empty string for that page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| RagError::Extraction { message: e.to_string() })?;

        debug!(page_count = pages.len(), "extracted pdf pages");

        let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
        for page in &pages {
            text.push_str(page);
            text.push('\n');
        }
        Ok(text)
    }
}
