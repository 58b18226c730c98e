//! # docrag
//!
//! Document retrieval-augmented generation: ingest PDF documents, split
//! their text into overlapping chunks, embed the chunks into a vector
//! space, and answer natural-language questions by retrieving the most
//! similar chunks and feeding them — with source attribution — to a
//! language model.
//!
//! ## Overview
//!
//! The crate is organized around one session object, the [`RagPipeline`]:
//!
//! - [`TextExtractor`] / [`PdfExtractor`] — PDF bytes → page text
//! - [`Chunker`] / [`BoundaryChunker`] — text → overlapping chunks that
//!   break at paragraph, sentence, or word boundaries
//! - [`EmbeddingProvider`] — chunk text → embedding vector (pluggable)
//! - [`VectorIndex`] — in-memory cosine-similarity search, built once per
//!   ingest batch
//! - [`GenerationProvider`] — assembled prompt → answer text (pluggable)
//!
//! Per-document failures during ingestion never abort the batch; they are
//! reported in the [`IngestReport`]. Query-time failures are typed errors,
//! while "no results" is an empty success — callers can always tell the two
//! apart.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docrag::openai::{OpenAIChatProvider, OpenAIEmbeddingProvider};
//! use docrag::{DocumentInput, RagConfig, RagPipeline};
//!
//! let pipeline = RagPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(Arc::new(OpenAIEmbeddingProvider::from_env()?))
//!     .generation_provider(Arc::new(OpenAIChatProvider::from_env()?))
//!     .build()?;
//!
//! let report = pipeline.ingest(&[DocumentInput::new("a.pdf", pdf_bytes)]).await;
//! println!("{} of {} documents ingested", report.succeeded, report.total_files);
//!
//! let answer = pipeline.answer("What does the contract say about notice?", 5).await?;
//! println!("{}\nSources: {:?}", answer.text, answer.sources);
//! ```
//!
//! ## Features
//!
//! - `openai` — [`openai::OpenAIEmbeddingProvider`] and
//!   [`openai::OpenAIChatProvider`] backed by the OpenAI REST API.

pub mod chunking;
pub mod config;
pub mod context;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod generation;
pub mod index;
pub mod mock;
#[cfg(feature = "openai")]
pub mod openai;
pub mod pipeline;

pub use chunking::{BoundaryChunker, Chunker, split_text};
pub use config::{RagConfig, RagConfigBuilder};
pub use context::{AssembledContext, assemble, build_prompt};
pub use document::{Answer, ChatTurn, Chunk, Document, DocumentInput, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use extract::{PdfExtractor, TextExtractor};
pub use generation::GenerationProvider;
pub use index::{IndexedVector, VectorIndex};
pub use mock::{MockEmbeddingProvider, MockGenerationProvider};
pub use pipeline::{
    DocumentOutcome, DocumentStatus, IngestReport, RagPipeline, RagPipelineBuilder, SessionSummary,
};
