//! Retrieval pipeline orchestrator.
//!
//! The [`RagPipeline`] coordinates the full ingest-and-query workflow by
//! composing a [`TextExtractor`], a [`Chunker`], an [`EmbeddingProvider`],
//! and a [`GenerationProvider`]. One pipeline instance is one processing
//! session: it owns the vector index and the chat history, and the caller
//! owns the pipeline — there is no ambient global state.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docrag::{RagPipeline, RagConfig, DocumentInput};
//!
//! let pipeline = RagPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(Arc::new(embedder))
//!     .generation_provider(Arc::new(generator))
//!     .build()?;
//!
//! let report = pipeline.ingest(&[DocumentInput::new("a.pdf", bytes)]).await;
//! let answer = pipeline.answer("what does the contract say?", 5).await?;
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::chunking::{BoundaryChunker, Chunker};
use crate::config::RagConfig;
use crate::context::{assemble, build_prompt};
use crate::document::{Answer, ChatTurn, Chunk, Document, DocumentInput, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::extract::{PdfExtractor, TextExtractor};
use crate::generation::GenerationProvider;
use crate::index::VectorIndex;

/// Outcome of processing a single document during ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    /// The document was extracted and chunked.
    Succeeded {
        /// Number of chunks produced.
        chunks: usize,
        /// Whitespace-separated word count of the extracted text.
        words: usize,
    },
    /// The document could not be processed; the rest of the batch is unaffected.
    Failed {
        /// Human-readable reason for the failure.
        reason: String,
    },
}

/// Per-document entry in an [`IngestReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentOutcome {
    /// The document's name as given in the input batch.
    pub name: String,
    /// What happened to it.
    pub status: DocumentStatus,
}

/// Report of a batch ingestion.
///
/// Per-document failures are recorded here rather than raised: a corrupt or
/// textless document never aborts the batch. A failed index build is
/// reported in `index_error` while the per-document entries stay as
/// computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestReport {
    /// One entry per input document, in input order.
    pub documents: Vec<DocumentOutcome>,
    /// Number of documents in the batch.
    pub total_files: usize,
    /// Number of documents that extracted and chunked successfully.
    pub succeeded: usize,
    /// Total chunks produced across successful documents.
    pub total_chunks: usize,
    /// Total words extracted across successful documents.
    pub total_words: usize,
    /// Set when the index build failed after document processing.
    pub index_error: Option<String>,
}

/// Counts and source names for the session's current index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    /// Number of distinct documents in the index.
    pub document_count: usize,
    /// Number of indexed chunks.
    pub chunk_count: usize,
    /// Distinct source document names, in first-seen order.
    pub source_names: Vec<String>,
}

/// The retrieval pipeline orchestrator; one instance per processing session.
///
/// Construct via [`RagPipeline::builder()`]. Ingestion builds the vector
/// index as a one-shot full replace; queries are read-only and repeatable.
/// The index is swapped in whole after a successful build, so a search never
/// observes a partially built index.
pub struct RagPipeline {
    config: RagConfig,
    extractor: Arc<dyn TextExtractor>,
    chunker: Arc<dyn Chunker>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    generation_provider: Arc<dyn GenerationProvider>,
    index: RwLock<Option<VectorIndex>>,
    history: RwLock<Vec<ChatTurn>>,
}

impl RagPipeline {
    /// Create a new [`RagPipelineBuilder`].
    pub fn builder() -> RagPipelineBuilder {
        RagPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Ingest a batch of documents: extract → chunk per document, then build
    /// the vector index once over all chunks.
    ///
    /// Each document is processed independently; one document's failure is
    /// reported in the returned [`IngestReport`] and never aborts the rest.
    /// If at least one chunk was produced, all chunks are embedded and the
    /// index is rebuilt as a full replace. An embedding failure during the
    /// build sets `index_error` and leaves any previously built index
    /// untouched.
    pub async fn ingest(&self, inputs: &[DocumentInput]) -> IngestReport {
        let mut documents = Vec::with_capacity(inputs.len());
        let mut all_chunks: Vec<Chunk> = Vec::new();
        let mut succeeded = 0;
        let mut total_words = 0;

        for input in inputs {
            match self.process_document(input) {
                Ok((document, chunks)) => {
                    info!(
                        document.name = %input.name,
                        chunk_count = chunks.len(),
                        word_count = document.word_count,
                        "processed document"
                    );
                    documents.push(DocumentOutcome {
                        name: input.name.clone(),
                        status: DocumentStatus::Succeeded {
                            chunks: chunks.len(),
                            words: document.word_count,
                        },
                    });
                    succeeded += 1;
                    total_words += document.word_count;
                    all_chunks.extend(chunks);
                }
                Err(reason) => {
                    error!(document.name = %input.name, %reason, "document failed");
                    documents.push(DocumentOutcome {
                        name: input.name.clone(),
                        status: DocumentStatus::Failed { reason },
                    });
                }
            }
        }

        let total_chunks = all_chunks.len();
        let mut index_error = None;

        if !all_chunks.is_empty() {
            match self.build_index(all_chunks).await {
                Ok(index) => {
                    info!(chunk_count = index.len(), "built vector index");
                    *self.index.write().await = Some(index);
                }
                Err(e) => {
                    error!(error = %e, "index build failed");
                    index_error = Some(e.to_string());
                }
            }
        }

        IngestReport {
            documents,
            total_files: inputs.len(),
            succeeded,
            total_chunks,
            total_words,
            index_error,
        }
    }

    /// Extract and chunk one document. Returns a failure reason on error or
    /// when no text could be extracted.
    fn process_document(&self, input: &DocumentInput) -> std::result::Result<(Document, Vec<Chunk>), String> {
        let text = self.extractor.extract(&input.bytes).map_err(|e| e.to_string())?;
        if text.trim().is_empty() {
            return Err("no extractable text".to_string());
        }
        let document = Document::new(input.name.clone(), text);
        let chunks = self.chunker.chunk(&document);
        Ok((document, chunks))
    }

    /// Embed all chunks and assemble the index. Aborts on the first
    /// embedding failure rather than producing a partial index.
    async fn build_index(&self, chunks: Vec<Chunk>) -> Result<VectorIndex> {
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self
            .embedding_provider
            .embed_batch(&texts)
            .await
            .map_err(|e| RagError::IndexBuild(e.to_string()))?;

        if embeddings.len() != chunks.len() {
            return Err(RagError::IndexBuild(format!(
                "provider returned {} embeddings for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        Ok(VectorIndex::new(chunks.into_iter().zip(embeddings).collect()))
    }

    /// Retrieve the `k` chunks most similar to `query`.
    ///
    /// Returns an empty `Ok` when no index has been built or the index is
    /// empty; an `Err` means the query embedding itself failed. Results are
    /// ordered by descending similarity, at most `min(k, index size)` of
    /// them.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        {
            let index = self.index.read().await;
            match index.as_ref() {
                None => return Ok(Vec::new()),
                Some(index) if index.is_empty() => return Ok(Vec::new()),
                Some(_) => {}
            }
        }

        let query_embedding = self
            .embedding_provider
            .embed(query)
            .await
            .inspect_err(|e| error!(error = %e, "query embedding failed"))?;

        let index = self.index.read().await;
        let Some(index) = index.as_ref() else {
            return Ok(Vec::new());
        };

        let mut results = index.search(&query_embedding, k);
        if let Some(threshold) = self.config.similarity_threshold {
            results.retain(|r| r.score >= threshold);
        }

        info!(result_count = results.len(), "query completed");
        Ok(results)
    }

    /// Answer a question from the ingested documents: retrieve → assemble
    /// context → generate. Records a [`ChatTurn`] in the session history.
    ///
    /// When nothing has been ingested the generator is still called with an
    /// empty context; the prompt instructs it to say when the context is
    /// insufficient.
    pub async fn answer(&self, query: &str, k: usize) -> Result<Answer> {
        let results = self.retrieve(query, k).await?;
        let assembled = assemble(&results);
        let prompt = build_prompt(&assembled.text, query);

        let text = self
            .generation_provider
            .generate(&prompt)
            .await
            .inspect_err(|e| error!(error = %e, "answer generation failed"))?;

        info!(source_count = assembled.sources.len(), "answer generated");

        self.history.write().await.push(ChatTurn {
            question: query.to_string(),
            context: assembled.text,
            answer: text.clone(),
            sources: assembled.sources.clone(),
            created_at: Utc::now(),
        });

        Ok(Answer { text, sources: assembled.sources })
    }

    /// The session's chat history, oldest turn first.
    pub async fn history(&self) -> Vec<ChatTurn> {
        self.history.read().await.clone()
    }

    /// Counts and source names for the session's current index.
    pub async fn summary(&self) -> SessionSummary {
        let index = self.index.read().await;
        match index.as_ref() {
            Some(index) => {
                let source_names = index.source_names();
                SessionSummary {
                    document_count: source_names.len(),
                    chunk_count: index.len(),
                    source_names,
                }
            }
            None => SessionSummary {
                document_count: 0,
                chunk_count: 0,
                source_names: Vec::new(),
            },
        }
    }
}

/// Builder for constructing a [`RagPipeline`].
///
/// `embedding_provider` and `generation_provider` are required. `config`
/// defaults to [`RagConfig::default()`], the extractor to [`PdfExtractor`],
/// and the chunker to a [`BoundaryChunker`] sized from the config.
#[derive(Default)]
pub struct RagPipelineBuilder {
    config: Option<RagConfig>,
    extractor: Option<Arc<dyn TextExtractor>>,
    chunker: Option<Arc<dyn Chunker>>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    generation_provider: Option<Arc<dyn GenerationProvider>>,
}

impl RagPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the text extractor. Defaults to [`PdfExtractor`].
    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Set the document chunker. Defaults to a [`BoundaryChunker`] using the
    /// configured chunk size and overlap.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the generation provider.
    pub fn generation_provider(mut self, provider: Arc<dyn GenerationProvider>) -> Self {
        self.generation_provider = Some(provider);
        self
    }

    /// Build the [`RagPipeline`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if a required provider is missing.
    pub fn build(self) -> Result<RagPipeline> {
        let config = self.config.unwrap_or_default();
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| RagError::Config("embedding_provider is required".to_string()))?;
        let generation_provider = self
            .generation_provider
            .ok_or_else(|| RagError::Config("generation_provider is required".to_string()))?;
        let extractor = self.extractor.unwrap_or_else(|| Arc::new(PdfExtractor::new()));
        let chunker = self
            .chunker
            .unwrap_or_else(|| Arc::new(BoundaryChunker::new(config.chunk_size, config.chunk_overlap)));

        Ok(RagPipeline {
            config,
            extractor,
            chunker,
            embedding_provider,
            generation_provider,
            index: RwLock::new(None),
            history: RwLock::new(Vec::new()),
        })
    }
}
