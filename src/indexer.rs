//! Knowledge-base indexing pipeline: load -> chunk -> embed -> persist

use std::path::Path;

use tracing::debug;
use tracing::info;

use crate::chunker::TextChunker;
use crate::config::AppConfig;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;
use crate::knowledge;
use crate::store::VectorStore;

/// Counts reported after one indexing run
#[derive(Debug, Clone, Copy)]
pub struct IndexSummary {
    pub records: usize,
    pub chunks: usize,
    pub dimension: usize,
}

/// One-shot indexer that builds the persisted vector artifact
pub struct Indexer {
    embedding_service: EmbeddingService,
    chunker: TextChunker,
}

impl Indexer {
    /// Create a new indexer
    ///
    /// # Errors
    /// - Embedding service configuration errors (invalid endpoint)
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            embedding_service: EmbeddingService::new(config)?,
            chunker: TextChunker::default(),
        })
    }

    /// Build the vector artifact from a knowledge base file.
    ///
    /// Loads records, chunks them, embeds every chunk, and writes the
    /// artifact into `output`, replacing any previous build there. An
    /// empty knowledge base still produces a valid, empty artifact.
    ///
    /// # Errors
    /// - Knowledge base errors (missing file, malformed JSON)
    /// - Embedding generation errors (Ollama unreachable, model missing)
    /// - Index build or save errors
    pub async fn run(&self, input: &Path, output: &Path) -> Result<IndexSummary> {
        info!("Indexing knowledge base from {}", input.display());

        let records = knowledge::load_records(input)?;
        info!("Loaded {} knowledge records", records.len());

        let chunks = knowledge::build_chunks(&records, &self.chunker)?;
        debug!("Split records into {} chunks", chunks.len());

        let texts: Vec<&str> = chunks.iter().map(|chunk| chunk.content.as_str()).collect();
        let embeddings = self.embedding_service.generate_batch(texts).await?;
        debug!("Generated {} embeddings", embeddings.len());

        let dimension = self.embedding_service.dimension();
        let store = VectorStore::build(dimension, chunks, &embeddings)?;
        store.save(output)?;
        info!(
            "Vector index written to {} ({} chunks)",
            output.display(),
            store.len()
        );

        Ok(IndexSummary {
            records: records.len(),
            chunks: store.len(),
            dimension,
        })
    }
}
