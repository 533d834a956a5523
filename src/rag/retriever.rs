//! Retrieval module for semantic search over the vector store

use std::sync::Arc;

use tracing::debug;

use crate::cli::output::truncate_str;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;
use crate::store::ScoredChunk;
use crate::store::VectorStore;

/// Retriever for semantic search over indexed knowledge-base chunks
pub struct Retriever {
    store: Arc<VectorStore>,
    embedding_service: Arc<EmbeddingService>,
}

impl Retriever {
    /// Create a new retriever
    pub fn new(store: Arc<VectorStore>, embedding_service: Arc<EmbeddingService>) -> Self {
        Self {
            store,
            embedding_service,
        }
    }

    /// Semantic search using vector embeddings
    pub async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<ScoredChunk>> {
        debug!("Performing semantic search: {}", query);

        // Generate query embedding
        let query_embedding = self.embedding_service.generate(query).await?;

        self.retrieve_with_embedding(&query_embedding, limit)
    }

    /// Semantic search with an already-computed query embedding
    pub fn retrieve_with_embedding(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredChunk>> {
        let results = self.store.search(query_embedding, limit)?;

        for result in &results {
            debug!(
                "Retrieved {} chunk (score {:.3}): {}",
                result.chunk.metadata.name,
                result.score,
                truncate_str(&result.chunk.content, 80)
            );
        }

        Ok(results)
    }
}
