//! Persisted vector store module
//!
//! This module owns the on-disk artifact shared by the indexer and the
//! query agent. An artifact directory holds three files:
//! - `index.usearch`: the HNSW vector index
//! - `docstore.json`: the ordered chunk list (vector key = position)
//! - `manifest.json`: dimension and chunk count checked at load time
//!
//! The store is built once per indexing run and never mutated afterwards;
//! re-indexing replaces the artifact wholesale.

pub mod docstore;
pub mod hnsw;

pub use docstore::DocStore;
pub use docstore::Manifest;
pub use hnsw::HnswIndex;

use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::errors::KbRagError;
use crate::errors::Result;
use crate::models::DocumentChunk;

/// Vector index file name inside the artifact directory
pub const INDEX_FILE: &str = "index.usearch";
/// Chunk sidecar file name inside the artifact directory
pub const DOCSTORE_FILE: &str = "docstore.json";
/// Manifest file name inside the artifact directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// A retrieved chunk with its similarity score
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: DocumentChunk,
    pub score: f32,
}

/// The persisted vector index plus its chunk sidecar
pub struct VectorStore {
    index: HnswIndex,
    docstore: DocStore,
}

impl VectorStore {
    /// Build a store from parallel chunk and embedding lists.
    ///
    /// # Errors
    ///
    /// Fails when the lists differ in length or any embedding does not
    /// match `dimension`.
    pub fn build(
        dimension: usize,
        chunks: Vec<DocumentChunk>,
        embeddings: &[Vec<f32>],
    ) -> Result<Self> {
        if chunks.len() != embeddings.len() {
            return Err(KbRagError::IndexError(format!(
                "chunk/embedding count mismatch: {} chunks, {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }

        let index = HnswIndex::create(dimension, chunks.len().max(1))?;
        for (position, embedding) in embeddings.iter().enumerate() {
            index.add(position as u64, embedding)?;
        }

        Ok(Self {
            index,
            docstore: DocStore::new(chunks),
        })
    }

    /// Persist the store into `dir`, overwriting any prior artifact there
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        self.index.save(&dir.join(INDEX_FILE))?;
        self.docstore.save(&dir.join(DOCSTORE_FILE))?;

        let manifest = Manifest {
            dimension: self.index.dimension(),
            chunk_count: self.docstore.len(),
            built_at: Utc::now(),
        };
        manifest.save(&dir.join(MANIFEST_FILE))?;

        info!(
            "Persisted vector index ({} chunks) to {}",
            self.docstore.len(),
            dir.display()
        );
        Ok(())
    }

    /// Load a persisted store, verifying it matches the configured
    /// embedding dimension.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` when the artifact is missing or corrupt and
    /// `DimensionMismatch` when it was built with another dimension.
    pub fn load<P: AsRef<Path>>(dir: P, expected_dimension: usize) -> Result<Self> {
        let dir = dir.as_ref();
        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(KbRagError::IndexError(format!(
                "no vector index found at {}. Run `kbrag index` to build one",
                dir.display()
            )));
        }

        let manifest = Manifest::load(&manifest_path)?;
        if manifest.dimension != expected_dimension {
            return Err(KbRagError::DimensionMismatch {
                expected: expected_dimension,
                actual: manifest.dimension,
            });
        }

        let docstore = DocStore::load(&dir.join(DOCSTORE_FILE))?;
        if docstore.len() != manifest.chunk_count {
            return Err(KbRagError::IndexError(format!(
                "artifact is corrupt: manifest says {} chunks, docstore has {}",
                manifest.chunk_count,
                docstore.len()
            )));
        }

        let index = HnswIndex::load(&dir.join(INDEX_FILE), manifest.dimension)?;
        info!(
            "Loaded vector index ({} chunks, dimension {}) from {}",
            docstore.len(),
            manifest.dimension,
            dir.display()
        );

        Ok(Self { index, docstore })
    }

    /// Return up to `k` chunks nearest to the query embedding, best first
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>> {
        let hits = self.index.search(query, k)?;

        let mut results = Vec::with_capacity(hits.len());
        for (key, score) in hits {
            let chunk = self.docstore.get(key).ok_or_else(|| {
                KbRagError::IndexError(format!("docstore entry missing for key {key}"))
            })?;
            results.push(ScoredChunk {
                chunk: chunk.clone(),
                score,
            });
        }
        Ok(results)
    }

    pub fn len(&self) -> usize {
        self.docstore.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docstore.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }
}
