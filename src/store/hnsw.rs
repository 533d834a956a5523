//! HNSW index wrapper around usearch.
//!
//! Parameters tuned for quality over speed:
//! - M = 16 (connections per layer)
//! - ef_construction = 200 (build-time quality)
//! - ef_search = 100 (search-time quality)

use std::path::Path;
use std::sync::RwLock;

use tracing::debug;
use usearch::{Index, IndexOptions, MetricKind, ScalarKind};

use crate::errors::KbRagError;
use crate::errors::Result;

const CONNECTIVITY: usize = 16;
const EXPANSION_ADD: usize = 200;
const EXPANSION_SEARCH: usize = 100;

fn index_options(dimension: usize) -> IndexOptions {
    IndexOptions {
        dimensions: dimension,
        metric: MetricKind::Cos, // Cosine similarity
        quantization: ScalarKind::F32,
        connectivity: CONNECTIVITY,
        expansion_add: EXPANSION_ADD,
        expansion_search: EXPANSION_SEARCH,
        multi: false, // Single vector per key
    }
}

/// Cosine-metric HNSW index over f32 vectors
pub struct HnswIndex {
    index: RwLock<Index>,
    dimension: usize,
}

impl HnswIndex {
    /// Create an empty index with room for `capacity` vectors
    pub fn create(dimension: usize, capacity: usize) -> Result<Self> {
        let index = Index::new(&index_options(dimension))
            .map_err(|e| KbRagError::IndexError(e.to_string()))?;
        index
            .reserve(capacity)
            .map_err(|e| KbRagError::IndexError(e.to_string()))?;

        Ok(Self {
            index: RwLock::new(index),
            dimension,
        })
    }

    /// Load a previously saved index file
    pub fn load(file: &Path, dimension: usize) -> Result<Self> {
        let path_str = file
            .to_str()
            .ok_or_else(|| KbRagError::IndexError("Invalid path encoding".to_string()))?;

        let index = Index::new(&index_options(dimension))
            .map_err(|e| KbRagError::IndexError(e.to_string()))?;
        index
            .load(path_str)
            .map_err(|e| KbRagError::IndexError(format!("Failed to load: {e}")))?;

        Ok(Self {
            index: RwLock::new(index),
            dimension,
        })
    }

    /// Add a vector under the given key
    #[allow(clippy::readonly_write_lock)] // usearch::Index uses interior mutability
    pub fn add(&self, key: u64, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(KbRagError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }

        let index = self.index.write().unwrap();
        index
            .add(key, vector)
            .map_err(|e| KbRagError::IndexError(e.to_string()))?;

        debug!(key = key, "Added vector");
        Ok(())
    }

    /// Return up to `k` nearest keys with similarity scores (1 - distance),
    /// best first
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(u64, f32)>> {
        if query.len() != self.dimension {
            return Err(KbRagError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let index = self.index.read().unwrap();
        let matches = index
            .search(query, k)
            .map_err(|e| KbRagError::IndexError(e.to_string()))?;

        let results: Vec<(u64, f32)> = matches
            .keys
            .iter()
            .zip(matches.distances.iter())
            .map(|(&key, &dist)| (key, 1.0 - dist)) // Convert distance to similarity
            .collect();

        debug!(k = k, found = results.len(), "Search complete");
        Ok(results)
    }

    /// Write the index to a file
    pub fn save(&self, file: &Path) -> Result<()> {
        let path_str = file
            .to_str()
            .ok_or_else(|| KbRagError::IndexError("Invalid path encoding".to_string()))?;

        let index = self.index.read().unwrap();
        index
            .save(path_str)
            .map_err(|e| KbRagError::IndexError(format!("Failed to save: {e}")))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.index.read().unwrap().size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
