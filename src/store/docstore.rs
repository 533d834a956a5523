//! Chunk sidecar persisted beside the vector index file.
//!
//! Vector keys are positions into the ordered chunk list, so the sidecar
//! and the index describe each other completely.

use std::fs;
use std::path::Path;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::KbRagError;
use crate::errors::Result;
use crate::models::DocumentChunk;

/// Artifact compatibility header checked at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub dimension: usize,
    pub chunk_count: usize,
    pub built_at: DateTime<Utc>,
}

impl Manifest {
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&content)
            .map_err(|e| KbRagError::IndexError(format!("corrupt manifest: {e}")))?;
        Ok(manifest)
    }
}

/// Ordered chunk storage; a chunk's position is its vector key
#[derive(Debug, Default)]
pub struct DocStore {
    chunks: Vec<DocumentChunk>,
}

impl DocStore {
    pub fn new(chunks: Vec<DocumentChunk>) -> Self {
        Self { chunks }
    }

    pub fn get(&self, key: u64) -> Option<&DocumentChunk> {
        self.chunks.get(key as usize)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(&self.chunks)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let chunks = serde_json::from_str(&content)
            .map_err(|e| KbRagError::IndexError(format!("corrupt docstore: {e}")))?;
        Ok(Self { chunks })
    }
}
