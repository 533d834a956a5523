//! Knowledge base loading and chunk construction.
//!
//! The knowledge base is a JSON array of records. Each record is rendered
//! into a `"name: details"` text block (details pretty-printed), which the
//! chunker then splits into bounded windows that all carry the record's
//! metadata.

use std::path::Path;

use tracing::debug;

use crate::chunker::TextChunker;
use crate::errors::KbRagError;
use crate::models::{ChunkMetadata, DocumentChunk, KnowledgeRecord};
use crate::Result;

/// Reads and parses the knowledge base file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a JSON
/// array of records.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<KnowledgeRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(KbRagError::KnowledgeBaseError(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<KnowledgeRecord> = serde_json::from_str(&content)?;
    debug!("Loaded {} knowledge records from {}", records.len(), path.display());
    Ok(records)
}

/// Renders a record into its chunkable text form: the record name, a colon,
/// and the pretty-printed details payload.
pub fn record_content(record: &KnowledgeRecord) -> Result<String> {
    let details = serde_json::to_string_pretty(&record.details)?;
    Ok(format!("{}: {}", record.name, details))
}

/// Turns records into document chunks, splitting oversized content into
/// overlapping windows. Every window of a record carries the same metadata.
pub fn build_chunks(records: &[KnowledgeRecord], chunker: &TextChunker) -> Result<Vec<DocumentChunk>> {
    let mut chunks = Vec::with_capacity(records.len());
    for record in records {
        let content = record_content(record)?;
        let metadata = ChunkMetadata::new(record.record_type.clone(), record.name.clone());
        for window in chunker.split(&content) {
            chunks.push(DocumentChunk::new(window, metadata.clone()));
        }
    }
    Ok(chunks)
}
