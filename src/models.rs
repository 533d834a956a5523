use serde::{Deserialize, Serialize};

/// One entry of the source knowledge base file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Free-form payload; serialized verbatim into the chunk text
    pub details: serde_json::Value,
}

/// Metadata carried with every chunk through indexing and retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
}

impl ChunkMetadata {
    pub fn new(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
        }
    }
}

/// A bounded unit of text derived from a knowledge record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub content: String,
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    pub fn new(content: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}
