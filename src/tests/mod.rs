
use crate::models::ChunkMetadata;
use crate::models::DocumentChunk;
use crate::models::KnowledgeRecord;

/// Test helper producing a small knowledge base in the shipped layout
pub fn sample_records() -> Vec<KnowledgeRecord> {
    vec![
        KnowledgeRecord {
            name: "WarrantyPolicy".to_string(),
            record_type: "policy".to_string(),
            details: serde_json::json!({"duration": "1 year"}),
        },
        KnowledgeRecord {
            name: "ShippingPolicy".to_string(),
            record_type: "policy".to_string(),
            details: serde_json::json!({"standard": "5 business days"}),
        },
        KnowledgeRecord {
            name: "ReturnPolicy".to_string(),
            record_type: "policy".to_string(),
            details: serde_json::json!({"window": "30 days"}),
        },
    ]
}

/// Test helper producing chunks with distinct, recognizable contents
pub fn sample_chunks() -> Vec<DocumentChunk> {
    vec![
        DocumentChunk::new(
            "WarrantyPolicy: covers defects for 1 year",
            ChunkMetadata::new("policy", "WarrantyPolicy"),
        ),
        DocumentChunk::new(
            "ShippingPolicy: standard delivery in 5 business days",
            ChunkMetadata::new("policy", "ShippingPolicy"),
        ),
        DocumentChunk::new(
            "ReturnPolicy: returns accepted within 30 days",
            ChunkMetadata::new("policy", "ReturnPolicy"),
        ),
    ]
}

/// Test helper building a deterministic unit vector along one axis
pub fn basis_vector(dimension: usize, axis: usize) -> Vec<f32> {
    let mut vector = vec![0.0; dimension];
    vector[axis] = 1.0;
    vector
}
