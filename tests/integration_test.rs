use std::fs;

use kbrag::chunker::TextChunker;
use kbrag::knowledge;
use kbrag::store::VectorStore;
use kbrag::KbRagError;
use kbrag::Result;

const DIM: usize = 8;

fn unit_vector(axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; DIM];
    v[axis] = 1.0;
    v
}

#[test]
fn test_index_and_query_roundtrip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let kb_path = dir.path().join("knowledge_base.json");
    fs::write(
        &kb_path,
        r#"[
            {"name": "WarrantyPolicy", "type": "policy", "details": {"duration": "1 year"}},
            {"name": "ShippingPolicy", "type": "policy", "details": {"standard": "5 business days"}}
        ]"#,
    )?;

    let records = knowledge::load_records(&kb_path)?;
    let chunks = knowledge::build_chunks(&records, &TextChunker::default())?;
    assert_eq!(chunks.len(), 2);

    let embeddings = vec![unit_vector(0), unit_vector(1)];
    let store = VectorStore::build(DIM, chunks, &embeddings)?;

    let index_dir = dir.path().join("vector_index");
    store.save(&index_dir)?;

    let loaded = VectorStore::load(&index_dir, DIM)?;
    assert_eq!(loaded.len(), 2);

    let hits = loaded.search(&unit_vector(1), 2)?;
    assert_eq!(hits[0].chunk.metadata.name, "ShippingPolicy");
    assert!(hits[0].chunk.content.contains("5 business days"));

    Ok(())
}

#[test]
fn test_missing_artifact_error_is_actionable() {
    let dir = tempfile::tempdir().unwrap();

    let result = VectorStore::load(dir.path().join("nowhere"), DIM);
    match result {
        Err(KbRagError::IndexError(msg)) => {
            assert!(msg.contains("no vector index found"));
            assert!(msg.contains("kbrag index"));
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected a missing artifact error"),
    }
}

#[test]
fn test_load_rejects_other_dimension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = VectorStore::build(DIM, Vec::new(), &[])?;
    store.save(dir.path())?;

    let result = VectorStore::load(dir.path(), 384);
    match result {
        Err(KbRagError::DimensionMismatch { expected, actual }) => {
            assert_eq!(expected, 384);
            assert_eq!(actual, DIM);
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected a dimension mismatch"),
    }

    Ok(())
}
