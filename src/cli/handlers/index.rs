//! Knowledge base indexing handler

use std::path::Path;

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::indexer::Indexer;
use crate::AppConfig;
use crate::Result;

/// Handle the index command
pub async fn handle_index_command(config: &AppConfig, input: &str) -> Result<()> {
    print_info(&format!("📚 Indexing knowledge base: {input}"));

    let indexer = Indexer::new(config)?;
    let summary = indexer
        .run(Path::new(input), Path::new(config.index_path()))
        .await?;

    if summary.chunks == 0 {
        print_warning("Knowledge base is empty; wrote an empty index");
    }

    println!(
        "   {} records -> {} chunks ({} dimensions) -> {}",
        summary.records,
        summary.chunks,
        summary.dimension,
        config.index_path()
    );
    print_success("Embeddings saved successfully!");

    Ok(())
}
