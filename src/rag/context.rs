//! Context assembly from retrieved chunks

use crate::store::ScoredChunk;

/// Separator placed between chunk contents in the assembled context
const CHUNK_SEPARATOR: &str = "\n\n";

/// Assembler for creating LLM context from retrieved chunks
pub struct ContextAssembler;

impl ContextAssembler {
    /// Create a new context assembler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Assemble context by joining chunk contents in retrieval order.
    ///
    /// No retrieved chunks assemble to an empty string; the prompt
    /// instructs the model how to answer without context.
    #[must_use]
    pub fn assemble(&self, results: &[ScoredChunk]) -> String {
        results
            .iter()
            .map(|result| result.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join(CHUNK_SEPARATOR)
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new()
    }
}
