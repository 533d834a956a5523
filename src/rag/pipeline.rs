//! Complete RAG pipeline: Retrieve -> Assemble -> Generate

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;
use crate::llm::ChatMessage;
use crate::llm::LlmService;
use crate::llm::StreamingResponse;
use crate::rag::prompts::build_support_prompt;
use crate::rag::ContextAssembler;
use crate::rag::Retriever;
use crate::rag::RETRIEVAL_TOP_K;
use crate::store::VectorStore;

/// Complete RAG service
pub struct RagService {
    retriever: Retriever,
    context_assembler: ContextAssembler,
    llm_service: LlmService,
}

impl RagService {
    /// Create a new RAG service over a previously built index
    ///
    /// # Errors
    /// - Index load errors (missing artifact, dimension mismatch, corrupt files)
    /// - Embedding service configuration errors (invalid endpoint)
    /// - LLM service configuration errors
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = Arc::new(VectorStore::load(
            config.index_path(),
            config.embedding_dimension(),
        )?);
        let embedding_service = Arc::new(EmbeddingService::new(config)?);
        let retriever = Retriever::new(store, embedding_service);
        let context_assembler = ContextAssembler::default();
        let llm_service = LlmService::new(config)?;

        Ok(Self {
            retriever,
            context_assembler,
            llm_service,
        })
    }

    /// Answer a question with a streaming generation grounded in
    /// retrieved knowledge-base chunks
    ///
    /// # Errors
    /// - Query embedding errors (Ollama unreachable, embedding model missing)
    /// - Index search errors
    /// - LLM errors while starting the generation
    pub async fn query_stream(&self, question: &str) -> Result<StreamingResponse> {
        info!("Processing RAG query: {}", question);

        // Step 1: Retrieve relevant chunks
        debug!("Step 1: Retrieving chunks");
        let results = self.retriever.retrieve(question, RETRIEVAL_TOP_K).await?;

        debug!("Retrieved {} results", results.len());

        // Step 2: Assemble context
        debug!("Step 2: Assembling context");
        let context = self.context_assembler.assemble(&results);

        // Step 3: Generate answer using LLM
        debug!("Step 3: Starting generation");
        let prompt = build_support_prompt(question, &context);
        let messages = vec![ChatMessage::user(prompt)];

        self.llm_service.chat_stream(messages).await
    }
}
