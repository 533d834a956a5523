//! RAG (Retrieval-Augmented Generation) module
//!
//! This module provides the query side of the pipeline, operating over a
//! previously built vector index:
//! - Semantic retrieval of knowledge-base chunks
//! - Context assembly from retrieved chunks
//! - Prompt construction for the support agent
//! - Streaming answer generation
//!
//! # Examples
//!
//! ```rust,no_run
//! use kbrag::config::AppConfig;
//! use kbrag::rag::RagService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = RagService::new(&config)?;
//!
//!     let response = service.query_stream("What is the warranty period?").await?;
//!     let answer = response.collect_all().await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod pipeline;
pub mod prompts;
pub mod retriever;

pub use context::ContextAssembler;
pub use pipeline::RagService;
pub use retriever::Retriever;

pub use crate::store::ScoredChunk;

/// Number of chunks retrieved as context for each question.
pub const RETRIEVAL_TOP_K: usize = 2;
