//! LLM chat client module
//!
//! Streams chat completions from an Ollama-compatible endpoint. The wire
//! format is newline-delimited JSON: one object per line, each carrying a
//! fragment of the answer, with the server closing the stream when the
//! generation finishes.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kbrag::config::AppConfig;
//! use kbrag::llm::{ChatMessage, LlmService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = LlmService::new(&config)?;
//!
//!     let response = service
//!         .chat_stream(vec![ChatMessage::user("Say hello")])
//!         .await?;
//!     println!("{}", response.collect_all().await?);
//!
//!     Ok(())
//! }
//! ```

pub mod streaming;

pub use streaming::StreamingResponse;

use futures::stream;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::KbRagError;
use crate::errors::Result;

/// A single chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatChunk {
    #[serde(default)]
    message: Option<ChatDelta>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ChatDelta {
    content: String,
}

/// Client for streaming chat generations
pub struct LlmService {
    endpoint: String,
    model: String,
    client: Client,
}

impl LlmService {
    /// Create a new LLM service from the application configuration
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &AppConfig) -> Result<Self> {
        // No request timeout: a streaming generation has no bounded duration
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| KbRagError::HttpError(e.to_string()))?;

        Ok(Self {
            endpoint: config.llm_endpoint().to_string(),
            model: config.llm_model().to_string(),
            client,
        })
    }

    /// Start a streaming chat generation
    ///
    /// # Errors
    /// - Connection failures and non-success statuses fail the call itself
    /// - Mid-stream faults surface as `Err` items on the returned stream
    pub async fn chat_stream(&self, messages: Vec<ChatMessage>) -> Result<StreamingResponse> {
        let url = format!("{}/api/chat", self.endpoint);
        debug!("Calling Ollama chat API: {}", url);

        let request = ChatRequest {
            model: &self.model,
            messages: &messages,
            stream: true,
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| KbRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(KbRagError::LlmError(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let fragments = stream::try_unfold(LineDecoder::new(response), |mut decoder| async move {
            match decoder.next_fragment().await? {
                Some(fragment) => Ok(Some((fragment, decoder))),
                None => Ok(None),
            }
        });

        Ok(StreamingResponse::new(Box::pin(fragments)))
    }

    /// Get the configured model name
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Incremental NDJSON decoder over a streaming response body
struct LineDecoder {
    response: reqwest::Response,
    buffer: String,
    body_finished: bool,
}

impl LineDecoder {
    fn new(response: reqwest::Response) -> Self {
        Self {
            response,
            buffer: String::new(),
            body_finished: false,
        }
    }

    /// Pull body chunks until a complete line yields a fragment or the
    /// stream ends. Lines without content (the final done marker, blank
    /// keepalives) are skipped.
    async fn next_fragment(&mut self) -> Result<Option<String>> {
        loop {
            while let Some(pos) = self.buffer.find('\n') {
                let line: String = self.buffer.drain(..=pos).collect();
                if let Some(fragment) = parse_chat_line(line.trim())? {
                    return Ok(Some(fragment));
                }
            }

            if self.body_finished {
                // The body may end without a trailing newline
                let rest = std::mem::take(&mut self.buffer);
                return parse_chat_line(rest.trim());
            }

            match self
                .response
                .chunk()
                .await
                .map_err(|e| KbRagError::LlmError(e.to_string()))?
            {
                Some(bytes) => self.buffer.push_str(&String::from_utf8_lossy(&bytes)),
                None => self.body_finished = true,
            }
        }
    }
}

/// Parse one NDJSON line into an answer fragment.
///
/// Returns `Ok(None)` for blank lines, empty-content deltas, and the
/// terminal done marker; in-band error payloads become `LlmError`.
fn parse_chat_line(line: &str) -> Result<Option<String>> {
    if line.is_empty() {
        return Ok(None);
    }

    let chunk: ChatChunk = serde_json::from_str(line)
        .map_err(|e| KbRagError::LlmError(format!("Invalid stream payload: {e}")))?;

    if let Some(error) = chunk.error {
        return Err(KbRagError::LlmError(error));
    }

    Ok(chunk.message.map(|m| m.content).filter(|c| !c.is_empty()))
}
