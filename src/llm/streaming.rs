//! Streaming response handling

use std::io::Write;
use std::pin::Pin;

use futures::Stream;
use futures::StreamExt;

use crate::errors::Result;

/// A lazy, finite sequence of answer fragments from the LLM.
///
/// The stream is not restartable; consuming it is the only way through it.
pub struct StreamingResponse {
    stream: Pin<Box<dyn Stream<Item = Result<String>> + Send>>,
}

impl StreamingResponse {
    pub fn new(stream: Pin<Box<dyn Stream<Item = Result<String>> + Send>>) -> Self {
        Self { stream }
    }

    /// Write fragments to `out` as they arrive, flushing after every
    /// fragment so the reader sees text the moment it exists. The caller
    /// owns any prefix or trailing newline around the stream.
    ///
    /// # Errors
    ///
    /// Returns the first stream or write error; fragments already written
    /// stay written.
    pub async fn write_to<W: Write>(mut self, out: &mut W) -> Result<()> {
        while let Some(fragment) = self.stream.next().await {
            write!(out, "{}", fragment?)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Collect all fragments into a single string
    pub async fn collect_all(mut self) -> Result<String> {
        let mut result = String::new();
        while let Some(fragment) = self.stream.next().await {
            result.push_str(&fragment?);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KbRagError;
    use futures::stream;

    fn response_from(fragments: Vec<Result<String>>) -> StreamingResponse {
        StreamingResponse::new(Box::pin(stream::iter(fragments)))
    }

    #[tokio::test]
    async fn test_collect_all_joins_fragments() {
        let response = response_from(vec![
            Ok("The warranty ".to_string()),
            Ok("lasts ".to_string()),
            Ok("1 year.".to_string()),
        ]);

        assert_eq!(response.collect_all().await.unwrap(), "The warranty lasts 1 year.");
    }

    #[tokio::test]
    async fn test_write_to_emits_every_fragment() {
        let response = response_from(vec![Ok("Hello".to_string()), Ok(" there".to_string())]);

        let mut out = Vec::new();
        response.write_to(&mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello there");
    }

    #[tokio::test]
    async fn test_write_to_keeps_partial_output_on_error() {
        let response = response_from(vec![
            Ok("partial ".to_string()),
            Err(KbRagError::LlmError("connection reset".to_string())),
            Ok("never seen".to_string()),
        ]);

        let mut out = Vec::new();
        let result = response.write_to(&mut out).await;

        assert!(matches!(result, Err(KbRagError::LlmError(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "partial ");
    }

    #[tokio::test]
    async fn test_collect_all_propagates_error() {
        let response = response_from(vec![
            Ok("x".to_string()),
            Err(KbRagError::LlmError("boom".to_string())),
        ]);

        assert!(response.collect_all().await.is_err());
    }
}
