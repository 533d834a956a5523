//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and accessors.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::*;

    // ====== Default Value Tests ======

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        // Embedding defaults match the local Ollama minilm setup
        assert_eq!(config.embedding_dimension(), 384);
        assert_eq!(config.embedding_model(), "all-minilm");

        // LLM defaults match a stock local Ollama install
        assert_eq!(config.llm_endpoint(), "http://localhost:11434");
        assert_eq!(config.llm_key(), "ollama");
        assert_eq!(config.llm_model(), "mistral:latest");

        assert_eq!(config.index_path(), "vector_index");
    }

    #[test]
    fn test_index_config_default() {
        let config = IndexConfig::default();
        assert_eq!(config.path, "vector_index");
    }

    #[test]
    fn test_logging_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            backtrace: true,
        };

        assert_eq!(config.level, "debug");
        assert!(config.backtrace);
    }

    // ====== LLM Config Tests ======

    #[test]
    fn test_llm_config_creation() {
        let config = LlmConfig {
            llm_endpoint: "http://localhost:11434".to_string(),
            llm_key: "ollama".to_string(),
            llm_model: "mistral:latest".to_string(),
        };

        assert!(config.llm_endpoint.contains("11434"));
        assert_eq!(config.llm_key, "ollama");
    }

    // ====== File Parsing Tests ======

    #[test]
    fn test_from_file_parses_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[logging]
level = "debug"
backtrace = false

[embeddings]
dimension = 768
model = "nomic-embed-text"

[index]
path = "custom_index"

[llm]
llm_endpoint = "http://10.0.0.5:11434"
llm_key = "ollama"
llm_model = "llama3:8b"
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.embedding_dimension(), 768);
        assert_eq!(config.embedding_model(), "nomic-embed-text");
        assert_eq!(config.index_path(), "custom_index");
        assert_eq!(config.llm_endpoint(), "http://10.0.0.5:11434");
        assert_eq!(config.llm_model(), "llama3:8b");
    }

    #[test]
    fn test_from_file_applies_section_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[logging]
level = "info"
backtrace = true

[embeddings]
dimension = 384
model = "all-minilm"

[llm]
llm_endpoint = "http://localhost:11434"
llm_key = "ollama"
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        // [index] section omitted entirely, llm_model omitted
        assert_eq!(config.index_path(), "vector_index");
        assert_eq!(config.llm_model(), "mistral:latest");
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "logging = nope").unwrap();

        let result = AppConfig::from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = AppConfig::from_file("does/not/exist.toml");
        assert!(result.is_err());
    }
}
