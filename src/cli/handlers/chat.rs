//! Interactive support agent handler
//!
//! Runs the terminal REPL that answers questions from the indexed
//! knowledge base with streamed LLM responses.

use std::io;
use std::io::Write;

use crate::rag::RagService;
use crate::AppConfig;
use crate::Result;

/// Farewell word that ends the session
const FAREWELL: &str = "bye";

/// Handle the interactive chat command
pub async fn handle_chat_command(config: &AppConfig) -> Result<()> {
    // Load the index before printing the banner so a missing artifact
    // fails with one clear error instead of a broken session.
    let service = RagService::new(config)?;

    println!("Customer Support AI is running. Type 'bye' to quit.");

    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            // EOF (piped input or Ctrl+D) ends the session
            println!();
            break;
        }

        let question = input.trim();
        if question.is_empty() {
            continue;
        }
        if is_farewell(question) {
            println!("Agent: Goodbye!");
            break;
        }

        if let Err(e) = answer_question(&service, question).await {
            println!("Error: {e}. Please check the Ollama setup.");
        }
    }

    Ok(())
}

/// Whether a trimmed input line ends the session
fn is_farewell(line: &str) -> bool {
    line.eq_ignore_ascii_case(FAREWELL)
}

/// Stream one answer to stdout, flushing fragment by fragment
async fn answer_question(service: &RagService, question: &str) -> Result<()> {
    let response = service.query_stream(question).await?;

    print!("Agent: ");
    io::stdout().flush()?;

    let result = response.write_to(&mut io::stdout()).await;
    // End the line even when the stream failed partway through
    println!();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farewell_is_case_insensitive() {
        assert!(is_farewell("bye"));
        assert!(is_farewell("Bye"));
        assert!(is_farewell("BYE"));
    }

    #[test]
    fn test_farewell_requires_exact_word() {
        assert!(!is_farewell("goodbye"));
        assert!(!is_farewell("bye bye"));
        assert!(!is_farewell(""));
    }
}
