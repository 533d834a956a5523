//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "kbrag")]
#[command(about = "Knowledge-base RAG tool for indexing and the interactive support agent")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the vector index from a knowledge base file
    Index {
        /// Path to the knowledge base JSON file
        #[arg(short, long, default_value = "knowledge_base.json")]
        input: String,
    },
    /// Start the interactive support agent
    Chat,
    /// Show current configuration
    Config,
}
