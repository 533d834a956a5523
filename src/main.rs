use clap::Parser;
use kbrag::cli::commands::Cli;
use kbrag::cli::commands::Commands;
use kbrag::cli::handlers::handle_chat_command;
use kbrag::cli::handlers::handle_config_command;
use kbrag::cli::handlers::handle_index_command;
use kbrag::cli::output::print_error;
use kbrag::config::AppConfig;
use kbrag::Result;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; --verbose overrides the configured level
    if cli.verbose {
        kbrag::logging::init_logging_with_level("debug")?;
    } else {
        kbrag::logging::init_logging_with_config(&config)?;
    }
    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Index { input } => {
            handle_index_command(&config, &input).await?;
        }
        Commands::Chat => {
            handle_chat_command(&config).await?;
        }
        Commands::Config => {
            handle_config_command(&config)?;
        }
    }

    Ok(())
}
