use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use grist::analysis::analyze_document;
use grist::analysis::tokenizer::Tokenizer;
use grist::config::Config;

/// Grist: distinctive-term ranking for plain-text documents.
///
/// Tokenizes a document, counts every term, scores each one against the
/// document's own token count, and returns the words most distinctive for
/// that document — as a web service or straight in the terminal.
#[derive(Parser)]
#[command(name = "grist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the upload-and-rank web server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "10001")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Rank the terms of a local file and print the result table
    Rank {
        /// Path to the text file to analyze
        file: PathBuf,

        /// Show at most this many rows (the ranking itself holds at most 50)
        #[arg(long, default_value = "50")]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grist=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            grist::web::run_server(config, port, &bind).await?;
        }

        Commands::Rank { file, top } => {
            let config = Config::load()?;
            let tokenizer = Tokenizer::new(&config.alphabets)?;

            let bytes = match std::fs::read(&file) {
                Ok(bytes) => bytes,
                Err(e) => anyhow::bail!("Could not read {}: {e}", file.display()),
            };

            let analysis = analyze_document(&bytes, &tokenizer);
            let source = file.display().to_string();
            grist::output::terminal::display_ranking(&analysis, &source, top);
        }
    }

    Ok(())
}
