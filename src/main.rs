use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gist::config::Config;
use gist::output;
use gist::summarize::Summarizer;

/// Gist: extractive text summarization.
///
/// Scores every sentence by how often its words appear across the whole
/// document and keeps the highest-scoring ones.
#[derive(Parser)]
#[command(name = "gist", version, about)]
struct Cli {
    /// File to summarize; reads stdin when omitted
    file: Option<PathBuf>,

    /// Number of sentences to keep
    #[arg(long, short = 'n')]
    sentences: Option<usize>,

    /// Emit a JSON record instead of formatted text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gist=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    let sentence_count = cli.sentences.unwrap_or(config.sentence_count);
    info!(bytes = text.len(), sentence_count, "Summarizing input");

    let summary = Summarizer::new(sentence_count).summarize(&text);

    if cli.json {
        let record = output::SummaryRecord { summary: &summary };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        output::terminal::display_summary(&text, &summary, sentence_count);
    }

    Ok(())
}
