//! # News Digest
//!
//! Fetches a handful of news article pages, concatenates their text and asks
//! an OpenAI-compatible language model for one consolidated news article: a
//! sub heading followed by a titled paragraph per news item.
//!
//! ## Usage
//!
//! ```sh
//! OPENAI_API_KEY=sk-... news_digest https://example.com/a https://example.org/b
//! ```
//!
//! ## Architecture
//!
//! Each run is one request flowing through two sequential steps:
//! 1. **Loading**: Fetch every non-blank URL, one at a time, keeping per-URL errors
//! 2. **Generating**: Render all texts into the editor prompt and call the model once
//!
//! Failures never abort the run; they are collected as messages next to the
//! optional summary, which is written verbatim to `news_summary.md`.

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod summarizer;
mod utils;

use api::OpenAiChat;
use cli::Cli;
use config::{FileConfig, SummarizerConfig};
use outputs::{json, markdown};
use pipeline::NewsSummarizer;
use scrapers::web::WebPageLoader;
use summarizer::SummaryGenerator;

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Must run before clap reads `env = ...` arguments.
    let dotenv = dotenvy::dotenv();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_digest starting up");
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!(error = %e, "Failed to read .env; continuing with process environment"),
    }

    let args = Cli::parse();
    debug!(urls = ?args.urls, output_dir = %args.output_dir.display(), "Parsed CLI arguments");

    if args.urls.iter().all(|url| url.trim().is_empty()) {
        eprintln!("Please enter at least one URL.");
        return Ok(ExitCode::FAILURE);
    }

    // ---- Load config ----
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path).await?,
        None => FileConfig::default(),
    };
    let config = SummarizerConfig::layered(file_config, &args);
    if let Err(reason) = config.validate() {
        error!(%reason, "Invalid configuration");
        return Err(reason.into());
    }
    info!(model = %config.model, temperature = config.temperature, api_base = %config.api_base, "Configuration ready");

    // ---- Build pipeline ----
    let chat = OpenAiChat::new(&config)?;
    debug!(?chat, "Chat client ready");
    let generator = SummaryGenerator::from_config(chat, &config);
    let summarizer = NewsSummarizer::new(WebPageLoader::new()?, generator);

    let result = summarizer.summarize(&args.urls).await;

    for message in &result.errors {
        error!(%message, "Request error");
        eprintln!("❌ {message}");
    }

    if let Some(json_output_dir) = &args.json_output_dir {
        if let Err(e) = json::write_result(json_output_dir, &result, &args.urls).await {
            error!(error = %e, "Failed to write JSON result");
        }
    }

    let exit = match &result.summary {
        Some(summary) => {
            println!("{summary}");
            match markdown::write_summary(&args.output_dir, summary).await {
                Ok(path) => eprintln!("Summary saved to {}", path.display()),
                Err(e) => error!(error = %e, "Failed to write Markdown summary"),
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No content could be extracted or processed from the provided URLs.");
            ExitCode::FAILURE
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        errors = result.errors.len(),
        summarized = result.has_summary(),
        "Execution complete"
    );

    Ok(exit)
}
