//! Command-line interface definitions for News Digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Generation settings can also come from environment variables or a YAML
//! config file; see [`crate::config`].

use clap::Parser;
use std::path::PathBuf;

/// Most article URLs accepted in one run.
pub const MAX_URLS: usize = 5;

/// Command-line arguments for News Digest.
///
/// # Examples
///
/// ```sh
/// # Two sources, summary written to ./news_summary.md
/// news_digest https://example.com/a https://example.org/b
///
/// # Different model, also write a JSON result
/// news_digest --model gpt-4o-mini -j ./json https://example.com/a
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News article URLs (up to 5); blank entries are ignored
    #[arg(required = true, num_args = 1..=MAX_URLS, value_name = "URL")]
    pub urls: Vec<String>,

    /// Output directory for news_summary.md
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Optional output directory for news_summary.json
    #[arg(short, long)]
    pub json_output_dir: Option<PathBuf>,

    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chat model identifier
    #[arg(long, env = "NEWS_DIGEST_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, env = "NEWS_DIGEST_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_BASE")]
    pub api_base: Option<String>,

    /// API key for the chat completions endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_digest",
            "--output-dir",
            "./out",
            "https://good.example/a",
            "https://good.example/b",
        ]);

        assert_eq!(cli.urls, vec!["https://good.example/a", "https://good.example/b"]);
        assert_eq!(cli.output_dir, PathBuf::from("./out"));
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_digest",
            "-o",
            "/tmp/md",
            "-j",
            "/tmp/json",
            "-c",
            "/tmp/config.yaml",
            "https://good.example/a",
        ]);

        assert_eq!(cli.output_dir, PathBuf::from("/tmp/md"));
        assert_eq!(cli.json_output_dir, Some(PathBuf::from("/tmp/json")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.yaml")));
    }

    #[test]
    fn test_cli_default_output_dir() {
        let cli = Cli::parse_from(["news_digest", "https://good.example/a"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_cli_requires_a_url() {
        assert!(Cli::try_parse_from(["news_digest"]).is_err());
    }

    #[test]
    fn test_cli_caps_url_count() {
        let mut argv = vec!["news_digest".to_string()];
        argv.extend((0..=MAX_URLS).map(|i| format!("https://good.example/{i}")));
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
