//! Markdown download file.
//!
//! The file holds the generated summary exactly as the model returned it;
//! nothing is prepended, trimmed or reformatted.

use crate::utils::ensure_writable_dir;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const SUMMARY_FILENAME: &str = "news_summary.md";

/// Write `summary` to `{output_dir}/news_summary.md` and return the path.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_summary(output_dir: &Path, summary: &str) -> Result<PathBuf, Box<dyn Error>> {
    ensure_writable_dir(output_dir).await?;
    let path = output_dir.join(SUMMARY_FILENAME);
    fs::write(&path, summary).await?;
    info!(path = %path.display(), bytes = summary.len(), "Wrote Markdown summary");
    Ok(path)
}
