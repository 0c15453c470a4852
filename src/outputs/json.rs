//! JSON output for scripting.
//!
//! Serializes the request outcome together with the input URLs and a local
//! timestamp.
//!
//! ```json
//! {
//!   "generated_at": "2025-05-06T08:12:44.512+02:00",
//!   "sources": ["https://example.com/a"],
//!   "summary": "sub heading: ...",
//!   "errors": []
//! }
//! ```

use crate::models::SummaryResult;
use crate::utils::ensure_writable_dir;
use chrono::Local;
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const RESULT_FILENAME: &str = "news_summary.json";

#[derive(Debug, Serialize)]
struct ResultDocument<'a> {
    generated_at: String,
    sources: &'a [String],
    summary: Option<&'a str>,
    errors: &'a [String],
}

/// Write `{json_output_dir}/news_summary.json` and return the path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_result(
    json_output_dir: &Path,
    result: &SummaryResult,
    sources: &[String],
) -> Result<PathBuf, Box<dyn Error>> {
    let document = ResultDocument {
        generated_at: Local::now().to_rfc3339(),
        sources,
        summary: result.summary.as_deref(),
        errors: &result.errors,
    };
    let json = serde_json::to_string_pretty(&document)?;

    ensure_writable_dir(json_output_dir).await?;
    let path = json_output_dir.join(RESULT_FILENAME);
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON result");
    Ok(path)
}
