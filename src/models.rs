//! Data models for fetched articles and the per-request summary result.
//!
//! This module defines the data that flows through one `summarize` call:
//! - [`ArticleText`]: Text extracted from one fetched page
//! - [`SummaryResult`]: The optional consolidated summary plus error messages
//!
//! Nothing here outlives a single request.

use serde::{Deserialize, Serialize};

/// Text extracted from a single fetched web page.
///
/// The content may legitimately be empty; some pages carry no extractable
/// text and that is not treated as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleText {
    /// The URL the text was fetched from.
    pub source: String,
    /// The extracted page text.
    pub content: String,
}

impl ArticleText {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}

/// Outcome of one `summarize` request.
///
/// `summary` is present only when at least one article was fetched and the
/// generation call succeeded. `errors` holds loader errors in input order,
/// followed by at most one generation error, and may be non-empty even when
/// a summary is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummaryResult {
    /// The generated Markdown summary, exactly as returned by the model.
    pub summary: Option<String>,
    /// Human-readable error messages.
    pub errors: Vec<String>,
}

impl SummaryResult {
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }
}
