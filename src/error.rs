//! Error types surfaced to the caller as display strings.
//!
//! Both kinds are recoverable: a [`LoadError`] covers one URL and never stops
//! the others, a [`GenerationError`] leaves the request without a summary.
//! Only their `Display` output ends up in [`crate::models::SummaryResult`].

use thiserror::Error;

/// A URL that could not be fetched or extracted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error loading {url}: {cause}")]
pub struct LoadError {
    pub url: String,
    pub cause: String,
}

impl LoadError {
    pub fn new(url: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            url: url.into(),
            cause: cause.to_string(),
        }
    }
}

/// The language-model call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Summarization error: {cause}")]
pub struct GenerationError {
    pub cause: String,
}

impl GenerationError {
    pub fn new(cause: impl ToString) -> Self {
        Self {
            cause: cause.to_string(),
        }
    }
}
