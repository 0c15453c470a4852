//! Request orchestration: load every URL, then summarize what was loaded.
//!
//! ```text
//! Idle → Loading → NoContent                  → Done(errors only)
//!                → Generating → ok            → Done(summary)
//!                             → err           → Done(errors only)
//! ```
//!
//! Nothing here is fatal. Every failure ends up as one string in
//! [`SummaryResult::errors`].

use crate::api::AskAsync;
use crate::error::GenerationError;
use crate::models::SummaryResult;
use crate::scrapers::{PageLoader, load_articles};
use crate::summarizer::SummaryGenerator;
use crate::utils::truncate_for_log;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Loads articles and turns them into one consolidated summary.
#[derive(Debug)]
pub struct NewsSummarizer<L, A> {
    loader: L,
    generator: SummaryGenerator<A>,
}

impl<L, A> NewsSummarizer<L, A>
where
    L: PageLoader,
    A: AskAsync<Response = String>,
{
    pub fn new(loader: L, generator: SummaryGenerator<A>) -> Self {
        Self { loader, generator }
    }

    /// Run one request. The URL list is not capped here.
    #[instrument(level = "info", skip_all, fields(urls = urls.len()))]
    pub async fn summarize<S: AsRef<str>>(&self, urls: &[S]) -> SummaryResult {
        let t0 = Instant::now();
        let (articles, load_errors) = load_articles(&self.loader, urls).await;

        let mut result = SummaryResult {
            summary: None,
            errors: load_errors.iter().map(ToString::to_string).collect(),
        };

        if articles.is_empty() {
            warn!(errors = result.errors.len(), "No article content obtained; skipping generation");
            return result;
        }

        match self.generator.generate(&articles).await {
            Ok(summary) => {
                info!(
                    articles = articles.len(),
                    bytes = summary.len(),
                    elapsed_ms = t0.elapsed().as_millis(),
                    preview = %truncate_for_log(&summary, 120),
                    "Summary generated"
                );
                result.summary = Some(summary);
            }
            Err(e) => {
                error!(error = %e, "Summary generation failed");
                result.errors.push(GenerationError::new(e).to_string());
            }
        }

        result
    }
}
