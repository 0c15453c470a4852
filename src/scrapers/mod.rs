//! Article loading.
//!
//! [`load_articles`] walks a list of URLs one at a time through a
//! [`PageLoader`] and splits the outcome into fetched texts and per-URL
//! errors. A failing URL never stops the ones after it.
//!
//! # Loaders
//!
//! | Loader | Module | Notes |
//! |--------|--------|-------|
//! | Any web page | [`web`] | `reqwest` fetch, `scraper` text extraction |

pub mod web;

use crate::error::LoadError;
use crate::models::ArticleText;
use futures::stream::{self, StreamExt};
use itertools::{Either, Itertools};
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// Fetch collaborator: turns one URL into zero or more documents.
pub trait PageLoader {
    async fn load(&self, url: &str) -> Result<Vec<ArticleText>, Box<dyn Error>>;
}

/// Load every non-blank URL in order.
///
/// Blank and whitespace-only entries are skipped silently. Duplicates are
/// fetched again. Each kind of output keeps the input order.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
pub async fn load_articles<L, S>(loader: &L, urls: &[S]) -> (Vec<ArticleText>, Vec<LoadError>)
where
    L: PageLoader,
    S: AsRef<str>,
{
    let outcomes: Vec<Result<Vec<ArticleText>, LoadError>> = stream::iter(urls)
        .map(AsRef::<str>::as_ref)
        .filter(|url| std::future::ready(!url.trim().is_empty()))
        .then(|url| async move {
            match loader.load(url).await {
                Ok(docs) => {
                    debug!(%url, documents = docs.len(), "Loaded article");
                    Ok(docs)
                }
                Err(e) => {
                    warn!(%url, error = %e, "Article load failed");
                    Err(LoadError::new(url, e))
                }
            }
        })
        .collect()
        .await;

    let (docs, errors): (Vec<Vec<ArticleText>>, Vec<LoadError>) =
        outcomes.into_iter().partition_map(|outcome| match outcome {
            Ok(docs) => Either::Left(docs),
            Err(e) => Either::Right(e),
        });
    let articles: Vec<ArticleText> = docs.into_iter().flatten().collect();

    info!(
        loaded = articles.len(),
        failed = errors.len(),
        "Finished loading articles"
    );
    (articles, errors)
}


#[cfg(test)]
mod tests {
    use super::testing::StubLoader;
    use super::*;

    #[tokio::test]
    async fn test_blank_urls_are_never_fetched() {
        let loader = StubLoader::default();
        let (articles, errors) = load_articles(&loader, &["", "   ", "\t\n"]).await;
        assert!(articles.is_empty());
        assert!(errors.is_empty());
        assert!(loader.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_later_urls() {
        let loader = StubLoader::default()
            .fail("https://bad.example/1", "connection refused")
            .ok("https://good.example/a", "A")
            .fail("https://bad.example/2", "404 Not Found")
            .ok("https://good.example/b", "B");
        let urls = [
            "https://bad.example/1",
            "https://good.example/a",
            "https://bad.example/2",
            "https://good.example/b",
        ];

        let (articles, errors) = load_articles(&loader, &urls).await;

        assert_eq!(
            articles,
            vec![
                ArticleText::new("https://good.example/a", "A"),
                ArticleText::new("https://good.example/b", "B"),
            ]
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].url, "https://bad.example/1");
        assert_eq!(errors[1].url, "https://bad.example/2");
        assert_eq!(
            errors[1].to_string(),
            "Error loading https://bad.example/2: 404 Not Found"
        );
        assert_eq!(loader.calls.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_duplicates_are_fetched_twice() {
        let loader = StubLoader::default().ok("https://good.example/a", "A");
        let urls = vec!["https://good.example/a".to_string(); 2];
        let (articles, errors) = load_articles(&loader, &urls).await;
        assert_eq!(articles.len(), 2);
        assert!(errors.is_empty());
        assert_eq!(loader.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_text_is_not_an_error() {
        let loader = StubLoader::default().ok("https://good.example/empty", "");
        let (articles, errors) = load_articles(&loader, &["https://good.example/empty"]).await;
        assert_eq!(articles, vec![ArticleText::new("https://good.example/empty", "")]);
        assert!(errors.is_empty());
    }
}
