//! Generic web page loader.
//!
//! Fetches any `http`/`https` URL and extracts the page's readable text.
//! HTML pages are reduced to their text nodes (script, style and similar
//! non-content elements are dropped); `text/plain` bodies are kept as-is.
//!
//! There is no retry and no timeout beyond the `reqwest` defaults.

use super::PageLoader;
use crate::models::ArticleText;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use scraper::Html;
use std::error::Error;
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) news_digest";

/// Elements whose text never belongs to the article.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "svg"];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Html,
    PlainText,
}

/// Decide how to read a body from its `Content-Type`. A missing header is
/// treated as HTML.
fn classify(content_type: Option<&str>) -> Result<ContentKind, FetchError> {
    let Some(raw) = content_type else {
        return Ok(ContentKind::Html);
    };
    let mime = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "" | "text/html" | "application/xhtml+xml" => Ok(ContentKind::Html),
        "text/plain" => Ok(ContentKind::PlainText),
        _ => Err(FetchError::UnsupportedContentType(raw.to_string())),
    }
}

/// Collect the visible text of an HTML document, one text node per line.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<String> = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let collapsed = WHITESPACE.replace_all(text.trim(), " ");
        if !collapsed.is_empty() {
            lines.push(collapsed.into_owned());
        }
    }

    lines.join("\n")
}

/// [`PageLoader`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct WebPageLoader {
    http: Client,
}

impl WebPageLoader {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<ArticleText, FetchError> {
        let parsed = Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let response = self.http.get(parsed).send().await?.error_for_status()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let kind = classify(content_type.as_deref())?;
        debug!(content_type = ?content_type, ?kind, "Fetched page");

        let body = response.text().await?;
        let content = match kind {
            ContentKind::Html => extract_text(&body),
            ContentKind::PlainText => body,
        };

        info!(bytes = content.len(), "Extracted article text");
        Ok(ArticleText::new(url, content))
    }
}

impl PageLoader for WebPageLoader {
    async fn load(&self, url: &str) -> Result<Vec<ArticleText>, Box<dyn Error>> {
        let article = self.fetch(url).await?;
        Ok(vec![article])
    }
}
