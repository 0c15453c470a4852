//! LLM API interaction over an OpenAI-compatible chat-completions endpoint.
//!
//! # Architecture
//!
//! - [`AskAsync`]: Core trait defining async LLM interaction
//! - [`ChatRequest`]: Model, temperature and messages for one completion
//! - [`OpenAiChat`]: `reqwest` implementation of [`AskAsync`]
//!
//! A request is sent exactly once. There is no retry or backoff; any failure
//! is handed back to the caller.

use crate::config::SummarizerConfig;
use crate::utils::truncate_for_log;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Trait for async LLM interaction.
///
/// Implementors send a [`ChatRequest`] to a language model and return its
/// reply. Tests substitute scripted implementations.
pub trait AskAsync {
    /// The type of response returned by the LLM.
    type Response;

    /// Send one chat request and wait for the full reply.
    async fn ask(&self, request: &ChatRequest) -> Result<Self::Response, Box<dyn Error>>;
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// "system", "user" or "assistant"
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// A request carrying `prompt` as its only (user) message.
    pub fn single_user_turn(model: impl Into<String>, temperature: f32, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature,
            messages: vec![Message::user(prompt)],
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChoiceRaw>,
}

#[derive(Debug, Deserialize)]
struct ChoiceRaw {
    message: MessageRaw,
}

#[derive(Debug, Deserialize)]
struct MessageRaw {
    content: Option<String>,
}

/// Errors raised by [`OpenAiChat`].
#[derive(Debug, Error)]
pub enum ChatError {
    /// Invalid client settings (bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed, timed out, or the body could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response (auth, rate limit, invalid request)
    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// The body was not a chat completion
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A well-formed completion without any text
    #[error("Empty response: no completion text returned")]
    EmptyResponse,
}

/// Extract the first choice's text from a chat-completions response body.
///
/// The text is returned untouched; no trimming or validation.
pub fn parse_completion(body: &str) -> Result<String, ChatError> {
    let raw: ChatResponseRaw = serde_json::from_str(body)?;
    raw.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ChatError::EmptyResponse)
}

/// OpenAI-compatible chat-completions client.
#[derive(Clone)]
pub struct OpenAiChat {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl OpenAiChat {
    /// Build a client from validated configuration. The configuration is read
    /// once here and never consulted again.
    pub fn new(config: &SummarizerConfig) -> Result<Self, ChatError> {
        let endpoint = chat_endpoint(&config.api_base)?;
        Ok(Self {
            http: Client::new(),
            endpoint,
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    #[instrument(level = "info", skip_all, fields(model = %request.model))]
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let t0 = Instant::now();
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = t0.elapsed().as_millis();

        if !status.is_success() {
            warn!(%status, elapsed_ms, body = %truncate_for_log(&body, 300), "Chat completion rejected");
            return Err(ChatError::Api { status, body });
        }

        let content = parse_completion(&body)?;
        info!(elapsed_ms, bytes = content.len(), "Chat completion received");
        debug!(preview = %truncate_for_log(&content, 300), "Completion preview");
        Ok(content)
    }
}

impl fmt::Debug for OpenAiChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiChat")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl AskAsync for OpenAiChat {
    type Response = String;

    async fn ask(&self, request: &ChatRequest) -> Result<Self::Response, Box<dyn Error>> {
        self.complete(request).await.map_err(Into::into)
    }
}

/// `{api_base}/chat/completions`, tolerating a trailing slash on the base.
fn chat_endpoint(api_base: &str) -> Result<Url, ChatError> {
    let base = format!("{}/", api_base.trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|u| u.join("chat/completions"))
        .map_err(|e| ChatError::Config(format!("invalid api_base {api_base:?}: {e}")))
}
