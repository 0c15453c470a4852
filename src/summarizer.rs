//! Consolidated summary generation.
//!
//! All article texts are joined with blank lines, dropped into a fixed editor
//! prompt and sent to the language model as a single user turn. The reply is
//! returned exactly as received; it is not checked against the requested
//! layout.

use crate::api::{AskAsync, ChatRequest};
use crate::config::SummarizerConfig;
use crate::models::ArticleText;
use std::error::Error;
use tracing::{info, instrument};

/// Editor prompt. `{context}` receives the joined article texts.
pub const SUMMARY_TEMPLATE: &str = "\
You are a professional news editor and journalist. Your task is to create news articles based on the following sources
SOURCES:
{context}
it should be formatted like this:
sub heading: a comprehensive sentence that highlights in an enticing way what happened in all the news sources, should not be more than two lines
news 1 - some title:
The news summarized with important parts highlighted
news 2 - some title:
The news summarized with important parts highlighted
";

/// Join article bodies with a blank line between them. URLs are left out.
pub fn join_context(articles: &[ArticleText]) -> String {
    articles
        .iter()
        .map(|a| a.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_prompt(articles: &[ArticleText]) -> String {
    SUMMARY_TEMPLATE.replace("{context}", &join_context(articles))
}

/// Turns fetched articles into one consolidated news article.
#[derive(Debug)]
pub struct SummaryGenerator<A> {
    client: A,
    model: String,
    temperature: f32,
}

impl<A> SummaryGenerator<A>
where
    A: AskAsync<Response = String>,
{
    pub fn new(client: A, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    /// Take model and temperature from `config`; the defaults there are
    /// `gpt-4o` and 0.5.
    pub fn from_config(client: A, config: &SummarizerConfig) -> Self {
        Self::new(client, config.model.clone(), config.temperature)
    }

    /// Generate the summary. `articles` must not be empty; errors from the
    /// model call are passed through untouched.
    #[instrument(level = "info", skip_all, fields(articles = articles.len(), model = %self.model))]
    pub async fn generate(&self, articles: &[ArticleText]) -> Result<String, Box<dyn Error>> {
        let prompt = render_prompt(articles);
        info!(prompt_bytes = prompt.len(), "Requesting consolidated summary");
        let request = ChatRequest::single_user_turn(&self.model, self.temperature, prompt);
        self.client.ask(&request).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Model stand-in that replays a fixed answer and keeps each request.
    pub struct ScriptedModel {
        reply: Result<String, String>,
        pub requests: RefCell<Vec<ChatRequest>>,
    }

    impl ScriptedModel {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(cause: &str) -> Self {
            Self {
                reply: Err(cause.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl AskAsync for ScriptedModel {
        type Response = String;

        async fn ask(&self, request: &ChatRequest) -> Result<String, Box<dyn Error>> {
            self.requests.borrow_mut().push(request.clone());
            self.reply.clone().map_err(Into::into)
        }
    }

    impl AskAsync for &ScriptedModel {
        type Response = String;

        async fn ask(&self, request: &ChatRequest) -> Result<String, Box<dyn Error>> {
            (**self).ask(request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedModel;
    use super::*;

    fn articles() -> Vec<ArticleText> {
        vec![
            ArticleText::new("https://good.example/a", "Article A text"),
            ArticleText::new("https://good.example/b", "Article B text"),
        ]
    }

    #[test]
    fn test_context_joins_with_blank_line_and_omits_urls() {
        let context = join_context(&articles());
        assert_eq!(context, "Article A text\n\nArticle B text");
        assert!(!context.contains("good.example"));
    }

    #[test]
    fn test_prompt_keeps_editor_contract() {
        let prompt = render_prompt(&articles());
        assert!(prompt.contains("professional news editor and journalist"));
        assert!(prompt.contains("SOURCES:\nArticle A text\n\nArticle B text\n"));
        assert!(prompt.contains("sub heading:"));
        assert!(prompt.contains("news 1 - some title:"));
        assert!(!prompt.contains("{context}"));

        let sub_heading = prompt.find("sub heading:").unwrap();
        let first_item = prompt.find("news 1 - some title:").unwrap();
        assert!(sub_heading < first_item);
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_turn() {
        let model = ScriptedModel::replying("sub heading: X");
        let generator = SummaryGenerator::new(&model, "gpt-4o-mini", 0.2);

        let summary = generator.generate(&articles()).await.unwrap();
        assert_eq!(summary, "sub heading: X");

        let requests = model.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-4o-mini");
        assert_eq!(requests[0].temperature, 0.2);
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(requests[0].messages[0].role, "user");
        assert_eq!(requests[0].messages[0].content, render_prompt(&articles()));
    }

    #[test]
    fn test_defaults() {
        let generator =
            SummaryGenerator::from_config(ScriptedModel::replying(""), &SummarizerConfig::default());
        assert_eq!(generator.model, "gpt-4o");
        assert_eq!(generator.temperature, 0.5);
    }

    #[tokio::test]
    async fn test_generate_propagates_model_error() {
        let generator = SummaryGenerator::from_config(
            ScriptedModel::failing("rate limited"),
            &SummarizerConfig::default(),
        );
        let err = generator.generate(&articles()).await.unwrap_err();
        assert_eq!(err.to_string(), "rate limited");
    }
}
