//! Summarizer configuration.
//!
//! Values are layered, later layers winning:
//! 1. Built-in defaults (`gpt-4o`, temperature `0.5`, the OpenAI endpoint)
//! 2. An optional YAML file (`--config`)
//! 3. Command-line flags and their environment variables
//!
//! The result is validated once and not mutated afterwards.

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Shape of the YAML config file. Every key is optional.
///
/// ```yaml
/// api_base: http://localhost:8080/v1
/// model: gpt-4o-mini
/// temperature: 0.3
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_base: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl FileConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let yaml = tokio::fs::read_to_string(path).await?;
        let file = Self::from_yaml(&yaml)?;
        info!("Loaded configuration file");
        Ok(file)
    }
}

impl SummarizerConfig {
    /// Apply the file layer and then the CLI layer over the defaults.
    pub fn layered(file: FileConfig, cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            api_base: cli
                .api_base
                .clone()
                .or(file.api_base)
                .unwrap_or(defaults.api_base),
            api_key: cli.api_key.clone().or(file.api_key),
            model: cli.model.clone().or(file.model).unwrap_or(defaults.model),
            temperature: cli
                .temperature
                .or(file.temperature)
                .unwrap_or(defaults.temperature),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err("no API key configured (set OPENAI_API_KEY or pass --api-key)".into()),
        }
        if self.model.trim().is_empty() {
            return Err("model name must not be empty".into());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature {} is out of range 0.0..=2.0",
                self.temperature
            ));
        }
        Ok(())
    }
}
