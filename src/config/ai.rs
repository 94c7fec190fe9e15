//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use crate::domain::scoring::ScoringStrategy;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Chat completions model
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (any OpenAI-compatible endpoint)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Which answers feed the scoring prompts
    #[serde(default)]
    pub scoring_strategy: ScoringStrategy,

    /// Maximum scoring requests in flight at once
    #[serde(default = "default_scoring_concurrency")]
    pub scoring_concurrency: usize,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ISO_READINESS__AI__MODEL"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !(1..=16).contains(&self.scoring_concurrency) {
            return Err(ValidationError::InvalidScoringConcurrency(
                self.scoring_concurrency,
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            scoring_strategy: ScoringStrategy::default(),
            scoring_concurrency: default_scoring_concurrency(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini-2024-07-18".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_scoring_concurrency() -> usize {
    4
}
