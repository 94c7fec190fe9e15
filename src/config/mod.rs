//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ISO_READINESS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use iso_readiness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Conventional variable consulted when the prefixed key is absent.
const OPENAI_API_KEY_FALLBACK: &str = "OPENAI_API_KEY";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI-compatible endpoint, scoring strategy)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ISO_READINESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `OPENAI_API_KEY` for the API key
    ///
    /// # Environment Variable Format
    ///
    /// - `ISO_READINESS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ISO_READINESS__AI__SCORING_STRATEGY=first_item` -> `ai.scoring_strategy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(OPENAI_API_KEY_FALLBACK) {
            builder = builder.set_default("ai.openai_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("ISO_READINESS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::ScoringStrategy;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ISO_READINESS__AI__OPENAI_API_KEY",
        "ISO_READINESS__AI__SCORING_STRATEGY",
        "ISO_READINESS__AI__SCORING_CONCURRENCY",
        "ISO_READINESS__SERVER__PORT",
        "ISO_READINESS__SERVER__ENVIRONMENT",
        "OPENAI_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ISO_READINESS__AI__OPENAI_API_KEY", "sk-prefixed");
        env::set_var("ISO_READINESS__AI__SCORING_STRATEGY", "first_item");
        env::set_var("ISO_READINESS__AI__SCORING_CONCURRENCY", "8");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.openai_api_key.as_deref(), Some("sk-prefixed"));
        assert_eq!(config.ai.scoring_strategy, ScoringStrategy::FirstItem);
        assert_eq!(config.ai.scoring_concurrency, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_conventional_api_key_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-conventional");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.openai_api_key.as_deref(), Some("sk-conventional"));
    }

    #[test]
    fn test_prefixed_key_wins_over_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-conventional");
        env::set_var("ISO_READINESS__AI__OPENAI_API_KEY", "sk-prefixed");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(
            result.unwrap().ai.openai_api_key.as_deref(),
            Some("sk-prefixed")
        );
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.scoring_strategy, ScoringStrategy::PerItem);
    }

    #[test]
    fn test_is_production_and_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ISO_READINESS__SERVER__ENVIRONMENT", "production");
        env::set_var("ISO_READINESS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = AppConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }
}
