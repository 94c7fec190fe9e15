//! ISO 27001 readiness assessor server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use iso_readiness::adapters::ai::{OpenAIConfig, OpenAIProvider};
use iso_readiness::adapters::export::all_exporters;
use iso_readiness::adapters::http::{app_router, AssessmentHandlers};
use iso_readiness::application::{AssessmentHandle, ResultAggregator};
use iso_readiness::config::{AppConfig, ConfigError};
use iso_readiness::domain::catalog::iso27001_catalog;
use iso_readiness::domain::scoring::PromptBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate().map_err(ConfigError::from)?;

    let api_key = config.ai.openai_api_key.clone().unwrap_or_default();
    let provider = OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout()),
    )?;

    let aggregator = ResultAggregator::new(
        Arc::new(provider),
        PromptBuilder::new(config.ai.scoring_strategy),
        config.ai.scoring_concurrency,
    );

    let catalog = iso27001_catalog();
    let handle = AssessmentHandle::for_catalog(&catalog);
    let handlers = AssessmentHandlers::new(handle, Arc::new(aggregator), all_exporters());
    let results_timeout = config.server.results_timeout(&config.ai, catalog.len());
    let app = app_router(handlers, &config.server, results_timeout);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.ai.model,
        strategy = %config.ai.scoring_strategy,
        questions = catalog.len(),
        results_timeout_secs = results_timeout.as_secs(),
        "iso-readiness listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
    }
}
