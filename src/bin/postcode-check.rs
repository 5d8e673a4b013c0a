// Copyright (c) 2025 - Cowboy AI, Inc.
//! Postcode Check
//!
//! Classifies each postcode given on the command line and prints one JSON
//! result per line, the same shape the quote form receives.
//!
//! Run with: cargo run --bin postcode-check -- "SW1A 1AA" bt11aa
//!
//! Environment:
//! - `POSTCODE_MIN_LENGTH` - minimum trimmed input length (default 5)
//! - `SERVICED_NATIONS` - comma-separated nations (default "england,scotland,wales")
//! - `RUST_LOG` - tracing filter

use anyhow::{Context, Result};
use tracing::{info, warn};
use watt_savings_intake::{
    ClassifierConfig, IntakeError, IntakeResult, Nation, PostcodeClassifier, PostcodeLookup,
};

/// Load configuration from environment variables
fn config_from_env() -> IntakeResult<ClassifierConfig> {
    let mut config = ClassifierConfig::default();

    if let Ok(value) = std::env::var("POSTCODE_MIN_LENGTH") {
        config.min_input_length = value.trim().parse::<usize>().map_err(|e| {
            IntakeError::Configuration(format!("POSTCODE_MIN_LENGTH={value}: {e}"))
        })?;
    }

    if let Ok(value) = std::env::var("SERVICED_NATIONS") {
        config.serviced_nations = value
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<Nation>())
            .collect::<Result<_, _>>()
            .map_err(|e| IntakeError::Configuration(format!("SERVICED_NATIONS: {e}")))?;
    }

    Ok(config)
}

async fn render(classifier: &PostcodeClassifier, raw: &str) -> IntakeResult<String> {
    if raw.trim().chars().count() < classifier.min_input_length() {
        return Ok(serde_json::to_string(&serde_json::json!({
            "input": raw,
            "verdict": null,
        }))?);
    }

    let result = classifier.lookup(raw, None).await?;
    if let Some(message) = result.coverage_message() {
        warn!(postcode = %result.postcode, "{}", message);
    }
    Ok(serde_json::to_string(&result)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = config_from_env().context("Failed to load postcode-check configuration")?;
    info!(
        min_input_length = config.min_input_length,
        serviced_nations = ?config.serviced_nations,
        "Configuration loaded"
    );

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        anyhow::bail!("usage: postcode-check <postcode>...");
    }

    let classifier = PostcodeClassifier::new(config);
    for raw in &inputs {
        let line = render(&classifier, raw)
            .await
            .with_context(|| format!("Failed to classify {raw:?}"))?;
        println!("{line}");
    }

    Ok(())
}
