use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::errors::EngineError;

/// Runtime configuration for the `peerpath` binary, loaded from environment
/// variables. Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub vocabulary_path: Option<PathBuf>,
    pub major: Option<String>,
    pub insight_seed: Option<u64>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            snapshot_path: PathBuf::from(require_env("PEERPATH_SNAPSHOT")?),
            vocabulary_path: optional_env("PEERPATH_VOCABULARY").map(PathBuf::from),
            major: optional_env("PEERPATH_MAJOR"),
            insight_seed: optional_env("PEERPATH_INSIGHT_SEED")
                .map(|raw| parse_seed(&raw))
                .transpose()
                .context("PEERPATH_INSIGHT_SEED must be an unsigned integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_seed(raw: &str) -> Result<u64, EngineError> {
    raw.parse::<u64>()
        .map_err(|e| EngineError::Config(format!("invalid insight seed '{raw}': {e}")))
}
