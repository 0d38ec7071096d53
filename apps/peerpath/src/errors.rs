use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the caller-facing edges of the engine: reading snapshot
/// and vocabulary files, and validating configuration values.
///
/// The analysis core itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Short machine-readable code, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Io { .. } => "IO_ERROR",
            EngineError::Parse { .. } => "PARSE_ERROR",
            EngineError::Config(_) => "CONFIG_ERROR",
        }
    }
}
