use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::EngineError;
use crate::models::{EarlyResumeSignals, Profile};

/// Everything a caller supplies for one run: peer profiles plus the optional
/// self profile and self-reported signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub self_profile: Option<Profile>,
    #[serde(default)]
    pub signals: Option<EarlyResumeSignals>,
}

/// Reads a JSON snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<ProfileSnapshot, EngineError> {
    let raw = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: ProfileSnapshot =
        serde_json::from_str(&raw).map_err(|source| EngineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        profiles = snapshot.profiles.len(),
        has_self_profile = snapshot.self_profile.is_some(),
        has_signals = snapshot.signals.is_some(),
        "Loaded profile snapshot"
    );
    Ok(snapshot)
}
