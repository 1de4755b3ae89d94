//! Scheduler configuration loading.
//!
//! Settings live in a `[scheduler]` table:
//!
//! ```toml
//! [scheduler]
//! turn_limit = 10000
//! ```
//!
//! A missing table, a missing key, or `turn_limit = 0` all mean unbounded.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use after_types::{SchedulerSettings, SettingsError, TurnLimit};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] SettingsError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    scheduler: Option<RawSchedulerConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchedulerConfig {
    turn_limit: Option<i64>,
}

impl TryFrom<RawConfig> for SchedulerSettings {
    type Error = SettingsError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let turn_limit = match raw.scheduler.and_then(|s| s.turn_limit) {
            Some(value) => TurnLimit::try_from(value)?,
            None => TurnLimit::Unbounded,
        };
        Ok(SchedulerSettings::new(turn_limit))
    }
}

/// Parse scheduler settings from TOML text.
pub fn parse_settings(content: &str) -> Result<SchedulerSettings, ConfigError> {
    let raw: RawConfig = toml::from_str(content)?;
    Ok(SchedulerSettings::try_from(raw)?)
}

/// Load scheduler settings from a file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_settings(path: &Path) -> Result<Option<SchedulerSettings>, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No scheduler config found");
        return Ok(None);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("Failed to read config at {:?}: {}", path, err);
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match parse_settings(&content) {
        Ok(settings) => {
            tracing::debug!(turn_limit = ?settings.turn_limit(), "Loaded scheduler config");
            Ok(Some(settings))
        }
        Err(err) => {
            tracing::warn!("Failed to load config at {:?}: {}", path, err);
            Err(err)
        }
    }
}
