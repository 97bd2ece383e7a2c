//! Runtime configuration
//!
//! Configuration is an explicit struct handed to the store and controller
//! at construction, never ambient globals. Values come from environment
//! variables with defaults, so a bare launch works out of the box.

use std::env;
use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};
use thiserror::Error;

const DEFAULT_STATE_PATH: &str = "afk_state.json";
const DEFAULT_SESSION_NAME: &str = "afk-bot";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid UTC offset '{value}': {source}")]
    InvalidOffset {
        value: String,
        source: chrono::ParseError,
    },
}

/// Application configuration for the AFK bot.
#[derive(Debug, Clone)]
pub struct AfkConfig {
    /// Where the presence record is persisted.
    pub state_path: PathBuf,
    /// The process-wide zone, as a fixed UTC offset. Both session start
    /// stamping and "now" reads use it.
    pub utc_offset: FixedOffset,
    /// Transport session handle name.
    pub session_name: String,
    /// Default log level when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for AfkConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            utc_offset: Utc.fix(),
            session_name: DEFAULT_SESSION_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AfkConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `AFK_STATE_PATH`, `AFK_UTC_OFFSET` (RFC3339
    /// style, e.g. `+02:00`), `AFK_SESSION_NAME`, `AFK_LOG_LEVEL`. Unset
    /// variables take their defaults; a malformed offset is a startup
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = AfkConfig::default();

        if let Some(path) = env::var_os("AFK_STATE_PATH") {
            config.state_path = PathBuf::from(path);
        }
        if let Ok(raw) = env::var("AFK_UTC_OFFSET") {
            config.utc_offset = parse_offset(&raw)?;
        }
        if let Ok(name) = env::var("AFK_SESSION_NAME") {
            config.session_name = name;
        }
        if let Ok(level) = env::var("AFK_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }
}

/// Parse an RFC3339-style fixed offset such as `+02:00` or `-05:30`.
pub fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    raw.parse::<FixedOffset>()
        .map_err(|source| ConfigError::InvalidOffset {
            value: raw.to_string(),
            source,
        })
}
