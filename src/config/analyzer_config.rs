use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::battery::MS_PER_DAY;

/// Upward jump in percentage points between consecutive readings treated as
/// a charging event (strictly greater-than)
const DEFAULT_CHARGING_JUMP_THRESHOLD: f64 = 50.0;

/// Age of the oldest reading after which the history counts as stale
/// (183 days, strictly greater-than)
const DEFAULT_STALE_AFTER_MS: i64 = 183 * MS_PER_DAY;

/// Forecast horizon past which a projected depletion is discarded as noise
/// (5 years of 365 days)
const DEFAULT_MAX_HORIZON_MS: i64 = 5 * 365 * MS_PER_DAY;

/// Minimum readings a drainage run needs before a trend is fitted
const DEFAULT_MIN_TREND_POINTS: usize = 3;

/// Errors raised while loading or saving analyzer settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for this config
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Log verbosity persisted alongside the analyzer thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Tunable thresholds for battery trajectory analysis
///
/// Unknown fields in a settings file are ignored and missing fields fall
/// back to the defaults, so older files keep loading as thresholds are
/// added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Percentage-point jump between consecutive readings treated as charging
    pub charging_jump_threshold: f64,

    /// Maximum age of the oldest reading before history counts as stale
    pub stale_after_ms: i64,

    /// Reject forecasts whose depletion lies farther than this past now
    pub max_horizon_ms: i64,

    /// Minimum points a drainage run needs before a trend is fitted
    pub min_trend_points: usize,

    /// Log verbosity for the analyzer
    pub log_level: LogLevel,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            charging_jump_threshold: DEFAULT_CHARGING_JUMP_THRESHOLD,
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
            max_horizon_ms: DEFAULT_MAX_HORIZON_MS,
            min_trend_points: DEFAULT_MIN_TREND_POINTS,
            log_level: LogLevel::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from the default settings path, falling back to
    /// the defaults when no file exists yet
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_settings_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        crate::debug_log!("config", "loaded analyzer settings from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    /// as needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        crate::debug_log!("config", "saved analyzer settings to {}", path.display());
        Ok(())
    }
}

/// Get the default settings path
fn default_settings_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|config_dir| config_dir.join("draincast").join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}
