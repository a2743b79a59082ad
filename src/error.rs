//! Error types for the draincast library

use thiserror::Error;

/// Top-level error type
///
/// The analysis functions themselves never fail: insufficient or anomalous
/// input comes back as `false`, `None` or [`ClearHistoryReason::None`].
/// Errors only arise around the analysis, when settings are loaded or
/// values are serialized for a collaborator.
///
/// [`ClearHistoryReason::None`]: crate::battery::ClearHistoryReason
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
