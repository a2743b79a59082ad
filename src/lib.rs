// Root module exports
pub mod battery;
pub mod config;
pub mod error;
pub mod logging;

// Re-export common items for convenience
pub use battery::{
    BatteryReading, ClearHistoryReason, DepletionPrediction, TrajectoryAnalyzer,
};
pub use battery::{
    clear_history_reason, format_time_remaining, has_charging_event, has_stale_data,
    predict_depletion, should_clear_history,
};
pub use config::{AnalyzerConfig, LogLevel};
pub use error::{Error, Result};
pub use logging::configure_logging;
