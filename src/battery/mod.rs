//! Battery trajectory analysis for managed devices
//!
//! This module is the analysis core of the companion client: pure functions
//! over a device's historical charge readings. It flags anomalous charging
//! jumps, detects history that has aged past the retention horizon, and
//! projects the remaining time until depletion from the longest
//! uninterrupted drainage run.
//!
//! Nothing here performs I/O or keeps state between calls. Reading storage,
//! scheduling, and presentation all live with external collaborators that
//! pass plain values across this boundary.

mod forecast;
mod format;
mod history;

pub use forecast::predict_depletion;
pub use format::format_time_remaining;
pub use history::{
    clear_history_reason, has_charging_event, has_stale_data, should_clear_history,
};

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// One timestamped battery sample for a managed device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// Opaque device identifier
    pub device_id: String,
    /// Charge level in percent, semantically 0.0 to 100.0 (trusted as-is)
    pub percent_charged: f64,
    /// Pack voltage when the device reports one; display only
    pub battery_voltage: Option<f64>,
    /// Sample time in epoch milliseconds; input order is not assumed
    pub timestamp: i64,
}

/// Projected depletion fitted over a device's longest drainage run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepletionPrediction {
    /// Epoch milliseconds at which the fitted trend reaches 0%
    pub depletion_timestamp: i64,
    /// Drain rate magnitude in percentage points per day
    pub drainage_rate_percent_per_day: f64,
    /// Number of readings in the run the trend was fitted over
    pub data_points_used: usize,
}

/// Verdict on whether a device's stored reading history should be cleared
///
/// The analyzer only signals the verdict; deletion is performed by the
/// persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearHistoryReason {
    /// History is healthy
    None,
    /// An abnormal upward charge jump was detected
    ChargingDetected,
    /// The oldest reading is past the retention horizon
    StaleData,
    /// Both charging and staleness triggered
    Both,
}

/// Analyzer bound to a set of thresholds
///
/// Holds only configuration; every method is a pure pass over the readings
/// it is given, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryAnalyzer {
    config: AnalyzerConfig,
}

impl TrajectoryAnalyzer {
    /// Create an analyzer with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Build an analyzer from the persisted settings file, falling back to
    /// the defaults when no file exists
    pub fn from_saved_config() -> crate::error::Result<Self> {
        Ok(Self::with_config(AnalyzerConfig::load()?))
    }

    /// The thresholds this analyzer runs with
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// See [`has_charging_event`]
    pub fn has_charging_event(&self, readings: &[BatteryReading]) -> bool {
        history::has_charging_event(readings, &self.config)
    }

    /// See [`has_stale_data`]
    pub fn has_stale_data(&self, readings: &[BatteryReading], now: i64) -> bool {
        history::has_stale_data(readings, now, &self.config)
    }

    /// See [`should_clear_history`]
    pub fn should_clear_history(&self, readings: &[BatteryReading], now: i64) -> bool {
        history::should_clear_history(readings, now, &self.config)
    }

    /// See [`clear_history_reason`]
    pub fn clear_history_reason(&self, readings: &[BatteryReading], now: i64) -> ClearHistoryReason {
        history::clear_history_reason(readings, now, &self.config)
    }

    /// See [`predict_depletion`]
    pub fn predict_depletion(
        &self,
        readings: &[BatteryReading],
        now: i64,
    ) -> Option<DepletionPrediction> {
        forecast::predict_depletion(readings, now, &self.config)
    }
}
