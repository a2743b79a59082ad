//! Reading hygiene: charging anomalies, stale history, and the clear verdict
//!
//! Charging events and stale data both mean the stored history no longer
//! reflects one continuous drainage behavior, so the periodic evaluation
//! task asks this module whether the persistence layer should wipe it.

use super::{BatteryReading, ClearHistoryReason};
use crate::config::AnalyzerConfig;

/// Order readings by sample time, oldest first.
///
/// The sort is stable, so readings sharing a timestamp keep their input
/// order. Borrows the readings rather than cloning them; the input slice is
/// never touched.
pub(crate) fn sorted_by_timestamp(readings: &[BatteryReading]) -> Vec<&BatteryReading> {
    let mut ordered: Vec<&BatteryReading> = readings.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);
    ordered
}

/// Check whether any chronologically consecutive pair of readings jumps up
/// by more than the charging threshold.
///
/// The threshold is strict: a delta of exactly the threshold is not a
/// charging event. Input order does not matter, readings are re-sorted
/// internally. Fewer than two readings can never contain a jump.
pub fn has_charging_event(readings: &[BatteryReading], config: &AnalyzerConfig) -> bool {
    if readings.len() < 2 {
        return false;
    }
    let ordered = sorted_by_timestamp(readings);
    ordered.windows(2).any(|pair| {
        pair[1].percent_charged - pair[0].percent_charged > config.charging_jump_threshold
    })
}

/// Check whether the oldest reading has aged past the retention horizon.
///
/// Strict boundary: a reading exactly `stale_after_ms` old is not stale.
/// An empty history has nothing to age and is never stale.
pub fn has_stale_data(readings: &[BatteryReading], now: i64, config: &AnalyzerConfig) -> bool {
    match readings.iter().map(|r| r.timestamp).min() {
        Some(oldest) => now - oldest > config.stale_after_ms,
        None => false,
    }
}

/// Combined verdict: clear when either detector fires
pub fn should_clear_history(readings: &[BatteryReading], now: i64, config: &AnalyzerConfig) -> bool {
    has_charging_event(readings, config) || has_stale_data(readings, now, config)
}

/// Verdict with the reason attached, for logging and display
pub fn clear_history_reason(
    readings: &[BatteryReading],
    now: i64,
    config: &AnalyzerConfig,
) -> ClearHistoryReason {
    let reason = match (
        has_charging_event(readings, config),
        has_stale_data(readings, now, config),
    ) {
        (false, false) => ClearHistoryReason::None,
        (true, false) => ClearHistoryReason::ChargingDetected,
        (false, true) => ClearHistoryReason::StaleData,
        (true, true) => ClearHistoryReason::Both,
    };
    if reason != ClearHistoryReason::None {
        crate::debug_log!(
            "battery",
            "history of {} readings flagged for clearing: {:?}",
            readings.len(),
            reason
        );
    }
    reason
}
