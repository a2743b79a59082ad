//! Drainage segmentation and depletion forecasting
//!
//! Charging events are outliers that would corrupt a naive fit across the
//! whole history, so the forecast is restricted to the single longest run of
//! readings with no charging jump inside it. A plain least-squares line over
//! that run projects when the charge reaches 0%.

use super::history::sorted_by_timestamp;
use super::{BatteryReading, DepletionPrediction, MS_PER_DAY};
use crate::config::AnalyzerConfig;

/// Project the depletion instant from the longest drainage run.
///
/// Returns `None` whenever the data cannot support a forecast: fewer than
/// `min_trend_points` readings overall or in the chosen run, a flat or
/// rising trend, or a projection farther than `max_horizon_ms` past `now`
/// (near-zero slopes put the crossing implausibly far out and are treated
/// as noise rather than signal).
pub fn predict_depletion(
    readings: &[BatteryReading],
    now: i64,
    config: &AnalyzerConfig,
) -> Option<DepletionPrediction> {
    if readings.len() < config.min_trend_points {
        return None;
    }

    let ordered = sorted_by_timestamp(readings);
    let (start, end) = best_drainage_segment(&ordered, config.charging_jump_threshold);
    let segment = &ordered[start..end];
    if segment.len() < config.min_trend_points {
        crate::debug_log!(
            "battery",
            "longest drainage run has {} points, {} needed for a trend",
            segment.len(),
            config.min_trend_points
        );
        return None;
    }

    let (slope, intercept) = fit_linear_trend(segment)?;
    if slope >= 0.0 {
        crate::debug_log!("battery", "trend is flat or rising ({:.6}/ms), no forecast", slope);
        return None;
    }

    // Zero crossing of percent = slope * (t - t0) + intercept. Slope is
    // strictly negative here, so the division cannot blow up.
    let t0 = segment[0].timestamp;
    let offset_ms = intercept / -slope;
    if (t0 - now) as f64 + offset_ms > config.max_horizon_ms as f64 {
        crate::debug_log!(
            "battery",
            "projected depletion {:.0} days out, beyond the realistic horizon",
            offset_ms / MS_PER_DAY as f64
        );
        return None;
    }
    let depletion_timestamp = t0 + offset_ms.round() as i64;

    Some(DepletionPrediction {
        depletion_timestamp,
        drainage_rate_percent_per_day: -slope * MS_PER_DAY as f64,
        data_points_used: segment.len(),
    })
}

/// Find the index range (half-open) of the longest drainage run.
///
/// A run closes when a consecutive pair jumps up by more than
/// `jump_threshold`; the post-jump reading opens the next run. Ties on
/// length go to the most recent run.
fn best_drainage_segment(ordered: &[&BatteryReading], jump_threshold: f64) -> (usize, usize) {
    let mut best: (usize, usize) = (0, 0);
    let mut start = 0;
    for i in 1..ordered.len() {
        if ordered[i].percent_charged - ordered[i - 1].percent_charged > jump_threshold {
            if i - start >= best.1 - best.0 {
                best = (start, i);
            }
            start = i;
        }
    }
    if ordered.len() - start >= best.1 - best.0 {
        best = (start, ordered.len());
    }
    best
}

/// Ordinary least squares of charge percent on sample time.
///
/// Timestamps are rebased to the run's first sample before accumulating so
/// the sums stay well inside f64 precision; the returned intercept is the
/// fitted percent at that first sample. Returns `None` when the run has no
/// time spread to fit against (all timestamps equal).
fn fit_linear_trend(segment: &[&BatteryReading]) -> Option<(f64, f64)> {
    let n = segment.len() as f64;
    let t0 = segment[0].timestamp;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for r in segment {
        let x = (r.timestamp - t0) as f64;
        let y = r.percent_charged;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some((slope, intercept))
}
