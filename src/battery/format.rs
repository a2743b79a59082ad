//! Human-readable rendering of a depletion forecast

use super::{DepletionPrediction, MS_PER_DAY};

/// Days folded into one "month" clause (calendar months are not useful at
/// this precision)
const DAYS_PER_MONTH: i64 = 30;

/// Days folded into one "week" clause
const DAYS_PER_WEEK: i64 = 7;

/// Render the time left until the predicted depletion instant.
///
/// Whole days remaining are broken into months, weeks and days, largest
/// unit first; zero-count clauses are skipped. A forecast at or before
/// `now` renders as `"Battery depleted"`, and a remainder under one day as
/// `"Less than a day"`.
pub fn format_time_remaining(prediction: &DepletionPrediction, now: i64) -> String {
    if prediction.depletion_timestamp <= now {
        return "Battery depleted".to_string();
    }

    let remaining_ms = prediction.depletion_timestamp - now;
    let total_days = remaining_ms / MS_PER_DAY;
    let months = total_days / DAYS_PER_MONTH;
    let weeks = (total_days % DAYS_PER_MONTH) / DAYS_PER_WEEK;
    let days = (total_days % DAYS_PER_MONTH) % DAYS_PER_WEEK;

    let mut clauses = Vec::new();
    for (count, unit) in [(months, "month"), (weeks, "week"), (days, "day")] {
        if count > 0 {
            clauses.push(pluralize(count, unit));
        }
    }
    if clauses.is_empty() {
        return "Less than a day".to_string();
    }
    clauses.join(", ")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(depletion_timestamp: i64) -> DepletionPrediction {
        DepletionPrediction {
            depletion_timestamp,
            drainage_rate_percent_per_day: 1.0,
            data_points_used: 3,
        }
    }

    const NOW: i64 = 1_700_000_000_000;

    fn remaining(days: i64) -> String {
        format_time_remaining(&prediction(NOW + days * MS_PER_DAY), NOW)
    }

    #[test]
    fn test_full_breakdown() {
        assert_eq!(remaining(85), "2 months, 3 weeks, 4 days");
    }

    #[test]
    fn test_singular_clauses() {
        assert_eq!(remaining(38), "1 month, 1 week, 1 day");
    }

    #[test]
    fn test_weeks_and_days() {
        assert_eq!(remaining(17), "2 weeks, 3 days");
    }

    #[test]
    fn test_zero_clauses_are_skipped() {
        assert_eq!(remaining(14), "2 weeks");
        assert_eq!(remaining(30), "1 month");
    }

    #[test]
    fn test_days_only() {
        assert_eq!(remaining(5), "5 days");
    }

    #[test]
    fn test_depleted_at_or_before_now() {
        assert_eq!(remaining(0), "Battery depleted");
        assert_eq!(
            format_time_remaining(&prediction(NOW - 1), NOW),
            "Battery depleted"
        );
    }

    #[test]
    fn test_under_one_day() {
        assert_eq!(
            format_time_remaining(&prediction(NOW + MS_PER_DAY - 1), NOW),
            "Less than a day"
        );
        assert_eq!(
            format_time_remaining(&prediction(NOW + 1), NOW),
            "Less than a day"
        );
    }
}
