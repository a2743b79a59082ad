//! Integration tests for the forecast duration formatter

use pretty_assertions::assert_eq;

use draincast::{format_time_remaining, DepletionPrediction};

const MS_PER_DAY: i64 = draincast::battery::MS_PER_DAY;
const NOW: i64 = 1_700_000_000_000;

fn prediction_in(days: i64) -> DepletionPrediction {
    DepletionPrediction {
        depletion_timestamp: NOW + days * MS_PER_DAY,
        drainage_rate_percent_per_day: 1.5,
        data_points_used: 5,
    }
}

#[test]
fn breaks_down_months_weeks_and_days() {
    assert_eq!(
        format_time_remaining(&prediction_in(85), NOW),
        "2 months, 3 weeks, 4 days"
    );
}

#[test]
fn singular_units_read_naturally() {
    assert_eq!(
        format_time_remaining(&prediction_in(38), NOW),
        "1 month, 1 week, 1 day"
    );
}

#[test]
fn omits_absent_leading_unit() {
    assert_eq!(
        format_time_remaining(&prediction_in(17), NOW),
        "2 weeks, 3 days"
    );
}

#[test]
fn omits_zero_day_component() {
    assert_eq!(format_time_remaining(&prediction_in(14), NOW), "2 weeks");
}

#[test]
fn days_alone_stand_by_themselves() {
    assert_eq!(format_time_remaining(&prediction_in(5), NOW), "5 days");
}

#[test]
fn depletion_at_or_before_now_reads_as_depleted() {
    assert_eq!(
        format_time_remaining(&prediction_in(0), NOW),
        "Battery depleted"
    );
    assert_eq!(
        format_time_remaining(&prediction_in(-3), NOW),
        "Battery depleted"
    );
}

#[test]
fn sub_day_remainder_has_its_own_clause() {
    let prediction = DepletionPrediction {
        depletion_timestamp: NOW + MS_PER_DAY / 2,
        drainage_rate_percent_per_day: 48.0,
        data_points_used: 3,
    };
    assert_eq!(format_time_remaining(&prediction, NOW), "Less than a day");
}

#[test]
fn partial_days_truncate_to_whole_days() {
    let prediction = DepletionPrediction {
        depletion_timestamp: NOW + 14 * MS_PER_DAY + MS_PER_DAY / 2,
        drainage_rate_percent_per_day: 1.0,
        data_points_used: 4,
    };
    assert_eq!(format_time_remaining(&prediction, NOW), "2 weeks");
}
