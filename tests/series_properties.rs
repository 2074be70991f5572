//! Property tests for parsing and summarizing number lists.

use plotpad::{parse_series, summarize, DataSeries};
use proptest::prelude::*;

// === Examples from the playground ===

#[test]
fn sample_series_summary() {
    let series = parse_series("5, 12, 8, 10, 20, 14, 18");
    assert_eq!(series.point_count(), 7);
    let summary = summarize(&series).expect("non-empty series has a summary");
    assert_eq!(summary.min, 5.0);
    assert_eq!(summary.max, 20.0);
    assert_eq!(summary.avg, 12.43);
}

#[test]
fn empty_series_has_no_summary() {
    assert!(summarize(&DataSeries::default()).is_none());
    assert!(summarize(&parse_series("")).is_none());
    assert!(summarize(&parse_series("no numbers here")).is_none());
}

#[test]
fn mixed_input_relabels_survivors() {
    let series = parse_series("a, 3, b, 5");
    let pairs: Vec<(&str, f64)> = series.iter().map(|p| (p.label.as_str(), p.value)).collect();
    assert_eq!(pairs, vec![("Point 1", 3.0), ("Point 2", 5.0)]);
}

// === Properties ===

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn prop_delimiters_only_is_empty(input in "[ ,\t\n\r]*") {
        prop_assert!(parse_series(&input).is_empty());
    }

    #[test]
    fn prop_comma_joined_round_trip(values in prop::collection::vec(finite_f64(), 0..40)) {
        let text = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        let series = parse_series(&text);
        prop_assert_eq!(series.values(), values);
    }

    #[test]
    fn prop_parse_is_idempotent(input in ".{0,80}") {
        prop_assert_eq!(parse_series(&input), parse_series(&input));
    }

    #[test]
    fn prop_points_finite_and_labeled_in_order(input in "[0-9a-z.,eE+ \t-]{0,80}") {
        let series = parse_series(&input);
        for (i, point) in series.iter().enumerate() {
            prop_assert!(point.value.is_finite());
            prop_assert_eq!(&point.label, &format!("Point {}", i + 1));
        }
    }

    #[test]
    fn prop_summary_bounds(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..40)) {
        let series = DataSeries::from_values(values.iter().copied());
        let summary = summarize(&series).expect("non-empty");
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(summary.min, min);
        prop_assert_eq!(summary.max, max);
        // rounding to 2 places may move the average past the extremes by half a cent
        prop_assert!(summary.avg >= min - 0.006);
        prop_assert!(summary.avg <= max + 0.006);
    }
}
