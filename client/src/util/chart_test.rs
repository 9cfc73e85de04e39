#![allow(clippy::float_cmp)]

use chrono::Days;

use super::*;

const COUNTS: [u32; 14] = [3, 5, 2, 8, 1, 6, 4, 7, 2, 3, 5, 6, 1, 4];

fn stats() -> Vec<InterviewStat> {
    let start = NaiveDate::from_ymd_opt(2025, 2, 20).expect("valid date");
    COUNTS
        .iter()
        .enumerate()
        .map(|(i, &count)| InterviewStat { date: start + Days::new(i as u64), count })
        .collect()
}

#[test]
fn tallest_bar_equals_max_px() {
    let heights = bar_heights(&COUNTS, 200.0);
    assert_eq!(heights[3], 200.0);
    assert!(heights.iter().all(|&h| h <= 200.0));
}

#[test]
fn other_bars_are_proportional() {
    let heights = bar_heights(&COUNTS, 200.0);
    for (count, height) in COUNTS.iter().zip(&heights) {
        assert!((height - f64::from(*count) * 25.0).abs() < 1e-9, "count {count} -> {height}");
    }
    assert_eq!(heights[4], 25.0);
}

#[test]
fn zero_counts_render_flat() {
    assert_eq!(bar_heights(&[0, 0, 0], 100.0), vec![0.0, 0.0, 0.0]);
    assert!(bar_heights(&[], 100.0).is_empty());
}

#[test]
fn bars_mark_single_peak_with_weekday_labels() {
    let bars = bars(&stats(), CHART_MAX_PX);
    assert_eq!(bars.len(), 14);
    let peaks: Vec<usize> = bars.iter().enumerate().filter(|(_, b)| b.is_peak).map(|(i, _)| i).collect();
    assert_eq!(peaks, [3]);
    assert_eq!(bars[3].height_px, CHART_MAX_PX);
    // 2025-02-20 is a Thursday.
    assert_eq!(bars[0].label, "Thu");
}

#[test]
fn total_sums_counts() {
    assert_eq!(total(&stats()), 57);
}
