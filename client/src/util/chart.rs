//! Bar scaling for the dashboard interview chart.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use chrono::NaiveDate;

use crate::net::types::InterviewStat;

/// Pixel height of the tallest bar.
pub const CHART_MAX_PX: f64 = 160.0;

/// One rendered bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub count: u32,
    pub height_px: f64,
    /// Short weekday, e.g. `"Mon"`.
    pub label: String,
    pub is_peak: bool,
}

/// Scale `counts` so the largest equals `max_px` and the rest are
/// proportional. All-zero input yields zero-height bars.
#[must_use]
pub fn bar_heights(counts: &[u32], max_px: f64) -> Vec<f64> {
    let peak = counts.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| f64::from(c) / f64::from(peak) * max_px).collect()
}

#[must_use]
pub fn bars(stats: &[InterviewStat], max_px: f64) -> Vec<Bar> {
    let counts: Vec<u32> = stats.iter().map(|s| s.count).collect();
    let peak = counts.iter().copied().max().unwrap_or(0);
    stats
        .iter()
        .zip(bar_heights(&counts, max_px))
        .map(|(stat, height_px)| Bar {
            date: stat.date,
            count: stat.count,
            height_px,
            label: stat.date.format("%a").to_string(),
            is_peak: peak > 0 && stat.count == peak,
        })
        .collect()
}

/// Sum of interviews in the window.
#[must_use]
pub fn total(stats: &[InterviewStat]) -> u32 {
    stats.iter().map(|s| s.count).sum()
}
