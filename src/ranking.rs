//! Pure ordering pipeline for ranked ratio entries.
//!
//! Ranking transforms entries through immutable stages: sort, then limit.
//! Each stage is a pure function that can be tested independently.

use std::cmp::Ordering;

use crate::core::RatioEntry;

/// Sorts entries by ratio in descending order (pure).
///
/// The sort is stable, so entries with equal ratios keep their original
/// (insertion) order.
pub fn sort_by_ratio(mut entries: Vec<RatioEntry>) -> Vec<RatioEntry> {
    entries.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));
    entries
}

/// Limits entries to the top N (pure).
pub fn take_top(entries: Vec<RatioEntry>, limit: usize) -> Vec<RatioEntry> {
    entries.into_iter().take(limit).collect()
}
