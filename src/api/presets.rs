//! Named option combinations for the views the surrounding application
//! renders.
//!
//! Each upstream view used to re-implement the same grouping, comparison and
//! ranking code with small variations; here every view is one
//! `TrendEngineConfig` over the shared engine.

use chrono::NaiveDate;

use crate::core::{BaselinePolicy, CompareOptions, MonthWindow, RankOptions};

use super::TrendEngineConfig;

/// Ranked-list cap used by the card views.
pub const DEFAULT_TOP_N: usize = 3;
/// Transaction-count floor for the high-volume views.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 20;
/// Trailing window of the "recent transactions" views, in months.
pub const DEFAULT_RECENT_MONTHS: u32 = 3;
/// Prior-peak lookback of the search table, in years.
pub const SEARCH_LOOKBACK_YEARS: u32 = 5;
/// Chart history lookback, in years.
pub const HISTORY_LOOKBACK_YEARS: u32 = 7;

/// Per-district card: top risers against the nearest distinct-date baseline.
#[must_use]
pub fn district_top_risers(limit: usize) -> TrendEngineConfig {
    TrendEngineConfig::new()
        .with_compare(CompareOptions {
            baseline: BaselinePolicy::AdjacentDistinctDate,
            ..CompareOptions::default()
        })
        .with_rank(RankOptions::top_risers(limit))
}

/// Summary card: latest transaction against the all-time prior peak.
#[must_use]
pub fn prior_peak_top_risers(limit: usize) -> TrendEngineConfig {
    TrendEngineConfig::new()
        .with_compare(CompareOptions {
            baseline: BaselinePolicy::PriorPeak {
                lookback_years: None,
            },
            ..CompareOptions::default()
        })
        .with_rank(RankOptions::top_risers(limit))
}

/// Summary card restricted to groups with at least `min_group_size` trades.
#[must_use]
pub fn high_volume_top_risers(min_group_size: usize, limit: usize) -> TrendEngineConfig {
    TrendEngineConfig::new()
        .with_compare(CompareOptions {
            baseline: BaselinePolicy::PriorPeak {
                lookback_years: None,
            },
            min_group_size: Some(min_group_size),
            ..CompareOptions::default()
        })
        .with_rank(RankOptions::top_risers(limit))
}

/// Summary card over groups whose latest trade falls in the trailing
/// `months`-month window ending at `end`.
#[must_use]
pub fn recent_window_top_risers(end: NaiveDate, months: u32, limit: usize) -> TrendEngineConfig {
    TrendEngineConfig::new()
        .with_compare(CompareOptions {
            baseline: BaselinePolicy::PriorPeak {
                lookback_years: None,
            },
            latest_within: Some(MonthWindow::new(end, months)),
            ..CompareOptions::default()
        })
        .with_rank(RankOptions::top_risers(limit))
}

/// Recent-window card with the high-volume floor applied on top.
#[must_use]
pub fn recent_window_high_volume_top_risers(
    end: NaiveDate,
    months: u32,
    min_group_size: usize,
    limit: usize,
) -> TrendEngineConfig {
    TrendEngineConfig::new()
        .with_compare(CompareOptions {
            baseline: BaselinePolicy::PriorPeak {
                lookback_years: None,
            },
            latest_within: Some(MonthWindow::new(end, months)),
            min_group_size: Some(min_group_size),
            ..CompareOptions::default()
        })
        .with_rank(RankOptions::top_risers(limit))
}

/// Full search table: every group, latest against the prior peak within
/// five years, sorted by change pct descending without truncation. Groups
/// with no usable baseline keep their entry and sort last.
#[must_use]
pub fn search_table() -> TrendEngineConfig {
    TrendEngineConfig::new().with_compare(CompareOptions {
        baseline: BaselinePolicy::PriorPeak {
            lookback_years: Some(SEARCH_LOOKBACK_YEARS),
        },
        ..CompareOptions::default()
    })
}
