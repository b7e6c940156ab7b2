use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::compare::ComparisonResult;

/// Primary sort key for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    ChangePct,
    LatestPrice,
    PreviousPrice,
    ComplexName,
    AreaSqm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ranking policy applied to comparison results.
///
/// Entries missing the sort field always rank below entries that have it,
/// regardless of direction. Ties keep the original group order; there is no
/// secondary key by design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    /// Drop entries with an absent or non-positive change pct.
    pub require_positive_change: bool,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// Truncate to the first `limit` entries after sorting; `None` keeps all.
    pub limit: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            require_positive_change: false,
            sort_key: SortKey::ChangePct,
            sort_direction: SortDirection::Descending,
            limit: None,
        }
    }
}

impl RankOptions {
    #[must_use]
    pub fn top_risers(limit: usize) -> Self {
        Self {
            require_positive_change: true,
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_key: SortKey, sort_direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.sort_direction = sort_direction;
        self
    }
}

/// One entry of the final ordered sequence. `rank` is 1-based and assigned
/// after truncation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub result: ComparisonResult,
}

/// Filters, sorts and truncates comparison results. Pure; the input is not
/// reordered.
///
/// String comparison uses Unicode code-point order, which for the
/// precomposed Hangul this data carries coincides with dictionary order.
#[must_use]
pub fn rank(results: &[ComparisonResult], options: &RankOptions) -> Vec<RankedEntry> {
    let mut eligible: Vec<&ComparisonResult> = results
        .iter()
        .filter(|result| {
            !options.require_positive_change
                || result.change.is_some_and(|change| change.pct > 0.0)
        })
        .collect();

    eligible.sort_by(|a, b| compare_entries(a, b, options.sort_key, options.sort_direction));

    if let Some(limit) = options.limit {
        eligible.truncate(limit);
    }

    debug!(
        input = results.len(),
        ranked = eligible.len(),
        "ranked comparison results"
    );

    eligible
        .into_iter()
        .enumerate()
        .map(|(i, result)| RankedEntry {
            rank: i + 1,
            result: result.clone(),
        })
        .collect()
}

fn compare_entries(
    a: &ComparisonResult,
    b: &ComparisonResult,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    match key {
        SortKey::ChangePct => compare_optional(
            a.change.map(|c| c.pct),
            b.change.map(|c| c.pct),
            direction,
            f64::total_cmp,
        ),
        SortKey::LatestPrice => directed(
            a.latest.price_man_won.cmp(&b.latest.price_man_won),
            direction,
        ),
        SortKey::PreviousPrice => compare_optional(
            a.previous.as_ref().map(|p| p.price_man_won),
            b.previous.as_ref().map(|p| p.price_man_won),
            direction,
            |x, y| x.cmp(y),
        ),
        SortKey::ComplexName => directed(a.key.complex_name.cmp(&b.key.complex_name), direction),
        SortKey::AreaSqm => directed(a.key.area_sqm.cmp(&b.key.area_sqm), direction),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Absent values sort last for either direction; the direction only applies
/// between present values.
fn compare_optional<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(cmp(&a, &b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
