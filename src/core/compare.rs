use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::dataset::TradeDataset;
use crate::core::record::{GroupKey, TransactionRecord};

/// Price movement between the baseline and the latest transaction.
///
/// Both fields are present or absent together; the engine never emits one
/// without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub amount_man_won: i64,
    pub pct: f64,
}

impl PriceChange {
    fn between(previous: &TransactionRecord, latest: &TransactionRecord) -> Option<Self> {
        if previous.price_man_won <= 0 {
            return None;
        }
        let amount_man_won = latest.price_man_won - previous.price_man_won;
        let pct = amount_man_won as f64 / previous.price_man_won as f64 * 100.0;
        Some(Self {
            amount_man_won,
            pct,
        })
    }
}

/// Latest/baseline pair and change metrics for one comparable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub key: GroupKey,
    pub latest: TransactionRecord,
    pub previous: Option<TransactionRecord>,
    pub change: Option<PriceChange>,
}

/// How the baseline ("previous") transaction is chosen within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselinePolicy {
    /// The nearest strictly-older distinct-date transaction in newest-first
    /// order. Same-date duplicates of the latest are skipped; earlier
    /// same-date clusters are not collapsed.
    AdjacentDistinctDate,
    /// The highest-priced transaction strictly before the latest's date,
    /// optionally restricted to a trailing window of whole years.
    PriorPeak { lookback_years: Option<u32> },
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self::AdjacentDistinctDate
    }
}

/// A trailing window of calendar months ending at `end`'s month, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub end: NaiveDate,
    pub months: u32,
}

impl MonthWindow {
    #[must_use]
    pub fn new(end: NaiveDate, months: u32) -> Self {
        Self { end, months }
    }

    /// Whether `date`'s calendar month falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.months == 0 {
            return false;
        }
        let end_index = month_index(self.end);
        let date_index = month_index(date);
        date_index <= end_index && end_index - date_index < i64::from(self.months)
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Options consolidating the comparison variants of the surrounding views
/// into one parameterized engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub baseline: BaselinePolicy,
    /// When set, `latest` is the newest transaction whose month falls inside
    /// the window; groups with no transaction in the window are dropped.
    pub latest_within: Option<MonthWindow>,
    /// When set, groups with fewer transactions are dropped entirely.
    pub min_group_size: Option<usize>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            baseline: BaselinePolicy::default(),
            latest_within: None,
            min_group_size: None,
        }
    }
}

/// Groups the dataset by `(complex_name, area_sqm)` and emits one
/// `ComparisonResult` per surviving group, in first-seen group order.
///
/// The engine does no sign filtering; whether non-positive or absent changes
/// are kept is ranking policy. Empty input yields empty output and a
/// single-record group yields an absent baseline; this function never fails.
#[must_use]
pub fn compare(dataset: &TradeDataset, options: &CompareOptions) -> Vec<ComparisonResult> {
    let mut results = Vec::with_capacity(dataset.group_count());

    for (key, mut members) in dataset.groups() {
        if let Some(floor) = options.min_group_size {
            if members.len() < floor {
                continue;
            }
        }

        // Newest date first; same-date transactions ordered by higher price.
        members.sort_by(|a, b| b.recency_key().cmp(&a.recency_key()));

        let latest_pos = match options.latest_within {
            Some(window) => {
                match members
                    .iter()
                    .position(|record| window.contains(record.deal_date))
                {
                    Some(pos) => pos,
                    None => continue,
                }
            }
            None => 0,
        };
        let latest = members[latest_pos];

        let previous = match options.baseline {
            BaselinePolicy::AdjacentDistinctDate => members[latest_pos + 1..]
                .iter()
                .find(|record| record.deal_date != latest.deal_date)
                .copied(),
            BaselinePolicy::PriorPeak { lookback_years } => {
                prior_peak(&members, latest, lookback_years)
            }
        };

        let change = previous.and_then(|prev| PriceChange::between(prev, latest));

        results.push(ComparisonResult {
            key: key.clone(),
            latest: latest.clone(),
            previous: previous.cloned(),
            change,
        });
    }

    debug!(
        groups = dataset.group_count(),
        results = results.len(),
        "compared transaction groups"
    );
    results
}

/// Highest-priced transaction strictly before `latest`'s date, optionally
/// bounded below by a whole-year cutoff (inclusive). Ties keep the first
/// candidate in newest-first order.
fn prior_peak<'a>(
    members: &[&'a TransactionRecord],
    latest: &TransactionRecord,
    lookback_years: Option<u32>,
) -> Option<&'a TransactionRecord> {
    let cutoff = lookback_years.map(|years| {
        latest
            .deal_date
            .checked_sub_months(Months::new(years * 12))
            .unwrap_or(NaiveDate::MIN)
    });

    let mut peak: Option<&TransactionRecord> = None;
    for record in members {
        if record.deal_date >= latest.deal_date || record.price_man_won <= 0 {
            continue;
        }
        if let Some(cutoff) = cutoff {
            if record.deal_date < cutoff {
                continue;
            }
        }
        match peak {
            Some(best) if record.price_man_won <= best.price_man_won => {}
            _ => peak = Some(record),
        }
    }
    peak
}
