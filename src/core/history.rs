use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::record::TransactionRecord;

/// One point of a group's chronological price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub price_man_won: i64,
}

impl HistoryPoint {
    #[must_use]
    pub fn new(date: NaiveDate, price_man_won: i64) -> Self {
        Self {
            date,
            price_man_won,
        }
    }
}

/// Builds the chart history for one group: ascending by date (ties by
/// price), optionally restricted to the trailing `lookback_years` whole
/// years before `as_of`, cutoff inclusive.
///
/// `as_of` is an explicit parameter; the core never reads the ambient clock.
#[must_use]
pub fn history_for(
    records: &[&TransactionRecord],
    as_of: NaiveDate,
    lookback_years: Option<u32>,
) -> Vec<HistoryPoint> {
    let cutoff = lookback_years.map(|years| {
        as_of
            .checked_sub_months(Months::new(years * 12))
            .unwrap_or(NaiveDate::MIN)
    });

    let mut points: Vec<HistoryPoint> = records
        .iter()
        .filter(|record| cutoff.is_none_or(|cutoff| record.deal_date >= cutoff))
        .map(|record| HistoryPoint::new(record.deal_date, record.price_man_won))
        .collect();
    points.sort_by_key(|point| (point.date, point.price_man_won));
    points
}
