use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{TrendError, TrendResult};

/// One transaction as delivered by the upstream fetch pipeline.
///
/// Every field is optional at this layer so validation can report the exact
/// missing or invalid field per record instead of surfacing an opaque
/// deserialization error. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTradeRecord {
    pub apt_name: Option<String>,
    pub sigungu: Option<String>,
    pub dong_name: Option<String>,
    pub area_m2: Option<f64>,
    pub deal_date: Option<String>,
    pub price_man: Option<i64>,
    pub floor: Option<i32>,
    pub jibun: Option<String>,
}

impl RawTradeRecord {
    /// Convenience constructor covering the four required fields.
    #[must_use]
    pub fn new(
        apt_name: impl Into<String>,
        area_m2: f64,
        deal_date: impl Into<String>,
        price_man: i64,
    ) -> Self {
        Self {
            apt_name: Some(apt_name.into()),
            area_m2: Some(area_m2),
            deal_date: Some(deal_date.into()),
            price_man: Some(price_man),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sigungu(mut self, sigungu: impl Into<String>) -> Self {
        self.sigungu = Some(sigungu.into());
        self
    }

    #[must_use]
    pub fn with_dong_name(mut self, dong_name: impl Into<String>) -> Self {
        self.dong_name = Some(dong_name.into());
        self
    }

    #[must_use]
    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    #[must_use]
    pub fn with_jibun(mut self, jibun: impl Into<String>) -> Self {
        self.jibun = Some(jibun.into());
        self
    }
}

/// A validated, immutable transaction record.
///
/// `complex_name`, `area_sqm`, `deal_date` and `price_man_won` are required
/// and hold the §-style invariants (`price_man_won > 0`, finite area, valid
/// calendar date). `dong_name` and `floor` are display-only and may be
/// absent; `district_name` is attached contextually by the upstream pipeline
/// and defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub complex_name: String,
    pub district_name: String,
    pub dong_name: Option<String>,
    pub area_sqm: f64,
    pub deal_date: NaiveDate,
    pub price_man_won: i64,
    pub floor: Option<i32>,
    pub jibun: Option<String>,
}

impl TransactionRecord {
    /// Validates one raw record. `index` is the record's position within its
    /// batch and is carried into the error for caller-side diagnostics.
    pub fn from_raw(index: usize, raw: &RawTradeRecord) -> TrendResult<Self> {
        let complex_name = match raw.apt_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
            Some(_) => {
                return Err(malformed(index, "apt_name", "must not be empty"));
            }
            None => {
                return Err(malformed(index, "apt_name", "is missing"));
            }
        };

        let area_sqm = match raw.area_m2 {
            Some(area) if area.is_finite() && area > 0.0 => area,
            Some(_) => {
                return Err(malformed(index, "area_m2", "must be finite and > 0"));
            }
            None => {
                return Err(malformed(index, "area_m2", "is missing"));
            }
        };

        let deal_date = match raw.deal_date.as_deref() {
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| {
                malformed(index, "deal_date", &format!("is not a YYYY-MM-DD date: {e}"))
            })?,
            None => {
                return Err(malformed(index, "deal_date", "is missing"));
            }
        };

        let price_man_won = match raw.price_man {
            Some(price) if price > 0 => price,
            Some(_) => {
                return Err(malformed(index, "price_man", "must be > 0"));
            }
            None => {
                return Err(malformed(index, "price_man", "is missing"));
            }
        };

        Ok(Self {
            complex_name,
            district_name: raw.sigungu.clone().unwrap_or_default(),
            dong_name: raw.dong_name.clone(),
            area_sqm,
            deal_date,
            price_man_won,
            floor: raw.floor,
            jibun: raw.jibun.clone(),
        })
    }

    /// Sort key implementing the newest-first group order: later dates first,
    /// higher prices first among same-date transactions.
    #[must_use]
    pub fn recency_key(&self) -> (NaiveDate, i64) {
        (self.deal_date, self.price_man_won)
    }
}

fn malformed(index: usize, field: &'static str, reason: &str) -> TrendError {
    TrendError::MalformedRecord {
        index,
        field,
        reason: reason.to_owned(),
    }
}

/// Identity of one comparable unit: same complex, same exclusive-use area.
///
/// The area component is wrapped in `OrderedFloat` so the key is `Eq + Hash`
/// with exact-equality semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub complex_name: String,
    pub area_sqm: OrderedFloat<f64>,
}

impl GroupKey {
    #[must_use]
    pub fn new(complex_name: impl Into<String>, area_sqm: f64) -> Self {
        Self {
            complex_name: complex_name.into(),
            area_sqm: OrderedFloat(area_sqm),
        }
    }

    #[must_use]
    pub fn of(record: &TransactionRecord) -> Self {
        Self::new(record.complex_name.clone(), record.area_sqm)
    }
}
