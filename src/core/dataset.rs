use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::record::{GroupKey, RawTradeRecord, TransactionRecord};
use crate::error::TrendResult;

/// Transaction identity used when merging independently fetched batches.
/// Mirrors the upstream pipeline's dedup key.
type DedupKey = (
    String,
    NaiveDate,
    i64,
    OrderedFloat<f64>,
    Option<i32>,
    Option<String>,
);

fn dedup_key(record: &TransactionRecord) -> DedupKey {
    (
        record.complex_name.clone(),
        record.deal_date,
        record.price_man_won,
        OrderedFloat(record.area_sqm),
        record.floor,
        record.jibun.clone(),
    )
}

/// The merged, validated record set of one analysis run.
///
/// Batches are concatenated and deduplicated on the upstream transaction
/// identity, keeping the first occurrence, so merging independently fetched
/// batches is order-independent in content. The per-key partition preserves
/// first-seen key order, which later feeds the ranking tie-break.
#[derive(Debug, Clone, Default)]
pub struct TradeDataset {
    records: Vec<TransactionRecord>,
    groups: IndexMap<GroupKey, Vec<usize>>,
    seen: HashSet<DedupKey>,
}

impl TradeDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and merges one raw batch, returning `(added, duplicates)`.
    ///
    /// The whole batch is validated before anything is inserted, so a
    /// malformed record never leaves the dataset half-merged.
    pub fn merge_raw(&mut self, batch: &[RawTradeRecord]) -> TrendResult<(usize, usize)> {
        let mut validated = Vec::with_capacity(batch.len());
        for (index, raw) in batch.iter().enumerate() {
            validated.push(TransactionRecord::from_raw(index, raw)?);
        }

        let mut added = 0_usize;
        let mut duplicates = 0_usize;
        for record in validated {
            if self.push(record) {
                added += 1;
            } else {
                duplicates += 1;
            }
        }

        debug!(
            batch_len = batch.len(),
            added,
            duplicates,
            total = self.records.len(),
            "merged record batch"
        );
        Ok((added, duplicates))
    }

    /// Builds a dataset from already-validated records. Duplicates collapse
    /// the same way as in `merge_raw`.
    #[must_use]
    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    /// Inserts one validated record; returns `false` for duplicates.
    pub fn push(&mut self, record: TransactionRecord) -> bool {
        let key = dedup_key(&record);
        if !self.seen.insert(key) {
            trace!(
                complex = %record.complex_name,
                date = %record.deal_date,
                "skipping duplicate record"
            );
            return false;
        }

        let index = self.records.len();
        self.groups
            .entry(GroupKey::of(&record))
            .or_default()
            .push(index);
        self.records.push(record);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterates groups in first-seen key order.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, Vec<&TransactionRecord>)> {
        self.groups.iter().map(|(key, indices)| {
            let members = indices.iter().map(|&i| &self.records[i]).collect();
            (key, members)
        })
    }

    /// Members of one group, or `None` when the key has no transactions.
    #[must_use]
    pub fn group(&self, key: &GroupKey) -> Option<Vec<&TransactionRecord>> {
        self.groups
            .get(key)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
    }
}
