use chrono::NaiveDate;
use tracing::debug;

use crate::chart::{ChartStyle, PlotArea, build_chart_frame};
use crate::core::{
    ComparisonResult, GroupKey, HistoryPoint, RankedEntry, RawTradeRecord, TradeDataset, compare,
    history_for, rank,
};
use crate::error::TrendResult;
use crate::render::RenderFrame;

use super::TrendEngineConfig;

/// Facade over the comparison, ranking and charting pipeline.
///
/// The engine owns the merged dataset of one analysis run plus the active
/// options; every query is a pure recomputation over that data, so repeated
/// calls with the same inputs return identical results.
#[derive(Debug, Clone, Default)]
pub struct TrendEngine {
    dataset: TradeDataset,
    config: TrendEngineConfig,
}

impl TrendEngine {
    #[must_use]
    pub fn new(config: TrendEngineConfig) -> Self {
        Self {
            dataset: TradeDataset::new(),
            config,
        }
    }

    #[must_use]
    pub fn with_dataset(dataset: TradeDataset, config: TrendEngineConfig) -> Self {
        Self { dataset, config }
    }

    /// Replaces all records with one validated batch. Returns the number of
    /// records kept after deduplication.
    pub fn set_records(&mut self, batch: &[RawTradeRecord]) -> TrendResult<usize> {
        let mut dataset = TradeDataset::new();
        let (added, duplicates) = dataset.merge_raw(batch)?;
        debug!(added, duplicates, "replaced engine dataset");
        self.dataset = dataset;
        Ok(added)
    }

    /// Merges one further independently fetched batch; concatenation order
    /// does not affect comparison content. Returns the number of new records.
    pub fn merge_batch(&mut self, batch: &[RawTradeRecord]) -> TrendResult<usize> {
        let (added, _) = self.dataset.merge_raw(batch)?;
        Ok(added)
    }

    #[must_use]
    pub fn dataset(&self) -> &TradeDataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &TrendEngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrendEngineConfig) {
        self.config = config;
    }

    /// One comparison per surviving group under the active compare options.
    #[must_use]
    pub fn comparisons(&self) -> Vec<ComparisonResult> {
        compare(&self.dataset, &self.config.compare)
    }

    /// The final ranked sequence under the active compare and rank options.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedEntry> {
        rank(&self.comparisons(), &self.config.rank)
    }

    /// Chronological price history for one group; empty when the key has no
    /// transactions.
    #[must_use]
    pub fn history_for(
        &self,
        key: &GroupKey,
        as_of: NaiveDate,
        lookback_years: Option<u32>,
    ) -> Vec<HistoryPoint> {
        self.dataset
            .group(key)
            .map(|members| history_for(&members, as_of, lookback_years))
            .unwrap_or_default()
    }

    /// Renderable chart geometry for one group's history. A key with no
    /// transactions yields an empty frame.
    pub fn chart_frame(
        &self,
        key: &GroupKey,
        as_of: NaiveDate,
        lookback_years: Option<u32>,
        plot: PlotArea,
        style: &ChartStyle,
    ) -> TrendResult<RenderFrame> {
        let history = self.history_for(key, as_of, lookback_years);
        build_chart_frame(&history, plot, style)
    }
}
