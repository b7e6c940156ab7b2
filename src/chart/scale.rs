use chrono::{Duration, NaiveDate};

use crate::chart::layout::PlotArea;
use crate::core::HistoryPoint;
use crate::error::{TrendError, TrendResult};

/// Fraction added above the maximum and below the minimum price so extreme
/// points are not drawn on the plot edge.
const PRICE_PADDING_RATIO: f64 = 0.05;

/// Maps a price history onto the inner plot region: date to x, price to y.
///
/// Domain extent is scanned over all points, so the input does not need to
/// be sorted for the mapping itself. A single-distinct-date history is
/// widened by one artificial day so the time domain never has zero width,
/// and a flat price history is widened by one 만원 unit before padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMapper {
    plot: PlotArea,
    date_start: NaiveDate,
    date_end: NaiveDate,
    price_min: f64,
    price_max: f64,
}

impl ChartMapper {
    /// Fits a mapper to `history`. An empty history is a caller contract
    /// violation and reported as `TrendError::EmptyHistory`.
    pub fn fit(history: &[HistoryPoint], plot: PlotArea) -> TrendResult<Self> {
        plot.validate()?;
        let first = history.first().ok_or(TrendError::EmptyHistory)?;

        let mut date_start = first.date;
        let mut date_end = first.date;
        let mut raw_min = first.price_man_won;
        let mut raw_max = first.price_man_won;
        for point in &history[1..] {
            date_start = date_start.min(point.date);
            date_end = date_end.max(point.date);
            raw_min = raw_min.min(point.price_man_won);
            raw_max = raw_max.max(point.price_man_won);
        }

        if date_start == date_end {
            date_end += Duration::days(1);
        }

        let mut price_min = raw_min as f64;
        let mut price_max = raw_max as f64;
        let range = if price_max > price_min {
            price_max - price_min
        } else {
            1.0
        };
        price_min -= range * PRICE_PADDING_RATIO;
        price_max += range * PRICE_PADDING_RATIO;

        Ok(Self {
            plot,
            date_start,
            date_end,
            price_min,
            price_max,
        })
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    /// Time domain after single-day widening.
    #[must_use]
    pub fn date_domain(&self) -> (NaiveDate, NaiveDate) {
        (self.date_start, self.date_end)
    }

    /// Price domain after padding.
    #[must_use]
    pub fn price_domain(&self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    #[must_use]
    pub fn x_of(&self, date: NaiveDate) -> f64 {
        let span = (self.date_end - self.date_start).num_days() as f64;
        let offset = (date - self.date_start).num_days() as f64;
        self.plot.left() + offset / span * self.plot.inner_width()
    }

    #[must_use]
    pub fn y_of(&self, price_man_won: i64) -> f64 {
        let normalized = (price_man_won as f64 - self.price_min) / (self.price_max - self.price_min);
        self.plot.top() + (1.0 - normalized) * self.plot.inner_height()
    }
}
