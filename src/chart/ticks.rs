use chrono::{Datelike, NaiveDate};

use crate::chart::scale::ChartMapper;

/// Number of evenly spaced price gridlines across the padded domain.
const PRICE_GRIDLINE_COUNT: usize = 4;

/// One time-axis tick: a January 1 boundary inside the time domain.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTick {
    pub date: NaiveDate,
    pub x: f64,
    /// Two-digit year label in `YY/1/1` form.
    pub label: String,
}

/// One horizontal gridline with its 억-formatted axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGridline {
    pub y: f64,
    pub price_man_won: f64,
    pub label: String,
}

/// One tick per elapsed calendar year boundary within the time domain,
/// ascending.
#[must_use]
pub fn year_ticks(mapper: &ChartMapper) -> Vec<YearTick> {
    let (start, end) = mapper.date_domain();
    let mut ticks = Vec::new();
    for year in start.year()..=end.year() {
        let Some(boundary) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            continue;
        };
        if boundary < start || boundary > end {
            continue;
        }
        ticks.push(YearTick {
            date: boundary,
            x: mapper.x_of(boundary),
            label: format!("{:02}/1/1", year.rem_euclid(100)),
        });
    }
    ticks
}

/// Four evenly spaced gridlines across the padded price domain, top-down.
#[must_use]
pub fn price_gridlines(mapper: &ChartMapper) -> Vec<PriceGridline> {
    let plot = mapper.plot();
    let (price_min, price_max) = mapper.price_domain();
    let steps = (PRICE_GRIDLINE_COUNT - 1) as f64;

    (0..PRICE_GRIDLINE_COUNT)
        .map(|i| {
            let y = plot.top() + plot.inner_height() / steps * i as f64;
            let price = price_min + (price_max - price_min) / steps * (steps - i as f64);
            PriceGridline {
                y,
                price_man_won: price,
                label: format!("{:.1}억", price / 10_000.0),
            }
        })
        .collect()
}
