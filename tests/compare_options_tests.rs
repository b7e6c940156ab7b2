use apt_trend_rs::core::{
    BaselinePolicy, CompareOptions, MonthWindow, RawTradeRecord, TradeDataset, compare,
};
use chrono::NaiveDate;

fn raw(name: &str, area: f64, date: &str, price: i64) -> RawTradeRecord {
    RawTradeRecord::new(name, area, date, price)
}

fn dataset_of(batch: &[RawTradeRecord]) -> TradeDataset {
    let mut dataset = TradeDataset::new();
    dataset.merge_raw(batch).expect("valid batch");
    dataset
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn prior_peak_baseline_picks_highest_older_price() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2024-03-01", 100_000),
        raw("Sky", 84.0, "2023-12-01", 95_000),
        raw("Sky", 84.0, "2021-07-01", 98_000),
        raw("Sky", 84.0, "2020-02-01", 60_000),
    ]);

    let options = CompareOptions {
        baseline: BaselinePolicy::PriorPeak {
            lookback_years: None,
        },
        ..CompareOptions::default()
    };
    let results = compare(&dataset, &options);

    let previous = results[0].previous.as_ref().expect("previous");
    assert_eq!(previous.deal_date, date(2021, 7, 1));
    assert_eq!(previous.price_man_won, 98_000);
    assert_eq!(results[0].change.expect("change").amount_man_won, 2_000);
}

#[test]
fn prior_peak_lookback_excludes_older_transactions() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2024-03-01", 100_000),
        raw("Sky", 84.0, "2023-12-01", 95_000),
        // Outside a 5-year lookback from 2024-03-01.
        raw("Sky", 84.0, "2018-07-01", 120_000),
    ]);

    let options = CompareOptions {
        baseline: BaselinePolicy::PriorPeak {
            lookback_years: Some(5),
        },
        ..CompareOptions::default()
    };
    let results = compare(&dataset, &options);

    let previous = results[0].previous.as_ref().expect("previous");
    assert_eq!(previous.price_man_won, 95_000);
}

#[test]
fn prior_peak_with_no_older_transaction_keeps_entry_without_baseline() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2024-03-01", 100_000),
        raw("Sky", 84.0, "2024-03-01", 90_000),
    ]);

    let options = CompareOptions {
        baseline: BaselinePolicy::PriorPeak {
            lookback_years: None,
        },
        ..CompareOptions::default()
    };
    let results = compare(&dataset, &options);
    assert_eq!(results.len(), 1);
    assert!(results[0].previous.is_none());
    assert!(results[0].change.is_none());
}

#[test]
fn month_window_contains_trailing_calendar_months() {
    let window = MonthWindow::new(date(2024, 6, 15), 3);
    assert!(window.contains(date(2024, 6, 1)));
    assert!(window.contains(date(2024, 5, 31)));
    assert!(window.contains(date(2024, 4, 1)));
    assert!(!window.contains(date(2024, 3, 31)));
    assert!(!window.contains(date(2024, 7, 1)));
}

#[test]
fn windowed_latest_is_newest_transaction_inside_window() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2024-06-10", 100_000),
        raw("Sky", 84.0, "2024-02-01", 97_000),
        raw("Sky", 84.0, "2023-09-01", 90_000),
    ]);

    // Window covers 2024-02 .. 2024-04 only.
    let options = CompareOptions {
        latest_within: Some(MonthWindow::new(date(2024, 4, 30), 3)),
        ..CompareOptions::default()
    };
    let results = compare(&dataset, &options);

    assert_eq!(results[0].latest.deal_date, date(2024, 2, 1));
    // Baseline selection starts from the windowed latest, not the global one.
    let previous = results[0].previous.as_ref().expect("previous");
    assert_eq!(previous.deal_date, date(2023, 9, 1));
}

#[test]
fn group_with_no_transaction_in_window_is_dropped() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2023-01-10", 90_000),
        raw("Ocean", 59.0, "2024-04-02", 80_000),
        raw("Ocean", 59.0, "2024-01-15", 75_000),
    ]);

    let options = CompareOptions {
        latest_within: Some(MonthWindow::new(date(2024, 4, 30), 3)),
        ..CompareOptions::default()
    };
    let results = compare(&dataset, &options);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key.complex_name, "Ocean");
}

#[test]
fn min_group_size_drops_thin_groups() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2024-01-10", 90_000),
        raw("Sky", 84.0, "2023-06-01", 80_000),
        raw("Sky", 84.0, "2023-02-01", 78_000),
        raw("Ocean", 59.0, "2024-01-10", 60_000),
        raw("Ocean", 59.0, "2023-06-01", 55_000),
    ]);

    let options = CompareOptions {
        min_group_size: Some(3),
        ..CompareOptions::default()
    };
    let results = compare(&dataset, &options);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key.complex_name, "Sky");
}
