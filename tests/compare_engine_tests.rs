use apt_trend_rs::core::{CompareOptions, RawTradeRecord, TradeDataset, compare};
use approx::assert_relative_eq;
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
fn latest_versus_nearest_prior_transaction() {
    // Scenario A.
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2023-01-10", 90_000),
        raw("Sky", 84.0, "2022-06-01", 80_000),
    ]);

    let results = compare(&dataset, &CompareOptions::default());
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert_eq!(result.latest.deal_date, date(2023, 1, 10));
    assert_eq!(
        result.previous.as_ref().expect("previous").deal_date,
        date(2022, 6, 1)
    );
    let change = result.change.expect("change");
    assert_eq!(change.amount_man_won, 10_000);
    assert_relative_eq!(change.pct, 12.5, epsilon = 1e-9);
}

#[test]
fn same_date_group_has_no_baseline() {
    // Scenario B: two records on one date, prices 100 and 120.
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2023-01-10", 100),
        raw("Sky", 84.0, "2023-01-10", 120),
    ]);

    let results = compare(&dataset, &CompareOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].latest.price_man_won, 120);
    assert!(results[0].previous.is_none());
    assert!(results[0].change.is_none());
}

#[test]
fn same_date_duplicates_of_latest_are_skipped_for_baseline() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2023-01-10", 100_000),
        raw("Sky", 84.0, "2023-01-10", 95_000),
        raw("Sky", 84.0, "2022-12-01", 90_000),
        raw("Sky", 84.0, "2022-12-01", 99_000),
    ]);

    let results = compare(&dataset, &CompareOptions::default());
    let result = &results[0];
    assert_eq!(result.latest.price_man_won, 100_000);
    // The baseline is the first distinct-date entry in newest-first order:
    // the higher-priced of the two 2022-12-01 transactions. Earlier
    // same-date clusters are not collapsed further.
    let previous = result.previous.as_ref().expect("previous");
    assert_eq!(previous.deal_date, date(2022, 12, 1));
    assert_eq!(previous.price_man_won, 99_000);
}

#[test]
fn singleton_group_yields_absent_previous_and_change() {
    let dataset = dataset_of(&[raw("외딴단지", 59.0, "2024-04-04", 42_000)]);
    let results = compare(&dataset, &CompareOptions::default());
    assert_eq!(results.len(), 1);
    assert!(results[0].previous.is_none());
    assert!(results[0].change.is_none());
}

#[test]
fn empty_dataset_yields_empty_output() {
    let dataset = TradeDataset::new();
    assert!(compare(&dataset, &CompareOptions::default()).is_empty());
}

#[test]
fn groups_are_keyed_by_complex_and_area() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2023-01-10", 90_000),
        raw("Sky", 59.0, "2023-01-10", 70_000),
        raw("Ocean", 84.0, "2023-01-10", 60_000),
    ]);

    let results = compare(&dataset, &CompareOptions::default());
    assert_eq!(results.len(), 3);
}

#[test]
fn latest_has_maximum_recency_key_within_group() {
    let dataset = dataset_of(&[
        raw("Sky", 84.0, "2023-03-01", 80_000),
        raw("Sky", 84.0, "2023-05-20", 85_000),
        raw("Sky", 84.0, "2023-05-20", 88_000),
        raw("Sky", 84.0, "2021-01-01", 70_000),
    ]);

    let results = compare(&dataset, &CompareOptions::default());
    let latest = &results[0].latest;
    for record in dataset.records() {
        assert!(latest.recency_key() >= record.recency_key());
    }
    assert_eq!(latest.price_man_won, 88_000);
}

#[test]
fn negative_change_is_emitted_not_filtered() {
    let dataset = dataset_of(&[
        raw("하락단지", 84.0, "2024-01-10", 80_000),
        raw("하락단지", 84.0, "2023-06-01", 90_000),
    ]);

    let results = compare(&dataset, &CompareOptions::default());
    let change = results[0].change.expect("change");
    assert_eq!(change.amount_man_won, -10_000);
    assert!(change.pct < 0.0);
}
