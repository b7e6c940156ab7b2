use apt_trend_rs::core::{
    ComparisonResult, GroupKey, PriceChange, RankOptions, SortDirection, SortKey,
    TransactionRecord, rank,
};
use chrono::NaiveDate;

fn record(name: &str, area: f64, date: (i32, u32, u32), price: i64) -> TransactionRecord {
    TransactionRecord {
        complex_name: name.to_owned(),
        district_name: String::new(),
        dong_name: None,
        area_sqm: area,
        deal_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        price_man_won: price,
        floor: None,
        jibun: None,
    }
}

/// Result with a synthetic change pct; `pct: None` models a group without a
/// usable baseline.
fn result(name: &str, latest_price: i64, pct: Option<f64>) -> ComparisonResult {
    let latest = record(name, 84.0, (2024, 3, 1), latest_price);
    let previous = pct.map(|pct| {
        let prev_price = (latest_price as f64 / (1.0 + pct / 100.0)).round() as i64;
        record(name, 84.0, (2023, 6, 1), prev_price)
    });
    let change = previous.as_ref().map(|prev| PriceChange {
        amount_man_won: latest_price - prev.price_man_won,
        pct: (latest_price - prev.price_man_won) as f64 / prev.price_man_won as f64 * 100.0,
    });
    ComparisonResult {
        key: GroupKey::new(name, 84.0),
        latest,
        previous,
        change,
    }
}

fn names(entries: &[apt_trend_rs::core::RankedEntry]) -> Vec<&str> {
    entries
        .iter()
        .map(|entry| entry.result.key.complex_name.as_str())
        .collect()
}

#[test]
fn positive_change_filter_keeps_only_risers() {
    // Scenario C: +5%, -3%, absent.
    let results = vec![
        result("Up", 105_000, Some(5.0)),
        result("Down", 97_000, Some(-3.0)),
        result("NoBaseline", 50_000, None),
    ];

    let options = RankOptions {
        require_positive_change: true,
        ..RankOptions::default()
    };
    let ranked = rank(&results, &options);
    assert_eq!(names(&ranked), ["Up"]);
    assert_eq!(ranked[0].rank, 1);
}

#[test]
fn default_order_is_change_pct_descending() {
    let results = vec![
        result("Mid", 100_000, Some(4.0)),
        result("Top", 100_000, Some(9.0)),
        result("Low", 100_000, Some(1.0)),
    ];

    let ranked = rank(&results, &RankOptions::default());
    assert_eq!(names(&ranked), ["Top", "Mid", "Low"]);
    assert_eq!(
        ranked.iter().map(|e| e.rank).collect::<Vec<_>>(),
        [1, 2, 3]
    );
}

#[test]
fn limit_truncates_after_sorting() {
    let results = vec![
        result("A", 100_000, Some(1.0)),
        result("B", 100_000, Some(3.0)),
        result("C", 100_000, Some(2.0)),
    ];

    let ranked = rank(&results, &RankOptions::default().with_limit(2));
    assert_eq!(names(&ranked), ["B", "C"]);

    let ranked = rank(&results, &RankOptions::default().with_limit(10));
    assert_eq!(ranked.len(), 3, "limit above eligible count keeps all");
}

#[test]
fn entries_missing_the_sort_field_rank_last_in_both_directions() {
    let results = vec![
        result("NoBaseline", 80_000, None),
        result("Riser", 100_000, Some(5.0)),
        result("Faller", 90_000, Some(-2.0)),
    ];

    let descending = rank(&results, &RankOptions::default());
    assert_eq!(names(&descending), ["Riser", "Faller", "NoBaseline"]);

    let ascending = rank(
        &results,
        &RankOptions::default().with_sort(SortKey::ChangePct, SortDirection::Ascending),
    );
    assert_eq!(names(&ascending), ["Faller", "Riser", "NoBaseline"]);
}

#[test]
fn ties_fall_back_to_original_group_order() {
    let results = vec![
        result("First", 100_000, Some(5.0)),
        result("Second", 200_000, Some(5.0)),
        result("Third", 150_000, Some(5.0)),
    ];

    let ranked = rank(&results, &RankOptions::default());
    assert_eq!(names(&ranked), ["First", "Second", "Third"]);
}

#[test]
fn complex_name_sort_uses_code_point_order() {
    // Precomposed Hangul syllables compare in dictionary order under
    // code-point order.
    let results = vec![
        result("잠실엘스", 100_000, Some(1.0)),
        result("개포주공", 100_000, Some(2.0)),
        result("목동센트럴", 100_000, Some(3.0)),
    ];

    let ranked = rank(
        &results,
        &RankOptions::default().with_sort(SortKey::ComplexName, SortDirection::Ascending),
    );
    assert_eq!(names(&ranked), ["개포주공", "목동센트럴", "잠실엘스"]);
}

#[test]
fn latest_price_sort_ignores_missing_baselines() {
    let results = vec![
        result("Cheap", 50_000, None),
        result("Expensive", 250_000, None),
        result("Middle", 150_000, Some(2.0)),
    ];

    let ranked = rank(
        &results,
        &RankOptions::default().with_sort(SortKey::LatestPrice, SortDirection::Descending),
    );
    assert_eq!(names(&ranked), ["Expensive", "Middle", "Cheap"]);
}

#[test]
fn previous_price_sort_puts_absent_baselines_last() {
    let results = vec![
        result("NoBaseline", 100_000, None),
        result("HighPrev", 220_000, Some(10.0)),
        result("LowPrev", 55_000, Some(10.0)),
    ];

    let ranked = rank(
        &results,
        &RankOptions::default().with_sort(SortKey::PreviousPrice, SortDirection::Ascending),
    );
    assert_eq!(names(&ranked), ["LowPrev", "HighPrev", "NoBaseline"]);
}

#[test]
fn ranking_does_not_mutate_input() {
    let results = vec![
        result("A", 100_000, Some(1.0)),
        result("B", 100_000, Some(3.0)),
    ];
    let snapshot = results.clone();

    let first = rank(&results, &RankOptions::default());
    let second = rank(&results, &RankOptions::default());
    assert_eq!(first, second);
    assert_eq!(results, snapshot);
}
