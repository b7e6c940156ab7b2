use chrono::{Datelike, NaiveDate};

/// Formats a price in 만원 units as 억 with one decimal place, e.g. `9.0억`.
#[must_use]
pub fn format_eok(price_man_won: i64) -> String {
    format!("{:.1}억", price_man_won as f64 / 10_000.0)
}

/// Formats an integer with thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Point label text: unpadded `M/D` date plus the 억-formatted price.
#[must_use]
pub fn format_point_label(date: NaiveDate, price_man_won: i64) -> String {
    format!(
        "{}/{} {}",
        date.month(),
        date.day(),
        format_eok(price_man_won)
    )
}

/// Deterministic per-character width estimate; non-ASCII characters (the
/// Hangul suffix, in practice) use the wide class.
#[must_use]
pub fn estimate_text_width_px(text: &str, ascii_char_width_px: f64, wide_char_width_px: f64) -> f64 {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                ascii_char_width_px
            } else {
                wide_char_width_px
            }
        })
        .sum()
}
