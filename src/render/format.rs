use chrono::NaiveDate;

/// Shortest round-trip decimal form, e.g. `8.0` -> `"8"`, `7.294` -> `"7.294"`
pub fn number(value: f64) -> String {
    if value == 0.0 {
        // drop the sign of negative zero
        return "0".to_string();
    }
    value.to_string()
}

/// Fixed one-decimal form used by the tooltip
pub fn fixed1(value: f64) -> String {
    format!("{:.1}", value)
}

/// One-decimal axis tick label. Negatives use U+2212 and a value that rounds to zero is
/// unsigned, so `-0.04` prints as `0.0`.
pub fn tick_label(value: f64) -> String {
    let label = format!("{:.1}", value.abs());
    if value < 0.0 && label != "0.0" {
        format!("\u{2212}{}", label)
    } else {
        label
    }
}

/// Full English month name for a one-based month number.
///
/// The date is built directly from the month number, so month 1 is January and month 12 is
/// December with no wrap into a neighbouring year. Months outside 1..=12 give `None`.
pub fn month_name(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(2000, month, 1).map(|date| date.format("%B").to_string())
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", number(x), number(y))
}
