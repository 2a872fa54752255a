//! Small helpers shared across crates

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

/// Workshop local time (WIB, UTC+7)
const WIB_OFFSET_SECS: i32 = 7 * 3600;

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Trim and drop empty strings
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Same as [`non_empty`] for an optional value
pub fn non_empty_opt(value: Option<&str>) -> Option<String> {
    value.and_then(non_empty)
}

fn wib() -> Option<FixedOffset> {
    FixedOffset::east_opt(WIB_OFFSET_SECS)
}

/// Calendar day of `value` in workshop local time
pub fn local_date(value: &DateTime<Utc>) -> NaiveDate {
    match wib() {
        Some(offset) => value.with_timezone(&offset).date_naive(),
        None => value.date_naive(),
    }
}

/// Render a timestamp the way the site shows it, e.g. `17 Feb 2025 09.30`.
///
/// Missing timestamps render as `-`.
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    let Some(offset) = wib() else {
        return value.to_rfc3339();
    };
    let local = value.with_timezone(&offset);
    let month = MONTHS_ID[local.month0() as usize];
    format!(
        "{} {} {}",
        local.format("%d"),
        month,
        local.format("%Y %H.%M")
    )
}
