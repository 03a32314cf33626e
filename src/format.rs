//! Display Formatting
//!
//! Spanish-locale text helpers used by the views.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Accepts RFC 3339, offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, or a bare date
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `2025-01-02T00:00:00` -> `2 ene 2025`; empty when unparsable
pub fn format_date_es(raw: &str) -> String {
    parse_date(raw)
        .map(|d| format!("{} {} {}", d.day(), MONTHS_ES[d.month0() as usize], d.year()))
        .unwrap_or_default()
}

/// `2025-01-15T00:00:00` -> `15/1/2025`; `N/A` when unparsable
pub fn format_date_numeric(raw: &str) -> String {
    parse_date(raw)
        .map(|d| format!("{}/{}/{}", d.day(), d.month(), d.year()))
        .unwrap_or_else(|| "N/A".to_string())
}

/// First letter of the author's name, uppercased, for the avatar bubble
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

pub fn publication_count_label(count: usize) -> String {
    if count == 1 {
        "1 publicación".to_string()
    } else {
        format!("{} publicaciones", count)
    }
}

/// `5000` -> `$5,000`
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}
