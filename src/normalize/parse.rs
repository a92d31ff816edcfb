//! Shared parsing helpers for the field normalizers and the roaster
//! builder.
//!
//! Every function here is total: unparseable input degrades to `None` or an
//! empty collection, never an error.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::Value;

/// Free-text shoot/vacation range: `DD-MM-YYYY TO DD-MM-YYYY`,
/// case-insensitive, matched anywhere in the string.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{2})-(\d{2})-(\d{4})\s*TO\s*(\d{2})-(\d{2})-(\d{4})")
        .expect("range pattern compiles")
});

/// Strict ISO date shape: `YYYY-MM-DD`.
static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso pattern compiles"));

/// An ISO start/end pair parsed from a free-text range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoRange {
    /// ISO `YYYY-MM-DD` start date.
    pub start: String,
    /// ISO `YYYY-MM-DD` end date.
    pub end: String,
}

/// Coerces a JSON value into a finite decimal number.
///
/// Empty string and null are "absent" (not zero); strings are trimmed and
/// parsed, with scientific notation accepted; anything that fails to parse
/// is absent rather than an error.
pub fn parse_number(value: &Value) -> Option<Decimal> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            Decimal::from_str(trimmed)
                .ok()
                .or_else(|| Decimal::from_scientific(trimmed).ok())
        }
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64_retain)),
        _ => None,
    }
}

/// Validates that a string is shaped like an ISO `YYYY-MM-DD` date.
///
/// Shape only: no calendar validation happens here, so `2025-99-99` passes.
/// Calendar-invalid dates are excluded later by [`expand_date_range`],
/// which cannot iterate them.
pub fn parse_iso_date(value: &str) -> Option<String> {
    if ISO_DATE_RE.is_match(value) {
        Some(value.to_string())
    } else {
        None
    }
}

/// Parses a free-text `DD-MM-YYYY TO DD-MM-YYYY` range into ISO endpoints.
///
/// The digits are rearranged, not calendar-validated, so zero-padding is
/// preserved exactly. Non-matching strings return `None`.
///
/// # Example
///
/// ```
/// use roaster_engine::normalize::parse_range_to_iso;
///
/// let range = parse_range_to_iso("01-11-2025 TO 05-11-2025").unwrap();
/// assert_eq!(range.start, "2025-11-01");
/// assert_eq!(range.end, "2025-11-05");
/// assert!(parse_range_to_iso("next week sometime").is_none());
/// ```
pub fn parse_range_to_iso(range: &str) -> Option<IsoRange> {
    let caps = RANGE_RE.captures(range)?;
    Some(IsoRange {
        start: format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]),
        end: format!("{}-{}-{}", &caps[6], &caps[5], &caps[4]),
    })
}

/// Normalizes an artist name to trimmed uppercase.
///
/// Two spellings differing only in case or surrounding whitespace are the
/// same artist everywhere in the engine.
pub fn normalize_artist_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Splits a comma/semicolon-delimited artist list into normalized names.
///
/// Tokens are trimmed and uppercased, empties dropped, and duplicates
/// removed with first-seen order preserved.
pub fn parse_artist_list(input: Option<&str>) -> Vec<String> {
    let Some(input) = input else {
        return Vec::new();
    };
    let mut names: Vec<String> = Vec::new();
    for token in input.split([',', ';']) {
        let name = normalize_artist_name(token);
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Normalizes a free-text lookup key (coordinator, invoice_no, location,
/// work_type, description) for consistent matching and search.
pub fn normalize_lookup(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Expands an inclusive ISO date range into each calendar day it covers.
///
/// Endpoints that fail to parse as real calendar dates yield an empty
/// vector, as does an inverted range; callers treat both as "not a roster
/// input yet" and move on.
pub fn expand_date_range(from: &str, to: &str) -> Vec<String> {
    let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(from, "%Y-%m-%d"),
        NaiveDate::parse_from_str(to, "%Y-%m-%d"),
    ) else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day.format("%Y-%m-%d").to_string());
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    dates
}
