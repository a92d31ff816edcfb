//! Vacation field normalization.

use crate::models::Vacation;

use super::parse::{normalize_artist_name, normalize_lookup, parse_range_to_iso};

/// Normalizes a vacation record.
///
/// The free-text `vacation_range` is parsed with the same pattern shoot
/// dates use, but only when either ISO endpoint is missing; explicit
/// endpoints always win.
pub fn normalize_vacation(input: Vacation) -> Vacation {
    let mut result = input;

    if let Some(artist) = result.artist.as_deref().filter(|s| !s.is_empty()) {
        result.artist = Some(normalize_artist_name(artist));
    }
    if let Some(reason) = result.reason.as_deref().filter(|s| !s.is_empty()) {
        result.reason = Some(normalize_lookup(reason));
    }

    let endpoints_missing =
        result.vacation_start.is_none() || result.vacation_end.is_none();
    if let Some(raw_range) = result.vacation_range.as_deref().filter(|s| !s.is_empty())
        && endpoints_missing
        && let Some(range) = parse_range_to_iso(raw_range)
    {
        result.vacation_start = Some(range.start);
        result.vacation_end = Some(range.end);
    }

    result
}
