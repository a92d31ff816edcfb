//! Coordinator amount calculation.
//!
//! A quote for a coordinator booking multiple artists on one job. The
//! calculation is total: missing numeric inputs default rather than error,
//! so a half-filled form still previews a figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::de;
use crate::normalize::parse_artist_list;

/// Input for [`calculate_coordinator_amount`]. Numeric fields tolerate the
/// same loose JSON shapes the entity records do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorAmountParams {
    /// Job date, echoed through unchanged.
    pub date: Option<String>,
    /// Headcount; defaults to 0.
    #[serde(deserialize_with = "de::lenient_count")]
    pub number_of_artists: Option<u32>,
    /// Work type, echoed through unchanged.
    pub work_type: Option<String>,
    /// Rate per artist per day; defaults to 0.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub per_day_rate: Option<Decimal>,
    /// Number of working days; defaults to 1.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub work_days: Option<Decimal>,
    /// Free-text artist list; names fill the breakdown when given.
    pub artists: Option<String>,
}

/// One artist's even share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistShare {
    /// Artist name, or a synthesized `ARTIST_N` placeholder.
    pub artist: String,
    /// This artist's share.
    pub amount: Decimal,
}

/// Result of [`calculate_coordinator_amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorAmount {
    /// Job date, echoed from the input.
    pub date: Option<String>,
    /// Work type, echoed from the input.
    pub work_type: Option<String>,
    /// Headcount used in the calculation.
    pub number_of_artists: u32,
    /// Per-artist daily rate used.
    pub per_day_rate: Decimal,
    /// Day count used.
    pub work_days: Decimal,
    /// `number_of_artists x per_day_rate x work_days`.
    pub total: Decimal,
    /// Combined daily rate, `per_day_rate x number_of_artists`.
    pub per_day: Decimal,
    /// Even split of `total` across the artists.
    pub breakdown: Vec<ArtistShare>,
}

/// Computes the coordinator quote.
///
/// When named artists are given, each named artist gets an even share of
/// the total; otherwise `ARTIST_1..=ARTIST_N` placeholders are synthesized
/// from the headcount. A zero headcount yields a zero total and an empty
/// breakdown.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use roaster_engine::roaster::{CoordinatorAmountParams, calculate_coordinator_amount};
///
/// let result = calculate_coordinator_amount(CoordinatorAmountParams {
///     number_of_artists: Some(3),
///     per_day_rate: Some(Decimal::from(8000)),
///     work_days: Some(Decimal::from(2)),
///     ..CoordinatorAmountParams::default()
/// });
///
/// assert_eq!(result.total, Decimal::from(48000));
/// assert_eq!(result.per_day, Decimal::from(24000));
/// assert_eq!(result.breakdown.len(), 3);
/// assert_eq!(result.breakdown[0].amount, Decimal::from(16000));
/// ```
pub fn calculate_coordinator_amount(params: CoordinatorAmountParams) -> CoordinatorAmount {
    let n = params.number_of_artists.unwrap_or(0);
    let rate = params.per_day_rate.unwrap_or(Decimal::ZERO);
    let days = params.work_days.unwrap_or(Decimal::ONE);

    let headcount = Decimal::from(n);
    let total = headcount * rate * days;
    let per_day = rate * headcount;
    let per_artist = if n > 0 { total / headcount } else { Decimal::ZERO };

    let named = parse_artist_list(params.artists.as_deref());
    let names: Vec<String> = if named.is_empty() {
        (1..=n).map(|i| format!("ARTIST_{i}")).collect()
    } else {
        named
    };
    let breakdown = names
        .into_iter()
        .map(|artist| ArtistShare {
            artist,
            amount: per_artist,
        })
        .collect();

    CoordinatorAmount {
        date: params.date,
        work_type: params.work_type,
        number_of_artists: n,
        per_day_rate: rate,
        work_days: days,
        total,
        per_day,
        breakdown,
    }
}
