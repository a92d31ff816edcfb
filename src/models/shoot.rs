//! Shoot record and payment status.
//!
//! A shoot is a booked production job with a date range, assigned artists,
//! and invoice/financial fields. All fields are optional: the same shape is
//! used for full rows, partial create bodies, and merged update patches.
//! Dates stay ISO `YYYY-MM-DD` strings so that unparseable values pass
//! through the normalizer untouched for the caller to reject.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// Payment status of a shoot, derived from `amount` and `received`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShootStatus {
    /// Nothing received yet.
    Pending,
    /// Some payment received, balance outstanding.
    Partial,
    /// Fully paid: positive amount with zero balance.
    Paid,
}

impl ShootStatus {
    /// Parses a status string leniently: trimmed, case-insensitive, with
    /// unknown values mapping to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "PENDING" => Some(ShootStatus::Pending),
            "PARTIAL" => Some(ShootStatus::Partial),
            "PAID" => Some(ShootStatus::Paid),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShootStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShootStatus::Pending => write!(f, "PENDING"),
            ShootStatus::Partial => write!(f, "PARTIAL"),
            ShootStatus::Paid => write!(f, "PAID"),
        }
    }
}

/// A production shoot record.
///
/// `invoice_no` is the unique business key; it is optional on the struct
/// because partial patches may omit it, but [`crate::validate`] rejects a
/// create without one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shoot {
    /// Storage row id, absent before the first insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Invoice date, ISO `YYYY-MM-DD` once derived.
    pub inv_date: Option<String>,
    /// Coordinator who booked the shoot; a grouping/lookup key.
    pub coordinator: Option<String>,
    /// Unique business key.
    pub invoice_no: Option<String>,
    /// Shoot location; a lookup key.
    pub location: Option<String>,
    /// Kind of work; a lookup key.
    pub work_type: Option<String>,
    /// Free-text description; uppercased for search.
    pub description: Option<String>,
    /// Free-text range like `"01-11-2025 TO 05-11-2025"`.
    pub shoot_dates: Option<String>,
    /// ISO start date, possibly derived from `shoot_dates`.
    pub shoot_start_date: Option<String>,
    /// ISO end date, possibly derived from `shoot_dates`.
    pub shoot_end_date: Option<String>,
    /// Comma/semicolon-delimited artist names, normalized to uppercase.
    pub artist_provided: Option<String>,
    /// Effective artist count; never less than the parsed name count.
    #[serde(deserialize_with = "de::lenient_count")]
    pub total_artists: Option<u32>,
    /// Rate per artist per day.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub per_day_rate: Option<Decimal>,
    /// Number of working days billed.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub work_days: Option<Decimal>,
    /// Invoice amount, derived when rate, days, and artist count are known.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub amount: Option<Decimal>,
    /// Total received against the invoice.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub received: Option<Decimal>,
    /// `amount - received`.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub balance: Option<Decimal>,
    /// Payment status.
    #[serde(deserialize_with = "de::lenient_status")]
    pub status: Option<ShootStatus>,
    /// Expenses attributed to this shoot.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub total_expense: Option<Decimal>,
}
