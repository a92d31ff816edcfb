//! Payment record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// A client payment received against an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    /// Storage row id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Caller-assigned serial number.
    #[serde(deserialize_with = "de::lenient_count")]
    pub sr_no: Option<u32>,
    /// ISO date the payment was received.
    pub date: Option<String>,
    /// Paying client; a lookup key.
    pub received_from: Option<String>,
    /// Invoice the payment settles.
    pub invoice_no: Option<String>,
    /// Shoot location carried over for search.
    pub location: Option<String>,
    /// Work type carried over for search.
    pub work_type: Option<String>,
    /// Free-text description; uppercased for search.
    pub description: Option<String>,
    /// Payment mode; a lookup key.
    pub payment_mode: Option<String>,
    /// Amount received.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub amount_received: Option<Decimal>,
}
