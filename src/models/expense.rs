//! Expense record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// A money-out/money-in expense row, optionally tied to an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    /// Storage row id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Caller-assigned serial number.
    #[serde(deserialize_with = "de::lenient_count")]
    pub sr_no: Option<u32>,
    /// ISO date of the expense.
    pub date: Option<String>,
    /// Free-text description; uppercased for search.
    pub description: Option<String>,
    /// Free-text remark; uppercased for search.
    pub remark: Option<String>,
    /// Artists the expense was paid for, normalized like a shoot's list.
    pub paid_for_artist: Option<String>,
    /// Expense category; a lookup key.
    pub category: Option<String>,
    /// Payment mode; a lookup key.
    pub mode: Option<String>,
    /// Invoice the expense is attributed to.
    pub invoice_no: Option<String>,
    /// Money paid out.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub amount_out: Option<Decimal>,
    /// Money received back (refunds, advances returned).
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub amount_in: Option<Decimal>,
    /// `amount_out - amount_in`, derived unless the caller supplied it.
    #[serde(deserialize_with = "de::lenient_decimal")]
    pub total_expense: Option<Decimal>,
}
