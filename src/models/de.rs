//! Lenient serde coercion helpers for record fields.
//!
//! Raw rows arrive from storage and API callers with loosely typed values:
//! amounts may be JSON numbers or strings, counts may be fractional, and
//! empty strings stand in for "absent". These deserializers implement the
//! engine's coercion rule: empty string, null, and missing all parse to
//! absent (not zero), any other value is coerced and accepted only when the
//! parse succeeds. Failures degrade to absent rather than erroring.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::normalize::parse_number;

use super::shoot::ShootStatus;

/// Coerces a JSON value into an optional decimal amount.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_number))
}

/// Coerces a JSON value into an optional non-negative count.
///
/// Fractional values truncate toward zero; negative values are absent.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(parse_number)
        .and_then(|d| d.trunc().to_u32()))
}

/// Coerces a JSON value into an optional year.
pub(crate) fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(parse_number)
        .and_then(|d| d.trunc().to_i32()))
}

/// Coerces a JSON value into an optional shoot status.
///
/// Unknown or empty status strings are absent, keeping deserialization
/// total for records authored before the status vocabulary settled.
pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ShootStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::String(s) => ShootStatus::parse(s),
        _ => None,
    }))
}
