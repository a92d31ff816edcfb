//! Vacation record.

use serde::{Deserialize, Serialize};

use super::de;

/// An artist's vacation, either entered as ISO endpoints or as a free-text
/// range in the same `DD-MM-YYYY TO DD-MM-YYYY` form shoot dates use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vacation {
    /// Storage row id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Caller-assigned serial number.
    #[serde(deserialize_with = "de::lenient_count")]
    pub sr_no: Option<u32>,
    /// Artist name, normalized to trimmed uppercase.
    pub artist: Option<String>,
    /// Free-text range the ISO endpoints may be derived from.
    pub vacation_range: Option<String>,
    /// Reason for the vacation; uppercased for search.
    pub reason: Option<String>,
    /// ISO start date.
    pub vacation_start: Option<String>,
    /// ISO end date.
    pub vacation_end: Option<String>,
}
