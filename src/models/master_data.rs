//! Master data record.

use serde::{Deserialize, Serialize};

use super::de;

/// A row of categorical lookup values used to populate dropdowns and
/// autocomplete: coordinators, artists, payment modes, work types, and
/// expense categories. Each row fills whichever columns apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterData {
    /// Storage row id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Payment mode value.
    pub payment_mode: Option<String>,
    /// Coordinator name.
    pub coordinator: Option<String>,
    /// Artist name, normalized to trimmed uppercase.
    pub artist: Option<String>,
    /// Work type value.
    pub work_type: Option<String>,
    /// Month name.
    pub month: Option<String>,
    /// Calendar year.
    #[serde(deserialize_with = "de::lenient_year")]
    pub year: Option<i32>,
    /// Expense category value.
    pub expense_category: Option<String>,
}
