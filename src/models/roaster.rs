//! Roaster matrix cell and entry types.
//!
//! The roaster matrix is a sparse per-date, per-artist grid. Cells are
//! serialized as `{"type": "...", "details": {...}}` so existing consumers
//! of the matrix JSON keep working. A conflict cell preserves both of the
//! original classifications instead of discarding one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The status kind of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellKind {
    /// Artist is booked on a shoot.
    Booked,
    /// Artist is on vacation.
    Vacation,
    /// Incompatible statuses overlap on the same date.
    Conflict,
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellKind::Booked => write!(f, "BOOKED"),
            CellKind::Vacation => write!(f, "VACATION"),
            CellKind::Conflict => write!(f, "CONFLICT"),
        }
    }
}

/// Details carried by a booked cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookedDetails {
    /// Business key of the booking shoot.
    pub invoice_no: Option<String>,
    /// Work type of the booking shoot.
    pub work_type: Option<String>,
    /// Location of the booking shoot.
    pub location: Option<String>,
}

/// Details carried by a vacation cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacationDetails {
    /// Reason for the vacation.
    pub reason: Option<String>,
}

/// Details carried by a conflict cell: both original classifications, in
/// the order they were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictDetails {
    /// The cell that occupied the slot first.
    pub existing: Box<RoasterCell>,
    /// The write that collided with it.
    pub incoming: Box<RoasterCell>,
}

/// One cell of the roaster matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum RoasterCell {
    /// Artist booked on a shoot that day.
    #[serde(rename = "BOOKED")]
    Booked(BookedDetails),
    /// Artist on vacation that day.
    #[serde(rename = "VACATION")]
    Vacation(VacationDetails),
    /// A booking and a vacation (or other incompatible pair) overlap.
    #[serde(rename = "CONFLICT")]
    Conflict(ConflictDetails),
}

impl RoasterCell {
    /// Returns the status kind of this cell.
    pub fn kind(&self) -> CellKind {
        match self {
            RoasterCell::Booked(_) => CellKind::Booked,
            RoasterCell::Vacation(_) => CellKind::Vacation,
            RoasterCell::Conflict(_) => CellKind::Conflict,
        }
    }
}

/// Sparse date -> artist -> cell table. BTreeMap keys keep the output
/// deterministic: identical inputs serialize byte-identically.
pub type RoasterMatrix = BTreeMap<String, BTreeMap<String, RoasterCell>>;

/// One persisted roster row: an artist working a shoot on a date.
///
/// Entries represent "who worked where"; vacation-only days never produce
/// one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoasterEntry {
    /// ISO date of the working day.
    pub date: String,
    /// Normalized artist name.
    pub artist: String,
    /// Business key of the contributing shoot.
    pub source_invoice: Option<String>,
    /// Coordinator of the contributing shoot.
    pub coordinator: Option<String>,
    /// Location of the contributing shoot.
    pub location: Option<String>,
    /// Work type of the contributing shoot.
    pub work_type: Option<String>,
    /// Description of the contributing shoot.
    pub description: Option<String>,
}
