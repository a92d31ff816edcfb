//! Monthly roaster matrix construction.
//!
//! Expands shoot and vacation date ranges into a sparse per-date,
//! per-artist status grid for one calendar month, flagging double-bookings
//! as conflicts, and emits the flat roster entries callers persist.
//!
//! Malformed individual records never abort the batch: a shoot without a
//! resolved date range or a vacation without an artist is simply not a
//! roster input yet.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    BookedDetails, ConflictDetails, RoasterCell, RoasterEntry, RoasterMatrix, VacationDetails,
};
use crate::normalize::{expand_date_range, normalize_artist_name, parse_artist_list};

/// Output of [`build_roaster_matrix`]: the sorted universes of dates and
/// artists observed, the cell grid, and the persistable entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoasterBuildResult {
    /// Sorted, de-duplicated artist names seen across both inputs,
    /// including artists with vacations but no bookings.
    pub artists: Vec<String>,
    /// Sorted ISO dates inside the target month that received a write.
    pub dates: Vec<String>,
    /// The date -> artist -> cell grid.
    pub matrix: RoasterMatrix,
    /// One row per (shoot, date, artist) booking inside the month.
    pub entries: Vec<RoasterEntry>,
}

/// Resolves a write against whatever already occupies a `(date, artist)`
/// cell.
///
/// Writing the same cell type twice is idempotent (the first write is
/// retained); a differing type upgrades the cell to a conflict that keeps
/// both original classifications.
///
/// # Example
///
/// ```
/// use roaster_engine::models::{BookedDetails, CellKind, RoasterCell, VacationDetails};
/// use roaster_engine::roaster::merge_cell;
///
/// let booked = RoasterCell::Booked(BookedDetails::default());
/// let vacation = RoasterCell::Vacation(VacationDetails::default());
///
/// assert_eq!(merge_cell(None, booked.clone()), booked);
/// assert_eq!(merge_cell(Some(booked.clone()), booked.clone()), booked);
///
/// let conflict = merge_cell(Some(booked), vacation);
/// assert_eq!(conflict.kind(), CellKind::Conflict);
/// ```
pub fn merge_cell(existing: Option<RoasterCell>, incoming: RoasterCell) -> RoasterCell {
    match existing {
        None => incoming,
        Some(current) if current.kind() == incoming.kind() => current,
        Some(current) => RoasterCell::Conflict(ConflictDetails {
            existing: Box::new(current),
            incoming: Box::new(incoming),
        }),
    }
}

/// Builds the roaster matrix for one `(month, year)`.
///
/// Callers pre-filter `shoots` and `vacations` to ranges overlapping the
/// month (a half-open storage query); this function then accepts a date
/// into the output only when it starts with the `YYYY-MM-` month prefix, a
/// plain string comparison with no calendar clamping. All shoot-derived
/// BOOKED writes happen before any vacation-derived VACATION write, so a
/// conflict's `existing` side is the booking in the current pass ordering.
///
/// Deterministic: identical inputs produce identical output, including
/// ordering.
pub fn build_roaster_matrix(
    shoots: &[crate::models::Shoot],
    vacations: &[crate::models::Vacation],
    month: u32,
    year: i32,
) -> RoasterBuildResult {
    let month_prefix = format!("{year}-{month:02}-");

    let mut matrix = RoasterMatrix::new();
    let mut entries: Vec<RoasterEntry> = Vec::new();
    let mut date_set: BTreeSet<String> = BTreeSet::new();
    let mut artist_set: BTreeSet<String> = BTreeSet::new();

    let write = |matrix: &mut RoasterMatrix, date: &str, artist: &str, cell: RoasterCell| {
        let row = matrix.entry(date.to_string()).or_default();
        let current = row.remove(artist);
        row.insert(artist.to_string(), merge_cell(current, cell));
    };

    for shoot in shoots {
        let (Some(start), Some(end)) = (
            shoot.shoot_start_date.as_deref().filter(|s| !s.is_empty()),
            shoot.shoot_end_date.as_deref().filter(|s| !s.is_empty()),
        ) else {
            debug!(
                invoice_no = shoot.invoice_no.as_deref().unwrap_or(""),
                "shoot skipped: date range not resolved"
            );
            continue;
        };

        let artist_list = parse_artist_list(shoot.artist_provided.as_deref());
        artist_set.extend(artist_list.iter().cloned());

        for date in expand_date_range(start, end) {
            if !date.starts_with(&month_prefix) {
                continue;
            }
            date_set.insert(date.clone());
            for artist in &artist_list {
                write(
                    &mut matrix,
                    &date,
                    artist,
                    RoasterCell::Booked(BookedDetails {
                        invoice_no: shoot.invoice_no.clone(),
                        work_type: shoot.work_type.clone(),
                        location: shoot.location.clone(),
                    }),
                );
                entries.push(RoasterEntry {
                    date: date.clone(),
                    artist: artist.clone(),
                    source_invoice: shoot.invoice_no.clone(),
                    coordinator: shoot.coordinator.clone(),
                    location: shoot.location.clone(),
                    work_type: shoot.work_type.clone(),
                    description: shoot.description.clone(),
                });
            }
        }
    }

    for vacation in vacations {
        let (Some(start), Some(end), Some(artist)) = (
            vacation.vacation_start.as_deref().filter(|s| !s.is_empty()),
            vacation.vacation_end.as_deref().filter(|s| !s.is_empty()),
            vacation.artist.as_deref().filter(|s| !s.is_empty()),
        ) else {
            debug!("vacation skipped: artist or date range missing");
            continue;
        };

        let artist = normalize_artist_name(artist);
        artist_set.insert(artist.clone());

        for date in expand_date_range(start, end) {
            if !date.starts_with(&month_prefix) {
                continue;
            }
            date_set.insert(date.clone());
            write(
                &mut matrix,
                &date,
                &artist,
                RoasterCell::Vacation(VacationDetails {
                    reason: vacation.reason.clone(),
                }),
            );
        }
    }

    RoasterBuildResult {
        artists: artist_set.into_iter().collect(),
        dates: date_set.into_iter().collect(),
        matrix,
        entries,
    }
}
