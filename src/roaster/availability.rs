//! Per-artist availability over an arbitrary date window.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{Shoot, Vacation};
use crate::normalize::{expand_date_range, normalize_artist_name, parse_artist_list};

/// Booked, vacation, and conflicting dates for one artist inside the
/// queried window. Each list is sorted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistAvailability {
    /// Dates the artist is booked on a shoot.
    pub booked: Vec<String>,
    /// Dates the artist is on vacation.
    pub vacation: Vec<String>,
    /// Dates appearing in both lists.
    pub conflicts: Vec<String>,
}

/// Buckets booked and vacation dates per artist across the `[from, to]`
/// window (both ends inclusive).
///
/// Record endpoints missing or empty default to the corresponding window
/// edge, so an open-ended vacation covers the rest of the window. Dates
/// outside the window are clipped by plain string comparison. When
/// `artists` is non-empty only those (already-normalized) names are
/// reported.
pub fn build_availability(
    shoots: &[Shoot],
    vacations: &[Vacation],
    from: &str,
    to: &str,
    artists: &[String],
) -> BTreeMap<String, ArtistAvailability> {
    let mut booked: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut on_vacation: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    let wanted = |name: &str| artists.is_empty() || artists.iter().any(|a| a == name);
    let window_edge = |value: Option<&str>, edge: &str| {
        value.filter(|s| !s.is_empty()).unwrap_or(edge).to_string()
    };

    for shoot in shoots {
        let list = parse_artist_list(shoot.artist_provided.as_deref());
        let start = window_edge(shoot.shoot_start_date.as_deref(), from);
        let end = window_edge(shoot.shoot_end_date.as_deref(), to);
        for iso in expand_date_range(&start, &end) {
            if iso.as_str() < from || iso.as_str() > to {
                continue;
            }
            for artist in &list {
                if wanted(artist) {
                    booked.entry(artist.clone()).or_default().insert(iso.clone());
                }
            }
        }
    }

    for vacation in vacations {
        let Some(artist) = vacation.artist.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let artist = normalize_artist_name(artist);
        if !wanted(&artist) {
            continue;
        }
        let start = window_edge(vacation.vacation_start.as_deref(), from);
        let end = window_edge(vacation.vacation_end.as_deref(), to);
        for iso in expand_date_range(&start, &end) {
            if iso.as_str() < from || iso.as_str() > to {
                continue;
            }
            on_vacation.entry(artist.clone()).or_default().insert(iso);
        }
    }

    let names: BTreeSet<String> = booked.keys().chain(on_vacation.keys()).cloned().collect();
    names
        .into_iter()
        .map(|name| {
            let booked_dates = booked.remove(&name).unwrap_or_default();
            let vacation_dates = on_vacation.remove(&name).unwrap_or_default();
            let conflicts = booked_dates
                .intersection(&vacation_dates)
                .cloned()
                .collect();
            let availability = ArtistAvailability {
                booked: booked_dates.into_iter().collect(),
                vacation: vacation_dates.into_iter().collect(),
                conflicts,
            };
            (name, availability)
        })
        .collect()
}
