//! Master data field normalization.

use crate::models::MasterData;

use super::parse::{normalize_artist_name, normalize_lookup};

fn uppercased(field: Option<String>) -> Option<String> {
    field.map(|s| if s.is_empty() { s } else { normalize_lookup(&s) })
}

/// Normalizes a master data row: categorical values are uppercased so
/// lookups and autocomplete match regardless of entry casing.
pub fn normalize_master_data(input: MasterData) -> MasterData {
    let mut result = input;

    if let Some(artist) = result.artist.as_deref().filter(|s| !s.is_empty()) {
        result.artist = Some(normalize_artist_name(artist));
    }
    result.coordinator = uppercased(result.coordinator);
    result.payment_mode = uppercased(result.payment_mode);
    result.work_type = uppercased(result.work_type);
    result.month = uppercased(result.month);
    result.expense_category = uppercased(result.expense_category);

    result
}
