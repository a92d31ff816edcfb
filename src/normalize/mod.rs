//! Field normalizers for the roaster engine.
//!
//! Each normalizer is a pure, total function from a partially-filled record
//! to the same record with derived fields computed: ISO dates expanded from
//! free-text ranges, artist lists normalized, amounts/balances/status
//! derived, and lookup keys uppercased. Unparseable values pass through
//! unchanged or stay absent; nothing here errors.

mod expense;
mod master_data;
mod parse;
mod payment;
mod shoot;
mod vacation;

pub use expense::normalize_expense;
pub use master_data::normalize_master_data;
pub use parse::{
    IsoRange, expand_date_range, normalize_artist_name, normalize_lookup, parse_artist_list,
    parse_iso_date, parse_number, parse_range_to_iso,
};
pub use payment::normalize_payment;
pub use shoot::normalize_shoot;
pub use vacation::normalize_vacation;
