//! Roster derivation: the monthly matrix builder, availability windows,
//! and the coordinator amount calculator.

mod availability;
mod coordinator;
mod matrix;

pub use availability::{ArtistAvailability, build_availability};
pub use coordinator::{
    ArtistShare, CoordinatorAmount, CoordinatorAmountParams, calculate_coordinator_amount,
};
pub use matrix::{RoasterBuildResult, build_roaster_matrix, merge_cell};
