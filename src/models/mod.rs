//! Core data models for the roaster engine.
//!
//! Records are flat, serde-serializable shapes with optional fields: the
//! same struct serves as a full storage row, a partial create body, and a
//! merged update patch.

pub(crate) mod de;
mod expense;
mod master_data;
mod payment;
mod roaster;
mod shoot;
mod vacation;

pub use expense::Expense;
pub use master_data::MasterData;
pub use payment::Payment;
pub use roaster::{
    BookedDetails, CellKind, ConflictDetails, RoasterCell, RoasterEntry, RoasterMatrix,
    VacationDetails,
};
pub use shoot::{Shoot, ShootStatus};
pub use vacation::Vacation;
