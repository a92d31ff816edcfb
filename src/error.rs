//! Error types for the roaster engine.
//!
//! The derivation functions themselves are total and never fail; the only
//! failure categories live at the collaborator boundary, where callers
//! validate fully-derived records before persisting them. Those categories
//! are modelled here with the `thiserror` crate.

use thiserror::Error;

/// The boundary error type for the roaster engine.
///
/// Returned by the validation helpers in [`crate::validate`] and suitable
/// for surfacing to API callers as user-visible validation messages.
///
/// # Example
///
/// ```
/// use roaster_engine::error::EngineError;
///
/// let error = EngineError::MissingField {
///     record: "shoot",
///     field: "invoice_no",
/// };
/// assert_eq!(error.to_string(), "Missing required field 'invoice_no' on shoot");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required business key or field was missing from a record.
    #[error("Missing required field '{field}' on {record}")]
    MissingField {
        /// The record kind the field belongs to.
        record: &'static str,
        /// The missing field name.
        field: &'static str,
    },

    /// A shoot had no `inv_date` and no parseable `shoot_dates` range to
    /// derive one from.
    #[error("Shoot '{invoice_no}' requires inv_date or a valid shoot_dates range")]
    UnresolvedInvoiceDate {
        /// The business key of the offending shoot.
        invoice_no: String,
    },

    /// A unique business key already exists in storage. Detected by the
    /// storage collaborator and surfaced through this type by callers.
    #[error("invoice_no '{invoice_no}' already exists")]
    DuplicateInvoiceNo {
        /// The duplicated business key.
        invoice_no: String,
    },

    /// A month value outside the calendar range.
    #[error("Invalid month {month}: expected a value in 1..=12")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
