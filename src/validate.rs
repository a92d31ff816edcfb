//! Caller-boundary validation.
//!
//! The normalizers and builders are total; these helpers are where a
//! caller rejects a record before persisting it. Run them after
//! normalization so derivable fields (`inv_date` from `shoot_dates`) have
//! had their chance to resolve.

use crate::error::{EngineError, EngineResult};
use crate::models::{Expense, Payment, Shoot, Vacation};

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Checks a normalized shoot is persistable: `invoice_no` present and
/// `inv_date` resolved.
///
/// # Example
///
/// ```
/// use roaster_engine::models::Shoot;
/// use roaster_engine::validate::validate_shoot_for_create;
///
/// let shoot = Shoot {
///     invoice_no: Some("INV-001".to_string()),
///     inv_date: Some("2025-11-02".to_string()),
///     ..Shoot::default()
/// };
/// assert!(validate_shoot_for_create(&shoot).is_ok());
/// assert!(validate_shoot_for_create(&Shoot::default()).is_err());
/// ```
pub fn validate_shoot_for_create(shoot: &Shoot) -> EngineResult<()> {
    if !present(shoot.invoice_no.as_deref()) {
        return Err(EngineError::MissingField {
            record: "shoot",
            field: "invoice_no",
        });
    }
    if !present(shoot.inv_date.as_deref()) {
        return Err(EngineError::UnresolvedInvoiceDate {
            invoice_no: shoot.invoice_no.clone().unwrap_or_default(),
        });
    }
    Ok(())
}

/// Checks a normalized vacation carries an artist and both range
/// endpoints.
pub fn validate_vacation_for_create(vacation: &Vacation) -> EngineResult<()> {
    if !present(vacation.artist.as_deref()) {
        return Err(EngineError::MissingField {
            record: "vacation",
            field: "artist",
        });
    }
    if !present(vacation.vacation_start.as_deref()) {
        return Err(EngineError::MissingField {
            record: "vacation",
            field: "vacation_start",
        });
    }
    if !present(vacation.vacation_end.as_deref()) {
        return Err(EngineError::MissingField {
            record: "vacation",
            field: "vacation_end",
        });
    }
    Ok(())
}

/// Checks an expense carries a date.
pub fn validate_expense_for_create(expense: &Expense) -> EngineResult<()> {
    if !present(expense.date.as_deref()) {
        return Err(EngineError::MissingField {
            record: "expense",
            field: "date",
        });
    }
    Ok(())
}

/// Checks a payment carries a date.
pub fn validate_payment_for_create(payment: &Payment) -> EngineResult<()> {
    if !present(payment.date.as_deref()) {
        return Err(EngineError::MissingField {
            record: "payment",
            field: "date",
        });
    }
    Ok(())
}

/// Checks a roster month is in the calendar range.
pub fn validate_month(month: u32) -> EngineResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(EngineError::InvalidMonth { month })
    }
}
