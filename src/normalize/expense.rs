//! Expense field normalization.

use crate::models::Expense;

use super::parse::{normalize_lookup, parse_artist_list};

fn uppercased(field: Option<String>) -> Option<String> {
    field.map(|s| if s.is_empty() { s } else { normalize_lookup(&s) })
}

/// Normalizes an expense record.
///
/// `total_expense` derives as `amount_out - amount_in` whenever either
/// amount is present, unless the caller supplied a total of their own.
/// The `paid_for_artist` list follows the same split/trim/uppercase rule
/// as a shoot's artist list.
pub fn normalize_expense(input: Expense) -> Expense {
    let mut result = input;

    if result.amount_out.is_some() || result.amount_in.is_some() {
        let out = result.amount_out.unwrap_or_default();
        let inc = result.amount_in.unwrap_or_default();
        result.total_expense = result.total_expense.or(Some(out - inc));
    }

    if let Some(raw) = result.paid_for_artist.as_deref().filter(|s| !s.is_empty()) {
        result.paid_for_artist = Some(parse_artist_list(Some(raw)).join(", "));
    }

    result.description = uppercased(result.description);
    result.remark = uppercased(result.remark);
    result.category = uppercased(result.category);
    result.mode = uppercased(result.mode);
    result.invoice_no = uppercased(result.invoice_no);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn test_total_expense_derived_from_amounts() {
        let expense = normalize_expense(Expense {
            amount_out: Some(dec(500)),
            amount_in: Some(dec(200)),
            ..Expense::default()
        });
        assert_eq!(expense.total_expense, Some(dec(300)));
    }

    #[test]
    fn test_missing_amount_defaults_to_zero_in_total() {
        let expense = normalize_expense(Expense {
            amount_out: Some(dec(500)),
            ..Expense::default()
        });
        assert_eq!(expense.total_expense, Some(dec(500)));
    }

    #[test]
    fn test_caller_supplied_total_wins() {
        let expense = normalize_expense(Expense {
            amount_out: Some(dec(500)),
            amount_in: Some(dec(200)),
            total_expense: Some(dec(450)),
            ..Expense::default()
        });
        assert_eq!(expense.total_expense, Some(dec(450)));
    }

    #[test]
    fn test_no_amounts_means_no_total() {
        let expense = normalize_expense(Expense::default());
        assert!(expense.total_expense.is_none());
    }

    #[test]
    fn test_paid_for_artist_normalized_like_artist_list() {
        let expense = normalize_expense(Expense {
            paid_for_artist: Some("anya; beau ,".to_string()),
            ..Expense::default()
        });
        assert_eq!(expense.paid_for_artist.as_deref(), Some("ANYA, BEAU"));
    }

    #[test]
    fn test_lookup_fields_uppercased() {
        let expense = normalize_expense(Expense {
            description: Some("cab fare".to_string()),
            remark: Some("night shoot".to_string()),
            category: Some("travel".to_string()),
            mode: Some("upi".to_string()),
            invoice_no: Some("inv-003".to_string()),
            ..Expense::default()
        });
        assert_eq!(expense.description.as_deref(), Some("CAB FARE"));
        assert_eq!(expense.remark.as_deref(), Some("NIGHT SHOOT"));
        assert_eq!(expense.category.as_deref(), Some("TRAVEL"));
        assert_eq!(expense.mode.as_deref(), Some("UPI"));
        assert_eq!(expense.invoice_no.as_deref(), Some("INV-003"));
    }
}
