//! Payment field normalization.

use crate::models::Payment;

use super::parse::normalize_lookup;

fn uppercased(field: Option<String>) -> Option<String> {
    field.map(|s| if s.is_empty() { s } else { normalize_lookup(&s) })
}

/// Normalizes a payment record: amounts and serials are already coerced at
/// deserialization, so this is lookup-key uppercasing.
pub fn normalize_payment(input: Payment) -> Payment {
    let mut result = input;

    result.payment_mode = uppercased(result.payment_mode);
    result.received_from = uppercased(result.received_from);
    result.invoice_no = uppercased(result.invoice_no);
    result.location = uppercased(result.location);
    result.work_type = uppercased(result.work_type);
    result.description = uppercased(result.description);

    result
}
