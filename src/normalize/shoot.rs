//! Shoot field normalization.
//!
//! Recomputes every derived field of a shoot from the then-current merged
//! record. The steps run in order because later ones read earlier results:
//! date range expansion, artist list normalization, amount derivation,
//! balance/status derivation, and lookup-key uppercasing.

use rust_decimal::Decimal;

use crate::models::{Shoot, ShootStatus};

use super::parse::{normalize_lookup, parse_artist_list, parse_range_to_iso};

fn uppercased(field: Option<String>) -> Option<String> {
    field.map(|s| if s.is_empty() { s } else { normalize_lookup(&s) })
}

/// Normalizes a shoot record, computing its derived fields.
///
/// Pure and total: unparseable values pass through unchanged or stay
/// absent, and nothing here ever fails. Callers re-run this on every
/// create and update, after merging the stored row with the incoming
/// patch.
///
/// # Example
///
/// ```
/// use roaster_engine::models::Shoot;
/// use roaster_engine::normalize::normalize_shoot;
/// use rust_decimal::Decimal;
///
/// let shoot = normalize_shoot(Shoot {
///     per_day_rate: Some(Decimal::new(8000, 0)),
///     work_days: Some(Decimal::new(2, 0)),
///     artist_provided: Some("Anya, beau".to_string()),
///     ..Shoot::default()
/// });
///
/// assert_eq!(shoot.artist_provided.as_deref(), Some("ANYA, BEAU"));
/// assert_eq!(shoot.total_artists, Some(2));
/// assert_eq!(shoot.amount, Some(Decimal::new(32000, 0)));
/// assert_eq!(shoot.balance, Some(Decimal::new(32000, 0)));
/// ```
pub fn normalize_shoot(input: Shoot) -> Shoot {
    let mut result = input;

    // 1. Expand the free-text range when either ISO endpoint is missing;
    //    the range start also backfills a missing inv_date.
    let endpoints_missing =
        result.shoot_start_date.is_none() || result.shoot_end_date.is_none();
    if let Some(raw_range) = result.shoot_dates.as_deref().filter(|s| !s.is_empty())
        && endpoints_missing
        && let Some(range) = parse_range_to_iso(raw_range)
    {
        result.shoot_start_date = Some(range.start.clone());
        result.shoot_end_date = Some(range.end);
        result.inv_date = result.inv_date.or(Some(range.start));
    }

    let per_day = result.per_day_rate;
    let days = result.work_days;
    let mut artists = result.total_artists;
    let supplied_amount = result.amount;
    let received = result.received;

    // 2. Normalize the artist list; its size floors total_artists.
    if let Some(raw) = result.artist_provided.as_deref().filter(|s| !s.is_empty()) {
        let names = parse_artist_list(Some(raw));
        let count = names.len() as u32;
        result.artist_provided = Some(names.join(", "));
        if artists.is_none_or(|a| a == 0 || count > a) {
            artists = Some(count);
        }
        result.total_artists = artists;
    }

    // 3. Rate x days x artists overrides any supplied amount.
    if let (Some(rate), Some(days), Some(n)) = (per_day, days, artists) {
        result.amount = Some(rate * days * Decimal::from(n));
    } else if supplied_amount.is_some() {
        result.amount = supplied_amount;
    }

    // 4. Balance and status, only once an amount is resolvable.
    if let Some(amount) = result.amount {
        let received = received.unwrap_or(Decimal::ZERO);
        let balance = amount - received;
        result.received = Some(received);
        result.balance = Some(balance);
        if amount > Decimal::ZERO {
            if balance == Decimal::ZERO {
                result.status = Some(ShootStatus::Paid);
            } else if received > Decimal::ZERO {
                result.status = Some(ShootStatus::Partial);
            } else {
                result.status = result.status.or(Some(ShootStatus::Pending));
            }
        } else {
            // Non-positive amounts never downgrade an explicit status.
            result.status = result.status.or(Some(ShootStatus::Pending));
        }
    }

    // 5. inv_date that is not shaped YYYY-MM-DD passes through untouched;
    //    create-time rejection is the caller's job (validate module).

    // 6. Lookup keys are uppercased for consistent matching and search.
    result.coordinator = uppercased(result.coordinator);
    result.invoice_no = uppercased(result.invoice_no);
    result.location = uppercased(result.location);
    result.work_type = uppercased(result.work_type);
    result.description = uppercased(result.description);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_range_expansion_sets_endpoints_and_inv_date() {
        let shoot = normalize_shoot(Shoot {
            shoot_dates: Some("01-11-2025 TO 05-11-2025".to_string()),
            ..Shoot::default()
        });

        assert_eq!(shoot.shoot_start_date.as_deref(), Some("2025-11-01"));
        assert_eq!(shoot.shoot_end_date.as_deref(), Some("2025-11-05"));
        assert_eq!(shoot.inv_date.as_deref(), Some("2025-11-01"));
    }

    #[test]
    fn test_range_expansion_keeps_existing_inv_date() {
        let shoot = normalize_shoot(Shoot {
            inv_date: Some("2025-10-28".to_string()),
            shoot_dates: Some("01-11-2025 TO 05-11-2025".to_string()),
            ..Shoot::default()
        });

        assert_eq!(shoot.inv_date.as_deref(), Some("2025-10-28"));
    }

    #[test]
    fn test_range_expansion_skipped_when_endpoints_present() {
        let shoot = normalize_shoot(Shoot {
            shoot_dates: Some("01-11-2025 TO 05-11-2025".to_string()),
            shoot_start_date: Some("2025-11-02".to_string()),
            shoot_end_date: Some("2025-11-04".to_string()),
            ..Shoot::default()
        });

        assert_eq!(shoot.shoot_start_date.as_deref(), Some("2025-11-02"));
        assert_eq!(shoot.shoot_end_date.as_deref(), Some("2025-11-04"));
    }

    #[test]
    fn test_unparseable_range_leaves_fields_untouched() {
        let shoot = normalize_shoot(Shoot {
            shoot_dates: Some("early November".to_string()),
            ..Shoot::default()
        });

        assert_eq!(shoot.shoot_dates.as_deref(), Some("early November"));
        assert!(shoot.shoot_start_date.is_none());
        assert!(shoot.inv_date.is_none());
    }

    #[test]
    fn test_spec_example_normalization() {
        let shoot = normalize_shoot(Shoot {
            per_day_rate: Some(dec("8000")),
            work_days: Some(dec("2")),
            artist_provided: Some("Anya, beau".to_string()),
            ..Shoot::default()
        });

        assert_eq!(shoot.total_artists, Some(2));
        assert_eq!(shoot.amount, Some(dec("32000")));
        assert_eq!(shoot.balance, Some(dec("32000")));
        assert_eq!(shoot.artist_provided.as_deref(), Some("ANYA, BEAU"));
        assert_eq!(shoot.status, Some(ShootStatus::Pending));
    }

    #[test]
    fn test_parsed_artist_count_floors_total_artists() {
        let shoot = normalize_shoot(Shoot {
            artist_provided: Some("ANYA, AIMEE, BEAU".to_string()),
            total_artists: Some(2),
            ..Shoot::default()
        });
        assert_eq!(shoot.total_artists, Some(3));

        let shoot = normalize_shoot(Shoot {
            artist_provided: Some("ANYA".to_string()),
            total_artists: Some(5),
            ..Shoot::default()
        });
        assert_eq!(shoot.total_artists, Some(5));
    }

    #[test]
    fn test_explicit_total_artists_kept_without_names() {
        let shoot = normalize_shoot(Shoot {
            total_artists: Some(4),
            ..Shoot::default()
        });
        assert_eq!(shoot.total_artists, Some(4));
    }

    #[test]
    fn test_derived_amount_overrides_supplied_amount() {
        let shoot = normalize_shoot(Shoot {
            per_day_rate: Some(dec("5000")),
            work_days: Some(dec("2")),
            total_artists: Some(3),
            amount: Some(dec("99")),
            ..Shoot::default()
        });
        assert_eq!(shoot.amount, Some(dec("30000")));
    }

    #[test]
    fn test_supplied_amount_kept_when_inputs_incomplete() {
        let shoot = normalize_shoot(Shoot {
            per_day_rate: Some(dec("5000")),
            amount: Some(dec("12500")),
            ..Shoot::default()
        });
        assert_eq!(shoot.amount, Some(dec("12500")));
        assert_eq!(shoot.balance, Some(dec("12500")));
    }

    #[test]
    fn test_status_transitions() {
        let base = Shoot {
            amount: Some(dec("100")),
            ..Shoot::default()
        };

        let pending = normalize_shoot(base.clone());
        assert_eq!(pending.status, Some(ShootStatus::Pending));
        assert_eq!(pending.received, Some(dec("0")));
        assert_eq!(pending.balance, Some(dec("100")));

        let partial = normalize_shoot(Shoot {
            received: Some(dec("40")),
            ..base.clone()
        });
        assert_eq!(partial.status, Some(ShootStatus::Partial));
        assert_eq!(partial.balance, Some(dec("60")));

        let paid = normalize_shoot(Shoot {
            received: Some(dec("100")),
            ..base
        });
        assert_eq!(paid.status, Some(ShootStatus::Paid));
        assert_eq!(paid.balance, Some(dec("0")));
    }

    #[test]
    fn test_paid_overrides_explicit_status() {
        let shoot = normalize_shoot(Shoot {
            amount: Some(dec("100")),
            received: Some(dec("100")),
            status: Some(ShootStatus::Pending),
            ..Shoot::default()
        });
        assert_eq!(shoot.status, Some(ShootStatus::Paid));
    }

    #[test]
    fn test_pending_branch_preserves_explicit_status() {
        let shoot = normalize_shoot(Shoot {
            amount: Some(dec("100")),
            status: Some(ShootStatus::Partial),
            ..Shoot::default()
        });
        assert_eq!(shoot.status, Some(ShootStatus::Partial));
    }

    #[test]
    fn test_zero_amount_keeps_caller_status_and_computes_balance() {
        let shoot = normalize_shoot(Shoot {
            amount: Some(dec("0")),
            received: Some(dec("25")),
            status: Some(ShootStatus::Paid),
            ..Shoot::default()
        });
        assert_eq!(shoot.status, Some(ShootStatus::Paid));
        assert_eq!(shoot.balance, Some(dec("-25")));

        let defaulted = normalize_shoot(Shoot {
            amount: Some(dec("0")),
            ..Shoot::default()
        });
        assert_eq!(defaulted.status, Some(ShootStatus::Pending));
        assert_eq!(defaulted.balance, Some(dec("0")));
    }

    #[test]
    fn test_no_amount_means_no_balance_or_status() {
        let shoot = normalize_shoot(Shoot {
            received: Some(dec("40")),
            ..Shoot::default()
        });
        assert!(shoot.amount.is_none());
        assert!(shoot.balance.is_none());
        assert!(shoot.status.is_none());
    }

    #[test]
    fn test_invalid_inv_date_passes_through() {
        let shoot = normalize_shoot(Shoot {
            inv_date: Some("1st Nov".to_string()),
            ..Shoot::default()
        });
        assert_eq!(shoot.inv_date.as_deref(), Some("1st Nov"));
    }

    #[test]
    fn test_lookup_keys_are_uppercased() {
        let shoot = normalize_shoot(Shoot {
            coordinator: Some("  rahul ".to_string()),
            invoice_no: Some("inv-001".to_string()),
            location: Some("mumbai".to_string()),
            work_type: Some("ad".to_string()),
            description: Some("Brand film".to_string()),
            ..Shoot::default()
        });

        assert_eq!(shoot.coordinator.as_deref(), Some("RAHUL"));
        assert_eq!(shoot.invoice_no.as_deref(), Some("INV-001"));
        assert_eq!(shoot.location.as_deref(), Some("MUMBAI"));
        assert_eq!(shoot.work_type.as_deref(), Some("AD"));
        assert_eq!(shoot.description.as_deref(), Some("BRAND FILM"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_shoot(Shoot {
            shoot_dates: Some("01-11-2025 TO 05-11-2025".to_string()),
            per_day_rate: Some(dec("8000")),
            work_days: Some(dec("2")),
            artist_provided: Some("Anya, beau".to_string()),
            coordinator: Some("rahul".to_string()),
            ..Shoot::default()
        });
        let twice = normalize_shoot(once.clone());
        assert_eq!(once, twice);
    }
}
