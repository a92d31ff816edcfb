//! Property tests for the parsing helpers and the matrix builder.

use proptest::prelude::*;

use roaster_engine::models::{Shoot, Vacation};
use roaster_engine::normalize::{parse_artist_list, parse_range_to_iso};
use roaster_engine::roaster::build_roaster_matrix;

fn range_text() -> impl Strategy<Value = (String, String, String)> {
    (
        1u32..=28,
        1u32..=12,
        1900i32..=2999,
        1u32..=28,
        1u32..=12,
        1900i32..=2999,
        prop::sample::select(vec!["TO", "to", "To", "tO"]),
        prop::sample::select(vec!["", " ", "   "]),
    )
        .prop_map(|(d1, m1, y1, d2, m2, y2, keyword, pad)| {
            let text = format!(
                "{d1:02}-{m1:02}-{y1:04}{pad}{keyword}{pad}{d2:02}-{m2:02}-{y2:04}"
            );
            let start = format!("{y1:04}-{m1:02}-{d1:02}");
            let end = format!("{y2:04}-{m2:02}-{d2:02}");
            (text, start, end)
        })
}

fn shoots() -> impl Strategy<Value = Vec<Shoot>> {
    prop::collection::vec(
        (1u32..=28, 1u32..=28, "[A-Z]{3,8}(, [A-Z]{3,8})?", 1u32..=999).prop_map(
            |(d1, d2, artists, invoice)| {
                let (start, end) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
                Shoot {
                    invoice_no: Some(format!("INV-{invoice:03}")),
                    shoot_start_date: Some(format!("2025-11-{start:02}")),
                    shoot_end_date: Some(format!("2025-11-{end:02}")),
                    artist_provided: Some(artists),
                    ..Shoot::default()
                }
            },
        ),
        0..8,
    )
}

fn vacations() -> impl Strategy<Value = Vec<Vacation>> {
    prop::collection::vec(
        (1u32..=28, 1u32..=28, "[A-Z]{3,8}").prop_map(|(d1, d2, artist)| {
            let (start, end) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            Vacation {
                artist: Some(artist),
                vacation_start: Some(format!("2025-11-{start:02}")),
                vacation_end: Some(format!("2025-11-{end:02}")),
                ..Vacation::default()
            }
        }),
        0..8,
    )
}

proptest! {
    #[test]
    fn range_pattern_round_trips((text, start, end) in range_text()) {
        let parsed = parse_range_to_iso(&text).expect("pattern should match");
        prop_assert_eq!(parsed.start, start);
        prop_assert_eq!(parsed.end, end);
    }

    #[test]
    fn text_without_digits_never_parses(text in "[a-zA-Z ]{0,40}") {
        prop_assert!(parse_range_to_iso(&text).is_none());
    }

    #[test]
    fn artist_list_is_uppercase_and_deduped(input in "[a-zA-Z ,;]{0,60}") {
        let names = parse_artist_list(Some(&input));
        for name in &names {
            prop_assert_eq!(name.clone(), name.trim().to_uppercase());
            prop_assert!(!name.is_empty());
        }
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn matrix_build_is_idempotent(shoots in shoots(), vacations in vacations()) {
        let first = build_roaster_matrix(&shoots, &vacations, 11, 2025);
        let second = build_roaster_matrix(&shoots, &vacations, 11, 2025);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn matrix_outputs_are_sorted(shoots in shoots(), vacations in vacations()) {
        let result = build_roaster_matrix(&shoots, &vacations, 11, 2025);
        prop_assert!(result.dates.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.artists.windows(2).all(|w| w[0] < w[1]));
        for date in result.matrix.keys() {
            prop_assert!(date.starts_with("2025-11-"));
        }
    }
}
