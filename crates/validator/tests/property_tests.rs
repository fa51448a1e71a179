//! Property-based tests for vouch-validator.

use proptest::prelude::*;
use vouch_validator::prelude::*;
use vouch_validator::validators::identity::ResidentId;

/// Region prefixes the built-in table recognizes; enough variety for
/// generated identity numbers.
const REGIONS: &[&str] = &["11", "31", "44", "51", "62", "81"];

prop_compose! {
    /// A structurally valid 17-digit identity prefix: known region,
    /// possible calendar birthdate safely in the past, any sequence.
    fn id_prefix()(
        region_idx in 0..REGIONS.len(),
        suffix in "[0-9]{4}",
        year in 1900_u32..=2000,
        month in 1_u32..=12,
        day in 1_u32..=28,
        sequence in 0_u32..=999,
    ) -> String {
        let region = REGIONS[region_idx];
        format!("{region}{suffix}{year:04}{month:02}{day:02}{sequence:03}")
    }
}

// ============================================================================
// CHECK DIGIT: pure, deterministic, total on 17-digit input
// ============================================================================

proptest! {
    #[test]
    fn check_digit_is_deterministic(prefix in "[0-9]{17}") {
        let first = ResidentId::check_digit(&prefix);
        let second = ResidentId::check_digit(&prefix);
        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn check_digit_rejects_everything_else(input in ".{0,40}") {
        if input.len() != 17 || !input.bytes().all(|b| b.is_ascii_digit()) {
            prop_assert_eq!(ResidentId::check_digit(&input), None);
        }
    }

    #[test]
    fn generated_ids_validate_and_are_fixed_points(prefix in id_prefix()) {
        let check = ResidentId::check_digit(&prefix).unwrap();
        let full = format!("{prefix}{check}");

        let canonical = resident_id().canonicalize(&full).unwrap();
        prop_assert_eq!(canonical, full);
    }

    #[test]
    fn corrupting_the_check_digit_is_always_caught(prefix in id_prefix()) {
        let check = ResidentId::check_digit(&prefix).unwrap();
        for wrong in "0123456789X".chars().filter(|c| *c != check) {
            let corrupted = format!("{prefix}{wrong}");
            prop_assert!(resident_id().canonicalize(&corrupted).is_err());
        }
    }
}

// ============================================================================
// IDENTITY VALIDATION: total over arbitrary input
// ============================================================================

proptest! {
    #[test]
    fn canonicalize_never_panics(input in ".{0,60}") {
        let _ = resident_id().canonicalize(&input);
    }

    #[test]
    fn failures_never_leak_a_canonical_value(input in "[0-9]{0,20}") {
        // Either a full 18-character canonical string or an error;
        // nothing in between.
        if let Ok(canonical) = resident_id().canonicalize(&input) {
            prop_assert_eq!(canonical.len(), 18);
        }
    }
}

// ============================================================================
// DATE NORMALIZATION: total, idempotent on its own output
// ============================================================================

proptest! {
    #[test]
    fn normalize_never_panics(input in ".{0,40}") {
        let _ = flexible_date().normalize(&input);
    }

    #[test]
    fn normalize_is_idempotent_on_canonical_output(
        year in 1800_u32..=2100,
        month in 1_u32..=12,
        day in 1_u32..=28,
    ) {
        let input = format!("{year:04}-{month:02}-{day:02}");
        let first = flexible_date().normalize(&input).unwrap();
        let second = flexible_date().normalize(first.canonical()).unwrap();
        prop_assert_eq!(first.timestamp(), second.timestamp());
        prop_assert_eq!(first.canonical(), second.canonical());
    }

    #[test]
    fn separators_are_interchangeable(
        year in 1900_u32..=2100,
        month in 1_u32..=12,
        day in 1_u32..=28,
    ) {
        let dashed = format!("{year:04}-{month:02}-{day:02}");
        let slashed = format!("{year:04}/{month:02}/{day:02}");
        let a = flexible_date().normalize(&dashed).unwrap();
        let b = flexible_date().normalize(&slashed).unwrap();
        prop_assert_eq!(a.timestamp(), b.timestamp());
    }
}

// ============================================================================
// COMBINATOR LAWS over the catalog
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(input in ".{0,20}") {
        let left = numeric_only();
        let right = letters();
        let both = numeric_only().and(letters());
        let expected = left.validate(&input).is_err() || right.validate(&input).is_err();
        prop_assert_eq!(both.validate(&input).is_err(), expected);
    }

    #[test]
    fn or_passes_iff_either_passes(input in ".{0,20}") {
        let either = numeric_only().or(letters());
        let expected =
            numeric_only().validate(&input).is_ok() || letters().validate(&input).is_ok();
        prop_assert_eq!(either.validate(&input).is_ok(), expected);
    }

    #[test]
    fn not_inverts(input in ".{0,20}") {
        let plain = numeric_only().validate(&input).is_ok();
        let inverted = numeric_only().not().validate(&input).is_ok();
        prop_assert_ne!(plain, inverted);
    }
}

// ============================================================================
// INTROSPECTION: agrees with the obvious ground truth
// ============================================================================

proptest! {
    #[test]
    fn string_emptiness_matches_len(input in ".{0,20}") {
        prop_assert_eq!(is_empty(input.as_str()), input.is_empty());
        prop_assert!(!is_nil(input.as_str()));
    }

    #[test]
    fn integer_emptiness_matches_zero(n in any::<i64>()) {
        prop_assert_eq!(is_empty(&n), n == 0);
        prop_assert!(!is_nil(&n));
    }

    #[test]
    fn sequence_emptiness_matches_len(items in proptest::collection::vec(any::<u8>(), 0..8)) {
        prop_assert_eq!(is_empty(&items), items.is_empty());
        prop_assert!(!is_nil(&items));
    }
}
