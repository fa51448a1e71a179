//! Grammar table for the flexible date normalizer: every accepted
//! granularity, both separators, and the rejection tail.

use rstest::rstest;
use vouch_validator::prelude::*;

#[rstest]
#[case("2024", "2024-01-01 00:00:00", 1_704_067_200)]
#[case("2024-03", "2024-03-01 00:00:00", 1_709_251_200)]
#[case("2024/03", "2024-03-01 00:00:00", 1_709_251_200)]
#[case("2024-03-05", "2024-03-05 00:00:00", 1_709_596_800)]
#[case("2024/03/05", "2024-03-05 00:00:00", 1_709_596_800)]
#[case("2024-03-05 10", "2024-03-05 10:00:00", 1_709_632_800)]
#[case("2024-03-05 10:30", "2024-03-05 10:30:00", 1_709_634_600)]
#[case("2024/03/05 10:30", "2024-03-05 10:30:00", 1_709_634_600)]
#[case("2024-03-05 10:30:00", "2024-03-05 10:30:00", 1_709_634_600)]
#[case("1970-01-01", "1970-01-01 00:00:00", 0)]
#[case("1969-12-31", "1969-12-31 00:00:00", -86_400)]
#[case("1949-10-01", "1949-10-01 00:00:00", -639_100_800)]
#[case("1899-10-01", "1899-10-01 00:00:00", -2_216_937_600)]
fn accepted_shapes(#[case] input: &str, #[case] canonical: &str, #[case] timestamp: i64) {
    let date = flexible_date().normalize(input).unwrap();
    assert_eq!(date.canonical(), canonical);
    assert_eq!(date.timestamp(), timestamp);
}

#[rstest]
#[case("")]
#[case("  ")]
#[case("202")] // three-digit year
#[case("20245")] // five-digit year
#[case("2024-1")] // one-digit month
#[case("2024-03-")] // dangling separator
#[case("2024-03-05T10:30:00")] // ISO T separator
#[case("2024-03-05 10:30:00.123")] // fractional seconds
#[case("05-03-2024")] // day-first ordering
#[case("2024-13-01")] // month out of range
#[case("2024-02-30")] // day out of range
#[case("2024-00-10")] // zero month
#[case("2024-03-05 24:00")] // hour out of range
#[case("not a date")]
fn rejected_shapes(#[case] input: &str) {
    assert!(flexible_date().normalize(input).is_err(), "accepted {input:?}");
    assert!(flexible_date().validate(input).is_err());
}

#[test]
fn mixed_separators_still_normalize() {
    // Both separators map onto the same canonical form, so a mix is
    // accepted too: every '/' becomes '-' before the grammar runs.
    let date = flexible_date().normalize("2024/03-05").unwrap();
    assert_eq!(date.canonical(), "2024-03-05 00:00:00");
}
