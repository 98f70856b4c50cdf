use mahr_calculator_wasm::time_utils::{civil_from_days, format_bengali_date, iso_date};

#[test]
fn epoch_is_first_of_january_1970() {
    assert_eq!(civil_from_days(0), (1970, 1, 1));
    assert_eq!(iso_date(0), "1970-01-01");
    assert_eq!(format_bengali_date(0), "১ জানুয়ারি, ১৯৭০");
}

#[test]
fn known_timestamp_renders_long_form() {
    // 2023-11-14T22:13:20Z
    assert_eq!(iso_date(1_700_000_000), "2023-11-14");
    assert_eq!(format_bengali_date(1_700_000_000), "১৪ নভেম্বর, ২০২৩");
}

#[test]
fn month_boundaries_stay_utc() {
    // 2024-02-29T23:59:59Z, leap day
    assert_eq!(iso_date(1_709_251_199), "2024-02-29");
    // one second later rolls into March
    assert_eq!(iso_date(1_709_251_200), "2024-03-01");
    assert_eq!(format_bengali_date(1_709_251_200), "১ মার্চ, ২০২৪");
}

#[test]
fn year_boundary() {
    // 2023-12-31T23:59:59Z / 2024-01-01T00:00:00Z
    assert_eq!(iso_date(1_704_067_199), "2023-12-31");
    assert_eq!(iso_date(1_704_067_200), "2024-01-01");
}

#[test]
fn all_days_round_trip_through_civil() {
    // spot-check a spread of days against the conversion's internal consistency
    for days in [0_i64, 365, 10_957, 19_675, 20_000] {
        let (y, m, d) = civil_from_days(days);
        assert!((1970..=2030).contains(&y));
        assert!((1..=12).contains(&m));
        assert!((1..=31).contains(&d));
    }
}
