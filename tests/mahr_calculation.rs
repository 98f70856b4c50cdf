use mahr_calculator_wasm::domain::pricing::{
    FATEMI_SILVER_GRAMS, MIN_MAHR_SILVER_GRAMS, MahrCalculator, PriceRecord, TROY_OUNCE_GRAMS,
};

#[test]
fn per_gram_is_ounce_price_over_troy_grams() {
    let calc = MahrCalculator::new();
    for price in [1.0, 38.5, 1200.0, 107_813.4] {
        let record = PriceRecord::new(price, 0);
        let values = calc.compute(&record);
        assert!((values.per_gram.value() - price / TROY_OUNCE_GRAMS).abs() < 1e-9);
    }
}

#[test]
fn derived_amounts_follow_fixed_ratios() {
    let calc = MahrCalculator::new();
    let record = PriceRecord::new(1200.0, 1_700_000_000);
    let values = calc.compute(&record);
    let per_gram = 1200.0 / TROY_OUNCE_GRAMS;

    assert!((values.fatemi_mahr.value() - per_gram * FATEMI_SILVER_GRAMS).abs() < 1e-9);
    assert!((values.min_mahr.value() - per_gram * MIN_MAHR_SILVER_GRAMS).abs() < 1e-9);

    // ballpark sanity for the canonical example snapshot
    assert!((values.per_gram.value() - 38.58).abs() < 0.01);
    assert!((values.fatemi_mahr.value() - 59_064.0).abs() < 5.0);
    assert!((values.min_mahr.value() - 1_181.3).abs() < 0.5);
}

#[test]
fn feed_overrides_are_authoritative() {
    let calc = MahrCalculator::new();
    let record = PriceRecord {
        price: 1200.0,
        timestamp: 1_700_000_000,
        mahr_fatemi: Some(61_000.0),
        minimum_mahr: Some(1_220.0),
    };
    let values = calc.compute(&record);

    assert_eq!(values.fatemi_mahr.value(), 61_000.0);
    assert_eq!(values.min_mahr.value(), 1_220.0);
    // per-gram always comes from the spot price
    assert!((values.per_gram.value() - 1200.0 / TROY_OUNCE_GRAMS).abs() < 1e-9);
}

#[test]
fn zero_override_is_honored_verbatim() {
    let calc = MahrCalculator::new();
    let record = PriceRecord { price: 1200.0, timestamp: 0, mahr_fatemi: Some(0.0), minimum_mahr: None };
    assert_eq!(calc.compute(&record).fatemi_mahr.value(), 0.0);
}

#[test]
fn full_precision_is_kept_before_formatting() {
    let calc = MahrCalculator::new();
    let record = PriceRecord::new(100.0, 0);
    let values = calc.compute(&record);
    // no rounding anywhere in the calculator
    assert_ne!(values.per_gram.value(), values.per_gram.value().round());
}
