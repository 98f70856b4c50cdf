use mahr_calculator_wasm::domain::pricing::PriceRecord;
use mahr_calculator_wasm::infrastructure::http::{LOCAL_FEED_URL, PriceFeedConfig, REMOTE_FEED_URL};

#[test]
fn minimal_body_parses() {
    let record: PriceRecord =
        serde_json::from_str(r#"{"price": 3353.4, "timestamp": 1700000000}"#).unwrap();
    assert_eq!(record.price, 3353.4);
    assert_eq!(record.timestamp, 1_700_000_000);
    assert!(record.mahr_fatemi.is_none());
    assert!(record.minimum_mahr.is_none());
}

#[test]
fn precomputed_fields_are_carried() {
    let body = r#"{
        "price": 3353.4,
        "timestamp": 1700000000,
        "mahr_fatemi": 165034.2,
        "minimum_mahr": 3300.9
    }"#;
    let record: PriceRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.mahr_fatemi, Some(165_034.2));
    assert_eq!(record.minimum_mahr, Some(3_300.9));
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"price": 1.0, "timestamp": 2, "source": "scraper-v2", "currency": "BDT"}"#;
    let record: PriceRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.price, 1.0);
}

#[test]
fn missing_price_is_a_parse_error() {
    assert!(serde_json::from_str::<PriceRecord>(r#"{"timestamp": 2}"#).is_err());
}

#[test]
fn remote_source_appends_monotonic_buster() {
    let config = PriceFeedConfig::remote();
    let early = config.request_url(1_000);
    let late = config.request_url(2_000);
    assert_ne!(early, late);
    assert!(early.starts_with(REMOTE_FEED_URL));
    assert!(early.ends_with("?t=1000"));
}

#[test]
fn local_source_is_plain() {
    let config = PriceFeedConfig::local();
    assert_eq!(config.request_url(123), LOCAL_FEED_URL);
}
