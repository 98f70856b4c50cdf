pub use super::value_objects::{DerivedValues, Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Domain entity - one snapshot of the silver price feed.
///
/// `mahr_fatemi` and `minimum_mahr` are optional precomputed amounts the
/// feed may ship alongside the raw ounce price; when present they are
/// authoritative and client-side recomputation is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Price of one troy ounce of silver, in BDT.
    pub price: f64,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(default)]
    pub mahr_fatemi: Option<f64>,
    #[serde(default)]
    pub minimum_mahr: Option<f64>,
}

impl PriceRecord {
    pub fn new(price: f64, timestamp: u64) -> Self {
        Self { price, timestamp, mahr_fatemi: None, minimum_mahr: None }
    }

    pub fn spot_price(&self) -> Price {
        Price::new(self.price)
    }

    pub fn published_at(&self) -> Timestamp {
        Timestamp::new(self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_overrides_default_to_none() {
        let record: PriceRecord = serde_json::from_str(r#"{"price": 3353.4, "timestamp": 1700000000}"#).unwrap();
        assert_eq!(record.price, 3353.4);
        assert_eq!(record.timestamp, 1_700_000_000);
        assert!(record.mahr_fatemi.is_none());
        assert!(record.minimum_mahr.is_none());
    }
}
