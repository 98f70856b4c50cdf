use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - spot price in the feed currency (BDT per troy ounce)
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - seconds since the Unix epoch, as published by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Whole days since the epoch (UTC calendar).
    pub fn days_since_epoch(&self) -> i64 {
        (self.0 / 86_400) as i64
    }
}

/// Value Object - the three amounts derived from one price snapshot.
///
/// Always computed from a single `PriceRecord`; values from different
/// fetches are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct DerivedValues {
    pub per_gram: Price,
    pub fatemi_mahr: Price,
    pub min_mahr: Price,
}
