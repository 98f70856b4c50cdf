use crate::domain::pricing::{DerivedValues, Price, PriceRecord};

/// Grams in one troy ounce, the unit silver is quoted in.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Mahr-e-Fatemi: 500 dirham, customarily equated to 1530.9 g of silver.
pub const FATEMI_SILVER_GRAMS: f64 = 1530.9;

/// Minimum mahr: 10 dirham, customarily equated to 30.618 g of silver.
pub const MIN_MAHR_SILVER_GRAMS: f64 = 30.618;

/// Domain service mapping a feed snapshot to the displayed amounts.
pub struct MahrCalculator;

impl MahrCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Per-gram rate of the quoted ounce price. The divisor is a fixed
    /// non-zero constant, so no zero-division case exists.
    pub fn per_gram(&self, record: &PriceRecord) -> Price {
        Price::new(record.price / TROY_OUNCE_GRAMS)
    }

    /// Derive all three amounts from one snapshot.
    ///
    /// Feed-supplied `mahr_fatemi` / `minimum_mahr` take precedence over
    /// client-side recomputation, verbatim. Rounding is the formatter's
    /// job; full precision is kept here.
    pub fn compute(&self, record: &PriceRecord) -> DerivedValues {
        let per_gram = self.per_gram(record);
        let fatemi = record.mahr_fatemi.unwrap_or(per_gram.value() * FATEMI_SILVER_GRAMS);
        let min = record.minimum_mahr.unwrap_or(per_gram.value() * MIN_MAHR_SILVER_GRAMS);

        DerivedValues::new(per_gram, Price::new(fatemi), Price::new(min))
    }
}

impl Default for MahrCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_gram_divides_by_troy_ounce() {
        let calc = MahrCalculator::new();
        let record = PriceRecord::new(3110.35, 0);
        assert!((calc.per_gram(&record).value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn overrides_win_over_recomputation() {
        let calc = MahrCalculator::new();
        let mut record = PriceRecord::new(1200.0, 0);
        record.mahr_fatemi = Some(60000.0);
        let values = calc.compute(&record);
        assert_eq!(values.fatemi_mahr.value(), 60000.0);
        // minimum_mahr was absent, so it still comes from the ratio
        assert!((values.min_mahr.value() - (1200.0 / TROY_OUNCE_GRAMS) * MIN_MAHR_SILVER_GRAMS).abs() < 1e-9);
    }
}
