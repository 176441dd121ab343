//! FX matrix carried by a multicurve bundle.

use std::collections::BTreeMap;

use crate::market_data::error::MarketDataError;
use crate::types::{Currency, CurrencyError};

/// Spot exchange rates between currencies.
///
/// Rates are stored BASE/QUOTE (1 unit of base = rate units of quote).
/// Lookups try the stored direction first, then the inverse.
///
/// # Examples
///
/// ```
/// use curve_core::market_data::FxMatrix;
/// use curve_core::types::Currency;
///
/// let mut fx = FxMatrix::new();
/// fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
///
/// assert_eq!(fx.rate(Currency::EUR, Currency::USD).unwrap(), 1.10);
/// assert!((fx.rate(Currency::USD, Currency::EUR).unwrap() - 1.0 / 1.10).abs() < 1e-12);
/// assert_eq!(fx.rate(Currency::USD, Currency::USD).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxMatrix {
    rates: BTreeMap<(Currency, Currency), f64>,
}

impl FxMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a BASE/QUOTE rate, replacing any rate for the same pair.
    ///
    /// # Errors
    ///
    /// - `CurrencyError::SameCurrency` if base and quote are equal.
    /// - `CurrencyError::InvalidRate` if the rate is not positive and finite.
    pub fn add_rate(
        &mut self,
        base: Currency,
        quote: Currency,
        rate: f64,
    ) -> Result<(), CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.to_string()));
        }
        if !(rate.is_finite() && rate > 0.0) {
            return Err(CurrencyError::InvalidRate(rate));
        }
        self.rates.remove(&(quote, base));
        self.rates.insert((base, quote), rate);
        Ok(())
    }

    /// Rate to convert one unit of `base` into `quote`.
    pub fn rate(&self, base: Currency, quote: Currency) -> Result<f64, MarketDataError> {
        if base == quote {
            return Ok(1.0);
        }
        if let Some(rate) = self.rates.get(&(base, quote)) {
            return Ok(*rate);
        }
        self.rates
            .get(&(quote, base))
            .map(|rate| 1.0 / rate)
            .ok_or_else(|| MarketDataError::MissingFxRate {
                base: base.to_string(),
                quote: quote.to_string(),
            })
    }

    /// Copy every rate of `other` into this matrix.
    pub fn merge(&mut self, other: &FxMatrix) {
        for (&(base, quote), &rate) in &other.rates {
            self.rates.remove(&(quote, base));
            self.rates.insert((base, quote), rate);
        }
    }

    /// Currencies that appear in at least one rate.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self
            .rates
            .keys()
            .flat_map(|(base, quote)| [*base, *quote])
            .collect();
        currencies.sort();
        currencies.dedup();
        currencies
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether no rates are stored.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_rate_rejects_same_currency() {
        let mut fx = FxMatrix::new();
        assert_eq!(
            fx.add_rate(Currency::USD, Currency::USD, 1.0),
            Err(CurrencyError::SameCurrency("USD".to_string()))
        );
    }

    #[test]
    fn test_add_rate_rejects_non_positive() {
        let mut fx = FxMatrix::new();
        assert!(fx.add_rate(Currency::EUR, Currency::USD, 0.0).is_err());
        assert!(fx.add_rate(Currency::EUR, Currency::USD, -1.1).is_err());
        assert!(fx.add_rate(Currency::EUR, Currency::USD, f64::NAN).is_err());
        assert!(fx.is_empty());
    }

    #[test]
    fn test_inverse_replaces_stored_direction() {
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
        fx.add_rate(Currency::USD, Currency::EUR, 0.8).unwrap();
        assert_eq!(fx.len(), 1);
        assert_relative_eq!(fx.rate(Currency::EUR, Currency::USD).unwrap(), 1.25);
    }

    #[test]
    fn test_missing_rate() {
        let fx = FxMatrix::new();
        assert_eq!(
            fx.rate(Currency::USD, Currency::JPY),
            Err(MarketDataError::MissingFxRate {
                base: "USD".to_string(),
                quote: "JPY".to_string()
            })
        );
    }

    #[test]
    fn test_merge_and_currencies() {
        let mut a = FxMatrix::new();
        a.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
        let mut b = FxMatrix::new();
        b.add_rate(Currency::USD, Currency::JPY, 150.0).unwrap();
        b.add_rate(Currency::USD, Currency::EUR, 0.9).unwrap();

        a.merge(&b);
        assert_eq!(a.len(), 2);
        assert_relative_eq!(a.rate(Currency::USD, Currency::EUR).unwrap(), 0.9);
        assert_eq!(
            a.currencies(),
            vec![Currency::EUR, Currency::JPY, Currency::USD]
        );
    }
}
