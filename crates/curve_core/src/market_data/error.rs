//! Market data error types.

use thiserror::Error;

/// Market data operation errors.
///
/// # Examples
///
/// ```
/// use curve_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative time, or an empty forward period).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// No FX rate is known between the two currencies.
    #[error("No FX rate between {base} and {quote}")]
    MissingFxRate {
        /// Base currency code
        base: String,
        /// Quote currency code
        quote: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = MarketDataError::InvalidMaturity { t: -0.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: t = -0.5");
    }

    #[test]
    fn test_missing_fx_rate_display() {
        let err = MarketDataError::MissingFxRate {
            base: "USD".to_string(),
            quote: "BRL".to_string(),
        };
        assert_eq!(format!("{}", err), "No FX rate between USD and BRL");
    }
}
