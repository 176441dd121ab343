//! Error types for identifier, currency and tenor parsing.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency code parsing
//! - `TenorError`: Errors from tenor parsing
//! - `IdentifierError`: Errors from external identifier parsing

use thiserror::Error;

/// Currency-related errors.
///
/// # Examples
/// ```
/// use curve_core::types::CurrencyError;
///
/// let err = CurrencyError::InvalidCode("US".to_string());
/// assert_eq!(format!("{}", err), "Invalid currency code: US");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// The code is not three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCode(String),

    /// Base and quote currencies are the same.
    #[error("Base and quote currencies are the same: {0}")]
    SameCurrency(String),

    /// Exchange rate is not positive.
    #[error("Invalid exchange rate: {0} (must be positive)")]
    InvalidRate(f64),
}

/// Tenor parsing errors.
///
/// # Examples
/// ```
/// use curve_core::types::TenorError;
///
/// let err = TenorError::Unknown("5W".to_string());
/// assert_eq!(format!("{}", err), "Unknown tenor: 5W");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// Tenor string is not recognised.
    #[error("Unknown tenor: {0}")]
    Unknown(String),
}

/// External identifier parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier has no `~` separator between scheme and value.
    #[error("Identifier '{0}' is not of the form SCHEME~VALUE")]
    MissingSeparator(String),

    /// Scheme or value is empty.
    #[error("Identifier '{0}' has an empty scheme or value")]
    EmptyPart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_error_display() {
        let err = CurrencyError::InvalidCode("U1D".to_string());
        assert_eq!(format!("{}", err), "Invalid currency code: U1D");

        let err = CurrencyError::SameCurrency("USD".to_string());
        assert!(format!("{}", err).contains("USD"));

        let err = CurrencyError::InvalidRate(-1.5);
        assert!(format!("{}", err).contains("-1.5"));
    }

    #[test]
    fn test_currency_error_carries_rate() {
        let err = CurrencyError::InvalidRate(0.0);
        assert_eq!(err.clone(), CurrencyError::InvalidRate(0.0));
        assert_ne!(err, CurrencyError::InvalidRate(-0.5));
    }

    #[test]
    fn test_tenor_error_display() {
        let err = TenorError::Unknown("7Y".to_string());
        assert_eq!(format!("{}", err), "Unknown tenor: 7Y");
    }

    #[test]
    fn test_identifier_error_display() {
        let err = IdentifierError::MissingSeparator("FEDFUNDS".to_string());
        assert!(format!("{}", err).contains("SCHEME~VALUE"));

        let err = IdentifierError::EmptyPart("~X".to_string());
        assert!(format!("{}", err).contains("~X"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = CurrencyError::InvalidCode("X".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
