//! Currency types for curve construction.
//!
//! This module provides ISO 4217-style currency codes. Any three-letter
//! alphabetic code is accepted, so configurations can reference currencies
//! that have no named constant here.
//!
//! # Examples
//!
//! ```
//! use curve_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let brl: Currency = "brl".parse().unwrap();
//! assert_eq!(brl.code(), "BRL");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// Three-letter currency code.
///
/// Stored as upper-case ASCII bytes so the type is `Copy` and cheap to hash
/// and order. Ordering is alphabetical by code.
///
/// # Examples
///
/// ```
/// use curve_core::types::currency::Currency;
///
/// assert_eq!(Currency::USD.code(), "USD");
/// assert_eq!(Currency::JPY.decimal_places(), 0);
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
///
/// // Anything other than three letters is rejected
/// assert!("US".parse::<Currency>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Currency([u8; 3]);

impl Currency {
    /// United States Dollar
    pub const USD: Currency = Currency(*b"USD");
    /// Euro
    pub const EUR: Currency = Currency(*b"EUR");
    /// British Pound Sterling
    pub const GBP: Currency = Currency(*b"GBP");
    /// Japanese Yen
    pub const JPY: Currency = Currency(*b"JPY");
    /// Swiss Franc
    pub const CHF: Currency = Currency(*b"CHF");
    /// Australian Dollar
    pub const AUD: Currency = Currency(*b"AUD");
    /// Brazilian Real
    pub const BRL: Currency = Currency(*b"BRL");

    /// Parses a currency code, returning an error for anything that is not
    /// three ASCII letters.
    pub fn of(code: &str) -> Result<Self, CurrencyError> {
        code.parse()
    }

    /// Returns the three-letter currency code.
    pub fn code(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// ```
    /// use curve_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.decimal_places(), 2);
    /// assert_eq!(Currency::JPY.decimal_places(), 0);
    /// ```
    pub fn decimal_places(&self) -> u8 {
        match &self.0 {
            b"JPY" | b"KRW" | b"CLP" | b"ISK" => 0,
            b"BHD" | b"KWD" | b"OMR" | b"TND" => 3,
            _ => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyError::InvalidCode(s.to_string()));
        }
        let mut code = [0u8; 3];
        for (slot, byte) in code.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Currency(code))
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::JPY.code(), "JPY");
        assert_eq!(Currency::CHF.code(), "CHF");
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::of("KWD").unwrap().decimal_places(), 3);
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("gbP".parse::<Currency>().unwrap(), Currency::GBP);
    }

    #[test]
    fn test_currency_accepts_unlisted_codes() {
        let abc = Currency::of("ABC").unwrap();
        assert_eq!(abc.code(), "ABC");
    }

    #[test]
    fn test_currency_from_str_invalid() {
        for bad in ["", "US", "USDX", "U1D", "€€€"] {
            match bad.parse::<Currency>() {
                Err(CurrencyError::InvalidCode(code)) => assert_eq!(code, bad),
                other => panic!("Expected InvalidCode for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::BRL), "BRL");
    }

    #[test]
    fn test_currency_ordering() {
        let mut currencies = vec![Currency::USD, Currency::EUR, Currency::AUD];
        currencies.sort();
        assert_eq!(currencies, vec![Currency::AUD, Currency::EUR, Currency::USD]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_currency_serde_roundtrip() {
            let json = serde_json::to_string(&Currency::USD).unwrap();
            assert_eq!(json, "\"USD\"");

            let parsed: Currency = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, Currency::USD);
        }

        #[test]
        fn test_currency_serde_rejects_invalid() {
            let parsed: Result<Currency, _> = serde_json::from_str("\"DOLLARS\"");
            assert!(parsed.is_err());
        }
    }
}
