//! Exposure functions: map a trade subject to the identifiers used to pick
//! curve construction configurations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{Currency, ExternalId};

/// Scheme of currency exposure identifiers.
pub const CURRENCY_SCHEME: &str = "CurrencyISO";
/// Scheme of security type exposure identifiers.
pub const SECURITY_TYPE_SCHEME: &str = "SecurityType";
/// Scheme of region exposure identifiers.
pub const REGION_SCHEME: &str = "RegionISO";

/// Exposure function name was not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown exposure function: {0}")]
pub struct UnknownExposureFunction(pub String);

/// Trade attributes that exposure functions read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExposureSubject {
    /// Security type, e.g. `FUTURE` or `SWAP`
    pub security_type: String,
    /// Currencies the trade pays or receives
    pub currencies: Vec<Currency>,
    /// Region code, if known
    pub region: Option<String>,
}

impl ExposureSubject {
    /// Subject with a security type and no currencies.
    pub fn new(security_type: impl Into<String>) -> Self {
        Self {
            security_type: security_type.into(),
            ..Self::default()
        }
    }

    /// Add a currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currencies.push(currency);
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Stateless exposure function.
///
/// # Examples
///
/// ```
/// use curve_core::config::{ExposureFunction, ExposureSubject};
/// use curve_core::types::Currency;
///
/// let subject = ExposureSubject::new("FUTURE").with_currency(Currency::USD);
/// let ids = ExposureFunction::SecurityTypeAndCurrency.ids(&subject);
/// assert_eq!(ids[0].to_string(), "SecurityType~FUTURE_USD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExposureFunction {
    /// One identifier per currency.
    Currency,
    /// The security type.
    SecurityType,
    /// Security type qualified by each currency.
    SecurityTypeAndCurrency,
    /// The region, when known.
    Region,
}

impl ExposureFunction {
    /// Every exposure function.
    pub const ALL: [ExposureFunction; 4] = [
        ExposureFunction::Currency,
        ExposureFunction::SecurityType,
        ExposureFunction::SecurityTypeAndCurrency,
        ExposureFunction::Region,
    ];

    /// Canonical name, as used in configurations.
    pub fn name(&self) -> &'static str {
        match self {
            ExposureFunction::Currency => "Currency",
            ExposureFunction::SecurityType => "Security Type",
            ExposureFunction::SecurityTypeAndCurrency => "Security Type / Currency",
            ExposureFunction::Region => "Region",
        }
    }

    /// Exposure identifiers for a subject.
    pub fn ids(&self, subject: &ExposureSubject) -> Vec<ExternalId> {
        match self {
            ExposureFunction::Currency => subject
                .currencies
                .iter()
                .map(|ccy| ExternalId::of(CURRENCY_SCHEME, ccy.code()))
                .collect(),
            ExposureFunction::SecurityType => {
                vec![ExternalId::of(SECURITY_TYPE_SCHEME, &subject.security_type)]
            }
            ExposureFunction::SecurityTypeAndCurrency => subject
                .currencies
                .iter()
                .map(|ccy| {
                    ExternalId::of(
                        SECURITY_TYPE_SCHEME,
                        format!("{}_{}", subject.security_type, ccy.code()),
                    )
                })
                .collect(),
            ExposureFunction::Region => subject
                .region
                .iter()
                .map(|region| ExternalId::of(REGION_SCHEME, region))
                .collect(),
        }
    }
}

impl fmt::Display for ExposureFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExposureFunction {
    type Err = UnknownExposureFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExposureFunctionFactory::create(s)
    }
}

/// Creates exposure functions from their canonical names.
pub struct ExposureFunctionFactory;

impl ExposureFunctionFactory {
    /// Create the exposure function with the given canonical name.
    ///
    /// # Errors
    ///
    /// `UnknownExposureFunction` if no function has that name.
    pub fn create(name: &str) -> Result<ExposureFunction, UnknownExposureFunction> {
        ExposureFunction::ALL
            .iter()
            .copied()
            .find(|function| function.name() == name)
            .ok_or_else(|| UnknownExposureFunction(name.to_string()))
    }
}

/// Ordered list of exposure function names stored as a configuration item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureFunctions {
    /// Configuration name
    pub name: String,
    /// Exposure function names, in priority order
    #[cfg_attr(feature = "serde", serde(default))]
    pub exposure_functions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Factory Tests
    // ========================================

    #[test]
    fn test_factory_round_trips_every_name() {
        for function in ExposureFunction::ALL {
            assert_eq!(ExposureFunctionFactory::create(function.name()), Ok(function));
        }
    }

    #[test]
    fn test_factory_unknown_name() {
        assert_eq!(
            ExposureFunctionFactory::create("Contract Category"),
            Err(UnknownExposureFunction("Contract Category".to_string()))
        );
        assert!("currency".parse::<ExposureFunction>().is_err());
    }

    // ========================================
    // Identifier Tests
    // ========================================

    #[test]
    fn test_currency_ids() {
        let subject = ExposureSubject::new("SWAP")
            .with_currency(Currency::USD)
            .with_currency(Currency::EUR);
        let ids = ExposureFunction::Currency.ids(&subject);
        assert_eq!(
            ids,
            vec![
                ExternalId::of("CurrencyISO", "USD"),
                ExternalId::of("CurrencyISO", "EUR")
            ]
        );
    }

    #[test]
    fn test_security_type_ids() {
        let subject = ExposureSubject::new("FUTURE").with_currency(Currency::USD);
        assert_eq!(
            ExposureFunction::SecurityType.ids(&subject),
            vec![ExternalId::of("SecurityType", "FUTURE")]
        );
    }

    #[test]
    fn test_region_ids() {
        let subject = ExposureSubject::new("BOND");
        assert!(ExposureFunction::Region.ids(&subject).is_empty());
        let subject = subject.with_region("US");
        assert_eq!(
            ExposureFunction::Region.ids(&subject),
            vec![ExternalId::of("RegionISO", "US")]
        );
    }
}
