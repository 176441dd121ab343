//! Index tenors.

use std::fmt;
use std::str::FromStr;

use super::error::TenorError;

/// Tenor of an ibor-style index.
///
/// Represents the standard money-market tenors used by curve type
/// configurations and index securities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Tenor {
    /// Overnight
    Overnight,
    /// 1-month tenor
    OneMonth,
    /// 3-month tenor (e.g., 3M LIBOR)
    #[default]
    ThreeMonth,
    /// 6-month tenor (e.g., 6M EURIBOR)
    SixMonth,
    /// 12-month tenor
    TwelveMonth,
}

impl Tenor {
    /// Get the period length in years.
    pub fn period_years(&self) -> f64 {
        match self {
            Tenor::Overnight => 1.0 / 365.0,
            Tenor::OneMonth => 1.0 / 12.0,
            Tenor::ThreeMonth => 0.25,
            Tenor::SixMonth => 0.5,
            Tenor::TwelveMonth => 1.0,
        }
    }

    /// Get the tenor name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Tenor::Overnight => "ON",
            Tenor::OneMonth => "1M",
            Tenor::ThreeMonth => "3M",
            Tenor::SixMonth => "6M",
            Tenor::TwelveMonth => "12M",
        }
    }
}

impl FromStr for Tenor {
    type Err = TenorError;

    fn from_str(s: &str) -> Result<Self, TenorError> {
        match s.trim().to_uppercase().as_str() {
            "ON" | "1D" => Ok(Tenor::Overnight),
            "1M" | "P1M" => Ok(Tenor::OneMonth),
            "3M" | "P3M" => Ok(Tenor::ThreeMonth),
            "6M" | "P6M" => Ok(Tenor::SixMonth),
            "12M" | "1Y" | "P12M" | "P1Y" => Ok(Tenor::TwelveMonth),
            _ => Err(TenorError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Tenor {
    type Error = TenorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.name().to_string()
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
