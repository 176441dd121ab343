//! External identifiers for conventions and securities.

use std::fmt;
use std::str::FromStr;

use super::error::IdentifierError;

/// Separator between scheme and value in the string form.
pub const SEPARATOR: char = '~';

/// An identifier qualified by the scheme that issued it.
///
/// The string form is `SCHEME~VALUE`, e.g. `CONVENTION~USD-LIBOR-3M`.
/// Ordering is by scheme, then value.
///
/// # Examples
///
/// ```
/// use curve_core::types::ExternalId;
///
/// let id = ExternalId::of("CONVENTION", "FEDFUNDS");
/// assert_eq!(id.to_string(), "CONVENTION~FEDFUNDS");
///
/// let parsed: ExternalId = "CONVENTION~FEDFUNDS".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ExternalId {
    scheme: String,
    value: String,
}

impl ExternalId {
    /// Create an identifier from its scheme and value.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }

    /// The issuing scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for ExternalId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, IdentifierError> {
        let (scheme, value) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| IdentifierError::MissingSeparator(s.to_string()))?;
        if scheme.is_empty() || value.is_empty() {
            return Err(IdentifierError::EmptyPart(s.to_string()));
        }
        Ok(Self::of(scheme, value))
    }
}

impl TryFrom<String> for ExternalId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExternalId> for String {
    fn from(id: ExternalId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SEPARATOR, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let id = ExternalId::of("SEC", "US0003M");
        assert_eq!(id.scheme(), "SEC");
        assert_eq!(id.value(), "US0003M");
    }

    #[test]
    fn test_parse_keeps_everything_after_first_separator() {
        let id: ExternalId = "TICKER~A~B".parse().unwrap();
        assert_eq!(id.scheme(), "TICKER");
        assert_eq!(id.value(), "A~B");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "FEDFUNDS".parse::<ExternalId>(),
            Err(IdentifierError::MissingSeparator("FEDFUNDS".to_string()))
        );
        assert_eq!(
            "~FEDFUNDS".parse::<ExternalId>(),
            Err(IdentifierError::EmptyPart("~FEDFUNDS".to_string()))
        );
        assert_eq!(
            "CONVENTION~".parse::<ExternalId>(),
            Err(IdentifierError::EmptyPart("CONVENTION~".to_string()))
        );
    }

    #[test]
    fn test_ordering_by_scheme_then_value() {
        let a = ExternalId::of("A", "Z");
        let b = ExternalId::of("B", "A");
        let c = ExternalId::of("B", "B");
        assert!(a < b);
        assert!(b < c);
    }
}
