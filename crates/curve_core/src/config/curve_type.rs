//! Curve type declarations.

use std::fmt;

use crate::types::{ExternalId, Tenor};

/// What a built curve is attached to inside a multicurve bundle.
///
/// `Discounting` carries the raw reference string: it is parsed as a
/// currency code when the curve is attached, and a failure to parse is a
/// reportable condition rather than a construction error.
///
/// # Examples
///
/// ```
/// use curve_core::config::CurveTypeConfiguration;
/// use curve_core::types::{ExternalId, Tenor};
///
/// let discounting = CurveTypeConfiguration::discounting("USD");
/// let ibor = CurveTypeConfiguration::ibor(
///     ExternalId::of("CONVENTION", "USD-LIBOR-3M"),
///     Tenor::ThreeMonth,
/// );
///
/// assert!(discounting.is_discounting());
/// assert_eq!(ibor.convention().unwrap().value(), "USD-LIBOR-3M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum CurveTypeConfiguration {
    /// Discount curve for the currency named by `reference`.
    Discounting {
        /// Currency code, unparsed
        reference: String,
    },
    /// Forward curve for an ibor index.
    Ibor {
        /// Identifier of the index security or convention
        convention: ExternalId,
        /// Index tenor
        tenor: Tenor,
    },
    /// Forward curve for an overnight index.
    Overnight {
        /// Identifier of the index security or convention
        convention: ExternalId,
    },
}

impl CurveTypeConfiguration {
    /// Discounting declaration.
    pub fn discounting(reference: impl Into<String>) -> Self {
        CurveTypeConfiguration::Discounting {
            reference: reference.into(),
        }
    }

    /// Ibor forward declaration.
    pub fn ibor(convention: ExternalId, tenor: Tenor) -> Self {
        CurveTypeConfiguration::Ibor { convention, tenor }
    }

    /// Overnight forward declaration.
    pub fn overnight(convention: ExternalId) -> Self {
        CurveTypeConfiguration::Overnight { convention }
    }

    /// Whether this is a discounting declaration.
    pub fn is_discounting(&self) -> bool {
        matches!(self, CurveTypeConfiguration::Discounting { .. })
    }

    /// The security/convention identifier of a forward declaration.
    pub fn convention(&self) -> Option<&ExternalId> {
        match self {
            CurveTypeConfiguration::Discounting { .. } => None,
            CurveTypeConfiguration::Ibor { convention, .. }
            | CurveTypeConfiguration::Overnight { convention } => Some(convention),
        }
    }
}

impl fmt::Display for CurveTypeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveTypeConfiguration::Discounting { reference } => {
                write!(f, "Discounting({})", reference)
            }
            CurveTypeConfiguration::Ibor { convention, tenor } => {
                write!(f, "Ibor({}, {})", convention, tenor)
            }
            CurveTypeConfiguration::Overnight { convention } => {
                write!(f, "Overnight({})", convention)
            }
        }
    }
}

/// Key identifying an ibor forward reference: convention plus tenor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborCurveInformation {
    /// Identifier of the index security or convention
    pub convention: ExternalId,
    /// Index tenor
    pub tenor: Tenor,
}

impl IborCurveInformation {
    /// Create a key.
    pub fn new(convention: ExternalId, tenor: Tenor) -> Self {
        Self { convention, tenor }
    }
}

impl fmt::Display for IborCurveInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.convention, self.tenor)
    }
}
