//! Resolved market indices that forward curves are keyed by.

use std::fmt;

use super::convention::{IborIndexConvention, OvernightIndexConvention};
use crate::types::{BusinessDayConvention, Currency, DayCount, Tenor};

/// An ibor index: convention details plus a tenor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborIndex {
    /// Index name (the convention name)
    pub name: String,
    /// Index currency
    pub currency: Currency,
    /// Index tenor
    pub tenor: Tenor,
    /// Accrual day count
    pub day_count: DayCount,
    /// Fixing date adjustment
    pub business_day: BusinessDayConvention,
    /// Business days between fixing and start
    pub spot_lag: u32,
}

impl IborIndex {
    /// Build an index from a convention and a tenor.
    ///
    /// ```
    /// use curve_core::reference::{IborIndex, IborIndexConvention};
    /// use curve_core::types::{BusinessDayConvention, Currency, DayCount, ExternalId, Tenor};
    ///
    /// let convention = IborIndexConvention {
    ///     id: ExternalId::of("CONVENTION", "USD-LIBOR-3M"),
    ///     name: "USD-LIBOR-3M".to_string(),
    ///     currency: Currency::USD,
    ///     day_count: DayCount::Act360,
    ///     business_day: BusinessDayConvention::ModifiedFollowing,
    ///     spot_lag: 2,
    /// };
    /// let index = IborIndex::from_convention(&convention, Tenor::ThreeMonth);
    /// assert_eq!(index.name, "USD-LIBOR-3M");
    /// assert_eq!(index.tenor, Tenor::ThreeMonth);
    /// ```
    pub fn from_convention(convention: &IborIndexConvention, tenor: Tenor) -> Self {
        Self {
            name: convention.name.clone(),
            currency: convention.currency,
            tenor,
            day_count: convention.day_count,
            business_day: convention.business_day,
            spot_lag: convention.spot_lag,
        }
    }
}

/// An overnight index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightIndex {
    /// Index name (the convention name)
    pub name: String,
    /// Index currency
    pub currency: Currency,
    /// Accrual day count
    pub day_count: DayCount,
    /// Days between the rate date and its publication
    pub publication_lag: u32,
}

impl OvernightIndex {
    /// Build an index from a convention.
    pub fn from_convention(convention: &OvernightIndexConvention) -> Self {
        Self {
            name: convention.name.clone(),
            currency: convention.currency,
            day_count: convention.day_count,
            publication_lag: convention.publication_lag,
        }
    }
}

/// Key of a forward curve inside a multicurve bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Index {
    /// Ibor index
    Ibor(IborIndex),
    /// Overnight index
    Overnight(OvernightIndex),
}

impl Index {
    /// Index name.
    pub fn name(&self) -> &str {
        match self {
            Index::Ibor(index) => &index.name,
            Index::Overnight(index) => &index.name,
        }
    }

    /// Index currency.
    pub fn currency(&self) -> Currency {
        match self {
            Index::Ibor(index) => index.currency,
            Index::Overnight(index) => index.currency,
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Ibor(index) => write!(f, "{} ({})", index.name, index.tenor),
            Index::Overnight(index) => write!(f, "{}", index.name),
        }
    }
}

impl From<IborIndex> for Index {
    fn from(index: IborIndex) -> Self {
        Index::Ibor(index)
    }
}

impl From<OvernightIndex> for Index {
    fn from(index: OvernightIndex) -> Self {
        Index::Overnight(index)
    }
}
