//! Index conventions.

use crate::types::{BusinessDayConvention, Currency, DayCount, ExternalId};

/// Market convention of an ibor index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborIndexConvention {
    /// Convention identifier
    pub id: ExternalId,
    /// Convention name, also the name of indices built from it
    pub name: String,
    /// Index currency
    pub currency: Currency,
    /// Accrual day count
    pub day_count: DayCount,
    /// Fixing date adjustment
    pub business_day: BusinessDayConvention,
    /// Business days between fixing and start
    pub spot_lag: u32,
}

/// Market convention of an overnight index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightIndexConvention {
    /// Convention identifier
    pub id: ExternalId,
    /// Convention name, also the name of indices built from it
    pub name: String,
    /// Index currency
    pub currency: Currency,
    /// Accrual day count
    pub day_count: DayCount,
    /// Days between the rate date and its publication
    pub publication_lag: u32,
}

/// Any other convention, identified only by its type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericConvention {
    /// Convention identifier
    pub id: ExternalId,
    /// Convention type, e.g. `SWAP_LEG`
    pub convention_type: String,
}

/// A convention held by a convention source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "convention_kind", rename_all = "snake_case")
)]
pub enum Convention {
    /// Ibor index convention
    IborIndex(IborIndexConvention),
    /// Overnight index convention
    OvernightIndex(OvernightIndexConvention),
    /// Any other convention
    Generic(GenericConvention),
}

impl Convention {
    /// Identifier the convention is stored under.
    pub fn id(&self) -> &ExternalId {
        match self {
            Convention::IborIndex(convention) => &convention.id,
            Convention::OvernightIndex(convention) => &convention.id,
            Convention::Generic(convention) => &convention.id,
        }
    }

    /// Narrow to an ibor index convention.
    pub fn as_ibor_index(&self) -> Option<&IborIndexConvention> {
        match self {
            Convention::IborIndex(convention) => Some(convention),
            _ => None,
        }
    }

    /// Narrow to an overnight index convention.
    pub fn as_overnight_index(&self) -> Option<&OvernightIndexConvention> {
        match self {
            Convention::OvernightIndex(convention) => Some(convention),
            _ => None,
        }
    }
}

impl From<IborIndexConvention> for Convention {
    fn from(convention: IborIndexConvention) -> Self {
        Convention::IborIndex(convention)
    }
}

impl From<OvernightIndexConvention> for Convention {
    fn from(convention: OvernightIndexConvention) -> Self {
        Convention::OvernightIndex(convention)
    }
}

impl From<GenericConvention> for Convention {
    fn from(convention: GenericConvention) -> Self {
        Convention::Generic(convention)
    }
}
