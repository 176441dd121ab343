//! Day count and business day conventions carried by index conventions.
//!
//! Both enums are descriptive here: they travel from a stored convention
//! onto the resolved index unchanged.

use std::fmt;
use std::str::FromStr;

/// Day count basis of an index.
///
/// # Examples
///
/// ```
/// use curve_core::types::DayCount;
///
/// let dc: DayCount = "Actual/360".parse().unwrap();
/// assert_eq!(dc, DayCount::Act360);
/// assert_eq!(dc.name(), "ACT/360");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayCount {
    /// Actual/360 (money-market indices)
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// 30/360 US Bond Basis
    Thirty360,
}

impl DayCount {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "ACT/360",
            DayCount::Act365Fixed => "ACT/365",
            DayCount::Thirty360 => "30/360",
        }
    }
}

impl FromStr for DayCount {
    type Err = String;

    /// Parses a day count (case-insensitive, `/` and spaces ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCount::Act360),
            "ACT365" | "ACTUAL365" | "ACT365F" | "ACTUAL365FIXED" | "A365" => {
                Ok(DayCount::Act365Fixed)
            }
            "30360" | "THIRTY360" => Ok(DayCount::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Business day adjustment of an index.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BusinessDayConvention {
    /// Move to the next business day.
    Following,
    /// Move to the next business day, unless it crosses a month boundary.
    ModifiedFollowing,
    /// Move to the previous business day.
    Preceding,
}

impl BusinessDayConvention {
    /// Returns the standard name for this convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
        }
    }
}

impl FromStr for BusinessDayConvention {
    type Err = String;

    /// Parses full names and short codes (`F`, `MF`, `P`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            _ => Err(format!("Unknown business day convention: {}", s)),
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{BusinessDayConvention, DayCount};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for BusinessDayConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for BusinessDayConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_count_aliases() {
        assert_eq!("ACT/360".parse::<DayCount>().unwrap(), DayCount::Act360);
        assert_eq!("act 365".parse::<DayCount>().unwrap(), DayCount::Act365Fixed);
        assert_eq!("30/360".parse::<DayCount>().unwrap(), DayCount::Thirty360);
        assert!("ACT/ACT ISDA".parse::<DayCount>().is_err());
    }

    #[test]
    fn test_business_day_codes() {
        assert_eq!(
            "MF".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "modified_following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(BusinessDayConvention::Following.to_string(), "Following");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_names() {
        let json = serde_json::to_string(&DayCount::Act360).unwrap();
        assert_eq!(json, "\"ACT/360\"");
        let bdc: BusinessDayConvention = serde_json::from_str("\"MF\"").unwrap();
        assert_eq!(bdc, BusinessDayConvention::ModifiedFollowing);
    }
}
