//! Point-in-time visibility for source lookups.

use chrono::{DateTime, Utc};
use std::fmt;

/// Controls which version of a stored document a lookup can see.
///
/// `Latest` sees every stored document; `AsOf(t)` sees only documents whose
/// validity started at or before `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VersionCorrection {
    /// The most recent state of the source.
    #[default]
    Latest,
    /// The state of the source at a fixed instant.
    AsOf(DateTime<Utc>),
}

impl VersionCorrection {
    /// Shorthand for [`VersionCorrection::Latest`].
    pub const LATEST: VersionCorrection = VersionCorrection::Latest;

    /// Create a point-in-time view.
    pub fn as_of(instant: DateTime<Utc>) -> Self {
        VersionCorrection::AsOf(instant)
    }

    /// Whether a document valid from `valid_from` is visible.
    ///
    /// A document without a start instant is visible to every view.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use curve_core::types::VersionCorrection;
    ///
    /// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    ///
    /// assert!(VersionCorrection::LATEST.sees(Some(t1)));
    /// assert!(VersionCorrection::as_of(t1).sees(Some(t0)));
    /// assert!(!VersionCorrection::as_of(t0).sees(Some(t1)));
    /// ```
    pub fn sees(&self, valid_from: Option<DateTime<Utc>>) -> bool {
        match (self, valid_from) {
            (VersionCorrection::Latest, _) | (_, None) => true,
            (VersionCorrection::AsOf(instant), Some(from)) => from <= *instant,
        }
    }
}

impl fmt::Display for VersionCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionCorrection::Latest => write!(f, "LATEST"),
            VersionCorrection::AsOf(instant) => write!(f, "{}", instant.to_rfc3339()),
        }
    }
}
