//! Read-only collaborator interfaces.
//!
//! Every lookup returns all matches visible at the requested point in time:
//! zero, one or several. Deciding what a count means is left to callers.

use crate::config::ConfigItem;
use crate::reference::{Convention, Security};
use crate::types::{ExternalId, VersionCorrection};

/// Source of configuration documents keyed by name.
pub trait ConfigSource: Send + Sync {
    /// Items stored under `name`, of any kind.
    fn get(&self, name: &str, as_of: VersionCorrection) -> Vec<ConfigItem>;

    /// Every name with at least one stored item.
    fn names(&self) -> Vec<String>;
}

/// Source of securities keyed by identifier.
pub trait SecuritySource: Send + Sync {
    /// Securities stored under `id`.
    fn get(&self, id: &ExternalId, as_of: VersionCorrection) -> Vec<Security>;
}

/// Source of conventions keyed by identifier.
pub trait ConventionSource: Send + Sync {
    /// Conventions stored under `id`.
    fn get(&self, id: &ExternalId, as_of: VersionCorrection) -> Vec<Convention>;
}

/// Source of market quotes used to calibrate curves.
pub trait MarketDataSource: Send + Sync {
    /// The quote for a curve, if one is available.
    fn data_point(&self, curve: &str) -> Option<f64>;
}
