//! Reference-data store file.
//!
//! One TOML document holds configuration items, securities, conventions and
//! market quotes. Documents may carry a `valid_from` instant; documents
//! without one are visible at every point in time.
//!
//! ```toml
//! [[configs]]
//! item = "curve_definition"
//! kind = "constant"
//! name = "USD-OIS"
//!
//! [[conventions]]
//! convention_kind = "overnight_index"
//! id = "CONVENTION~FEDFUNDS"
//! name = "FEDFUNDS"
//! currency = "USD"
//! day_count = "ACT/360"
//! publication_lag = 1
//!
//! [market_data]
//! USD-OIS = 0.0525
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use curve_core::config::ConfigItem;
use curve_core::reference::{Convention, Security};
use curve_core::source::{
    InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource, MarketDataSnapshot,
    ResolutionContext,
};
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// A document with an optional start of validity.
#[derive(Debug, Clone, Deserialize)]
pub struct Stored<T> {
    /// The document
    #[serde(flatten)]
    pub document: T,
    /// First instant the document is visible
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
}

/// Parsed store file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreDocument {
    /// Configuration items
    #[serde(default)]
    pub configs: Vec<Stored<ConfigItem>>,
    /// Index securities
    #[serde(default)]
    pub securities: Vec<Stored<Security>>,
    /// Index conventions
    #[serde(default)]
    pub conventions: Vec<Stored<Convention>>,
    /// Curve name -> quote
    #[serde(default)]
    pub market_data: BTreeMap<String, f64>,
}

/// Document counts of a loaded store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    /// Configuration items
    pub configs: usize,
    /// Securities
    pub securities: usize,
    /// Conventions
    pub conventions: usize,
    /// Market quotes
    pub market_data: usize,
}

impl StoreDocument {
    /// Parse a store from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a store file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        let store = Self::parse(&text)?;
        debug!(path = %path.display(), "loaded reference-data store");
        Ok(store)
    }

    /// Number of documents of each kind.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            configs: self.configs.len(),
            securities: self.securities.len(),
            conventions: self.conventions.len(),
            market_data: self.market_data.len(),
        }
    }

    /// Turn the store into in-memory sources.
    pub fn into_context(self) -> ResolutionContext {
        let mut configs = InMemoryConfigSource::new();
        for stored in self.configs {
            configs.add_valid_from(stored.document, stored.valid_from);
        }
        let mut securities = InMemorySecuritySource::new();
        for stored in self.securities {
            securities.add_valid_from(stored.document, stored.valid_from);
        }
        let mut conventions = InMemoryConventionSource::new();
        for stored in self.conventions {
            conventions.add_valid_from(stored.document, stored.valid_from);
        }
        let mut snapshot = MarketDataSnapshot::new();
        for (curve, value) in self.market_data {
            snapshot.insert(curve, value);
        }
        ResolutionContext::in_memory(configs, securities, conventions, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::types::{Currency, ExternalId, Tenor, VersionCorrection};

    const STORE: &str = r#"
[[configs]]
item = "curve_construction"
name = "USD-1"

[[configs.curve_groups]]

[[configs.curve_groups.curves]]
curve = "USD-OIS"
types = [{ type = "discounting", reference = "USD" }]

[[configs.curve_groups.curves]]
curve = "USD-3M"
types = [{ type = "ibor", convention = "CONVENTION~USD-LIBOR-3M", tenor = "3M" }]

[[configs]]
item = "curve_definition"
kind = "constant"
name = "USD-OIS"
valid_from = "2024-01-01T00:00:00Z"

[[securities]]
security_kind = "generic"
id = "SEC~AAPL"
security_type = "EQUITY"

[[conventions]]
convention_kind = "ibor_index"
id = "CONVENTION~USD-LIBOR-3M"
name = "USD-LIBOR-3M"
currency = "USD"
day_count = "ACT/360"
business_day = "Modified Following"
spot_lag = 2

[market_data]
USD-OIS = 0.05
USD-3M = 0.055
"#;

    #[test]
    fn test_parse_store() {
        let store = StoreDocument::parse(STORE).unwrap();
        assert_eq!(
            store.counts(),
            StoreCounts {
                configs: 2,
                securities: 1,
                conventions: 1,
                market_data: 2,
            }
        );
        assert!(store.configs[0].valid_from.is_none());
        assert!(store.configs[1].valid_from.is_some());
    }

    #[test]
    fn test_construction_configuration_round_trips_into_source() {
        let context = StoreDocument::parse(STORE).unwrap().into_context();
        let items = context.configs.get("USD-1", VersionCorrection::LATEST);
        assert_eq!(items.len(), 1);
        let config = items[0].clone().into_curve_construction().unwrap();
        assert_eq!(config.curve_names(), vec!["USD-OIS", "USD-3M"]);
        let types: Vec<_> = config.curve_types().map(|(_, t)| t.clone()).collect();
        assert_eq!(
            types[1],
            curve_core::config::CurveTypeConfiguration::ibor(
                ExternalId::of("CONVENTION", "USD-LIBOR-3M"),
                Tenor::ThreeMonth,
            )
        );
    }

    #[test]
    fn test_valid_from_hides_earlier_lookups() {
        let context = StoreDocument::parse(STORE).unwrap().into_context();
        let before = "2023-06-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert!(context
            .configs
            .get("USD-OIS", VersionCorrection::as_of(before))
            .is_empty());
        assert_eq!(
            context.configs.get("USD-OIS", VersionCorrection::LATEST).len(),
            1
        );
    }

    #[test]
    fn test_conventions_and_quotes_loaded() {
        let context = StoreDocument::parse(STORE).unwrap().into_context();
        let conventions = context.conventions.get(
            &ExternalId::of("CONVENTION", "USD-LIBOR-3M"),
            VersionCorrection::LATEST,
        );
        assert_eq!(conventions[0].as_ibor_index().unwrap().currency, Currency::USD);
        assert_eq!(context.market_data.data_point("USD-3M"), Some(0.055));
    }

    #[test]
    fn test_unknown_item_kind_fails() {
        let err = StoreDocument::parse("[[configs]]\nitem = \"portfolio\"\nname = \"X\"\n")
            .unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }

    // ========================================
    // Sample Store Tests
    // ========================================

    const SAMPLE: &str = include_str!("../../../data/store.toml");

    #[test]
    fn test_sample_store_validates_cleanly() {
        let context = StoreDocument::parse(SAMPLE).unwrap().into_context();
        for name in ["USD-1", "USD-2"] {
            let config = context.configs.get(name, VersionCorrection::LATEST)[0]
                .clone()
                .into_curve_construction()
                .unwrap();
            let report =
                curve_validation::validate_configuration(&config, VersionCorrection::LATEST, &context);
            assert!(report.is_clean(), "{}: {:?}", name, report.issues());
        }
    }

    #[test]
    fn test_sample_store_builds_chain() {
        use curve_builder::{ChainedCurveBuilder, CurveBuildEngine};
        use curve_core::bundle::BlockRange;

        let context = StoreDocument::parse(SAMPLE).unwrap().into_context();
        let builder = ChainedCurveBuilder::new(CurveBuildEngine::new(context));
        let output = builder.build("USD-2", VersionCorrection::LATEST).unwrap();

        let units = output.blocks.unit_map();
        assert_eq!(units["USD-OIS"], BlockRange::new(0, 1));
        assert_eq!(units["USD-3M"], BlockRange::new(1, 1));
        assert_eq!(units["USD-6M"], BlockRange::new(2, 1));
        assert!(output.multicurve.forward_curve_by_name("FEDFUNDS").is_some());
        assert_eq!(output.multicurve.forwards().len(), 3);
    }
}
