//! In-memory sources and the resolution context that bundles them.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::traits::{ConfigSource, ConventionSource, MarketDataSource, SecuritySource};
use crate::config::ConfigItem;
use crate::reference::{Convention, Security};
use crate::types::{ExternalId, VersionCorrection};

#[derive(Debug, Clone)]
struct Versioned<V> {
    valid_from: Option<DateTime<Utc>>,
    value: V,
}

/// Documents keyed by `K`, each with an optional start of validity.
///
/// A lookup sees the most recent visible version of a key: a document with
/// a later `valid_from` replaces earlier ones, and a document without one is
/// the oldest version. Documents sharing the same `valid_from` are separate
/// matches, so storing two of them under one key makes lookups return both.
#[derive(Debug, Clone)]
pub struct VersionedStore<K: Ord, V> {
    entries: BTreeMap<K, Vec<Versioned<V>>>,
}

impl<K: Ord, V> Default for VersionedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> VersionedStore<K, V> {
    /// Store a document.
    pub fn insert(&mut self, key: K, value: V, valid_from: Option<DateTime<Utc>>) {
        self.entries
            .entry(key)
            .or_default()
            .push(Versioned { valid_from, value });
    }

    /// Documents of the latest version of `key` visible at `as_of`, in
    /// insertion order.
    pub fn get<Q>(&self, key: &Q, as_of: VersionCorrection) -> Vec<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(versions) = self.entries.get(key) else {
            return Vec::new();
        };
        let visible = || versions.iter().filter(|v| as_of.sees(v.valid_from));
        let Some(latest) = visible().map(|v| v.valid_from).max() else {
            return Vec::new();
        };
        visible()
            .filter(|v| v.valid_from == latest)
            .map(|v| v.value.clone())
            .collect()
    }

    /// Keys with at least one document.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    /// Total number of stored documents.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Configuration source backed by memory.
///
/// # Examples
///
/// ```
/// use curve_core::config::{ConfigItem, CurveDefinition};
/// use curve_core::source::{ConfigSource, InMemoryConfigSource};
/// use curve_core::types::VersionCorrection;
///
/// let mut source = InMemoryConfigSource::new();
/// source.add(CurveDefinition::constant("USD-OIS"));
///
/// assert_eq!(source.get("USD-OIS", VersionCorrection::LATEST).len(), 1);
/// assert!(source.get("EUR-OIS", VersionCorrection::LATEST).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    store: VersionedStore<String, ConfigItem>,
}

impl InMemoryConfigSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item under its own name, visible to every view.
    pub fn add(&mut self, item: impl Into<ConfigItem>) {
        self.add_valid_from(item, None);
    }

    /// Store an item that becomes visible at `valid_from`.
    pub fn add_valid_from(&mut self, item: impl Into<ConfigItem>, valid_from: Option<DateTime<Utc>>) {
        let item = item.into();
        self.store.insert(item.name().to_string(), item, valid_from);
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn get(&self, name: &str, as_of: VersionCorrection) -> Vec<ConfigItem> {
        self.store.get(name, as_of)
    }

    fn names(&self) -> Vec<String> {
        self.store.keys().cloned().collect()
    }
}

/// Security source backed by memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySecuritySource {
    store: VersionedStore<ExternalId, Security>,
}

impl InMemorySecuritySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a security under its own identifier.
    pub fn add(&mut self, security: impl Into<Security>) {
        self.add_valid_from(security, None);
    }

    /// Store a security that becomes visible at `valid_from`.
    pub fn add_valid_from(
        &mut self,
        security: impl Into<Security>,
        valid_from: Option<DateTime<Utc>>,
    ) {
        let security = security.into();
        self.store.insert(security.id().clone(), security, valid_from);
    }

    /// Number of stored securities.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl SecuritySource for InMemorySecuritySource {
    fn get(&self, id: &ExternalId, as_of: VersionCorrection) -> Vec<Security> {
        self.store.get(id, as_of)
    }
}

/// Convention source backed by memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConventionSource {
    store: VersionedStore<ExternalId, Convention>,
}

impl InMemoryConventionSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a convention under its own identifier.
    pub fn add(&mut self, convention: impl Into<Convention>) {
        self.add_valid_from(convention, None);
    }

    /// Store a convention that becomes visible at `valid_from`.
    pub fn add_valid_from(
        &mut self,
        convention: impl Into<Convention>,
        valid_from: Option<DateTime<Utc>>,
    ) {
        let convention = convention.into();
        self.store
            .insert(convention.id().clone(), convention, valid_from);
    }

    /// Number of stored conventions.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ConventionSource for InMemoryConventionSource {
    fn get(&self, id: &ExternalId, as_of: VersionCorrection) -> Vec<Convention> {
        self.store.get(id, as_of)
    }
}

/// Market quotes keyed by curve name.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketDataSnapshot {
    points: BTreeMap<String, f64>,
}

impl MarketDataSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the quote for a curve.
    pub fn with_point(mut self, curve: impl Into<String>, value: f64) -> Self {
        self.insert(curve, value);
        self
    }

    /// Add (or replace) the quote for a curve.
    pub fn insert(&mut self, curve: impl Into<String>, value: f64) {
        self.points.insert(curve.into(), value);
    }

    /// Number of quotes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no quotes.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MarketDataSource for MarketDataSnapshot {
    fn data_point(&self, curve: &str) -> Option<f64> {
        self.points.get(curve).copied()
    }
}

/// The read-only sources a validation or build resolves against.
///
/// Cloning shares the underlying sources.
#[derive(Clone)]
pub struct ResolutionContext {
    /// Configuration documents
    pub configs: Arc<dyn ConfigSource>,
    /// Index securities
    pub securities: Arc<dyn SecuritySource>,
    /// Index conventions
    pub conventions: Arc<dyn ConventionSource>,
    /// Calibration quotes
    pub market_data: Arc<dyn MarketDataSource>,
}

impl ResolutionContext {
    /// Bundle four sources.
    pub fn new(
        configs: Arc<dyn ConfigSource>,
        securities: Arc<dyn SecuritySource>,
        conventions: Arc<dyn ConventionSource>,
        market_data: Arc<dyn MarketDataSource>,
    ) -> Self {
        Self {
            configs,
            securities,
            conventions,
            market_data,
        }
    }

    /// Bundle in-memory sources.
    pub fn in_memory(
        configs: InMemoryConfigSource,
        securities: InMemorySecuritySource,
        conventions: InMemoryConventionSource,
        market_data: MarketDataSnapshot,
    ) -> Self {
        Self::new(
            Arc::new(configs),
            Arc::new(securities),
            Arc::new(conventions),
            Arc::new(market_data),
        )
    }
}

impl std::fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("configs", &self.configs.names().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CurveDefinition;
    use crate::reference::{GenericSecurity, IborIndexSecurity};
    use crate::types::Tenor;
    use chrono::TimeZone;

    // ========================================
    // Versioning Tests
    // ========================================

    #[test]
    fn test_documents_filtered_by_as_of() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut source = InMemoryConfigSource::new();
        source.add_valid_from(CurveDefinition::constant("USD-OIS"), Some(t1));

        assert!(source.get("USD-OIS", VersionCorrection::as_of(t0)).is_empty());
        assert_eq!(source.get("USD-OIS", VersionCorrection::as_of(t1)).len(), 1);
        assert_eq!(source.get("USD-OIS", VersionCorrection::LATEST).len(), 1);
    }

    #[test]
    fn test_each_document_is_a_separate_match() {
        let mut source = InMemoryConfigSource::new();
        source.add(CurveDefinition::constant("USD-OIS"));
        source.add(CurveDefinition::constant("USD-OIS"));
        assert_eq!(source.get("USD-OIS", VersionCorrection::LATEST).len(), 2);
        assert_eq!(source.names(), vec!["USD-OIS".to_string()]);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_later_version_replaces_earlier() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let mut store = VersionedStore::default();
        store.insert("USD-OIS".to_string(), "unversioned", None);
        store.insert("USD-OIS".to_string(), "june", Some(t1));
        store.insert("USD-OIS".to_string(), "january", Some(t0));

        assert_eq!(store.get("USD-OIS", VersionCorrection::LATEST), vec!["june"]);
        assert_eq!(store.get("USD-OIS", VersionCorrection::as_of(t2)), vec!["june"]);
        assert_eq!(
            store.get("USD-OIS", VersionCorrection::as_of(t0)),
            vec!["january"]
        );
        let before = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            store.get("USD-OIS", VersionCorrection::as_of(before)),
            vec!["unversioned"]
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_documents_of_one_version_are_separate_matches() {
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut source = InMemoryConfigSource::new();
        source.add(CurveDefinition::constant("USD-OIS"));
        source.add_valid_from(CurveDefinition::constant("USD-OIS"), Some(t1));
        source.add_valid_from(CurveDefinition::constant("USD-OIS"), Some(t1));
        assert_eq!(source.get("USD-OIS", VersionCorrection::LATEST).len(), 2);
    }

    // ========================================
    // Reference Source Tests
    // ========================================

    #[test]
    fn test_security_source_by_id() {
        let id = ExternalId::of("SEC", "US0003M");
        let mut source = InMemorySecuritySource::new();
        source.add(IborIndexSecurity {
            id: id.clone(),
            name: "USD LIBOR 3M".to_string(),
            convention_id: ExternalId::of("CONVENTION", "USD-LIBOR-3M"),
            tenor: Tenor::ThreeMonth,
        });
        source.add(GenericSecurity {
            id: ExternalId::of("SEC", "AAPL"),
            security_type: "EQUITY".to_string(),
        });

        let found = SecuritySource::get(&source, &id, VersionCorrection::LATEST);
        assert_eq!(found.len(), 1);
        assert!(found[0].as_ibor_index().is_some());
        assert!(
            SecuritySource::get(&source, &ExternalId::of("SEC", "X"), VersionCorrection::LATEST)
                .is_empty()
        );
    }

    #[test]
    fn test_snapshot_data_point() {
        let snapshot = MarketDataSnapshot::new()
            .with_point("USD-OIS", 0.05)
            .with_point("USD-OIS", 0.051);
        assert_eq!(snapshot.data_point("USD-OIS"), Some(0.051));
        assert_eq!(snapshot.data_point("USD-3M"), None);
        assert_eq!(snapshot.len(), 1);
    }
}
