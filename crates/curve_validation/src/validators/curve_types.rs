//! Forward reference uniqueness across a configuration and everything it
//! depends on.
//!
//! Each ibor reference (convention and tenor) or overnight reference
//! (convention) may be produced by one curve only. The walk follows
//! exogenous configurations to any depth; an exogenous name that does not
//! resolve to exactly one construction configuration is skipped, and a
//! configuration already visited is not walked again.

use std::collections::{BTreeMap, BTreeSet};

use curve_core::config::{
    CurveConstructionConfiguration, CurveTypeConfiguration, IborCurveInformation, ItemKind,
};
use curve_core::source::ConfigSource;
use curve_core::types::{ExternalId, VersionCorrection};

use crate::classify::{classify, FnResolver};
use crate::result::ValidationResult;

/// Classification of ibor references; a validated reference maps to the
/// curve producing it.
pub type IborCurveTypeValidation = ValidationResult<IborCurveInformation, String, String>;

/// Classification of overnight references; a validated reference maps to the
/// curve producing it.
pub type OvernightCurveTypeValidation = ValidationResult<ExternalId, String, String>;

/// The configuration followed by every configuration reachable through
/// exogenous links, depth-first in declaration order.
pub fn reachable_configurations(
    config: &CurveConstructionConfiguration,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> Vec<CurveConstructionConfiguration> {
    let mut visited = BTreeSet::new();
    let mut out = Vec::new();
    walk(config.clone(), as_of, source, &mut visited, &mut out);
    out
}

fn walk(
    config: CurveConstructionConfiguration,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
    visited: &mut BTreeSet<String>,
    out: &mut Vec<CurveConstructionConfiguration>,
) {
    if !visited.insert(config.name.clone()) {
        return;
    }
    let exogenous = config.exogenous_configurations.clone();
    out.push(config);
    for name in exogenous {
        let mut items = source.get(&name, as_of);
        if items.len() != 1 {
            continue;
        }
        if let Ok(next) = items.remove(0).into_curve_construction() {
            walk(next, as_of, source, visited, out);
        }
    }
}

/// Reference -> distinct `(configuration, curve)` users, for every
/// declaration accepted by `key`.
fn users_by_reference<K, F>(
    configs: &[CurveConstructionConfiguration],
    key: F,
) -> BTreeMap<K, Vec<String>>
where
    K: Ord,
    F: Fn(&CurveTypeConfiguration) -> Option<K>,
{
    let mut users: BTreeMap<K, Vec<(String, String)>> = BTreeMap::new();
    for config in configs {
        for (curve, declaration) in config.curve_types() {
            if let Some(reference) = key(declaration) {
                let user = (config.name.clone(), curve.to_string());
                let entry = users.entry(reference).or_default();
                if !entry.contains(&user) {
                    entry.push(user);
                }
            }
        }
    }
    users
        .into_iter()
        .map(|(reference, list)| {
            let curves = list.into_iter().map(|(_, curve)| curve).collect();
            (reference, curves)
        })
        .collect()
}

fn classify_users<K>(
    expected: ItemKind,
    users: BTreeMap<K, Vec<String>>,
) -> ValidationResult<K, String, String>
where
    K: Ord + Clone,
{
    let resolver = FnResolver::new(
        |reference: &K| users.get(reference).cloned().unwrap_or_default(),
        Ok::<String, String>,
    );
    classify(expected, users.keys().cloned(), &resolver)
}

/// Check that every ibor reference is produced by one curve only.
///
/// # Examples
///
/// ```
/// use curve_core::config::{
///     CurveConstructionConfiguration, CurveGroupConfiguration, CurveTypeConfiguration,
/// };
/// use curve_core::source::InMemoryConfigSource;
/// use curve_core::types::{ExternalId, Tenor, VersionCorrection};
/// use curve_validation::validate_ibor_curve_types;
///
/// let libor = CurveTypeConfiguration::ibor(
///     ExternalId::of("CONVENTION", "USD-LIBOR"),
///     Tenor::ThreeMonth,
/// );
/// let group = CurveGroupConfiguration::new()
///     .with_curve("USD-3M", vec![libor.clone()])
///     .with_curve("USD-3M-BIS", vec![libor]);
/// let config = CurveConstructionConfiguration::new("USD", vec![group]);
///
/// let source = InMemoryConfigSource::new();
/// let result = validate_ibor_curve_types(&config, VersionCorrection::LATEST, &source);
/// assert_eq!(result.duplicated().len(), 1);
/// ```
pub fn validate_ibor_curve_types(
    config: &CurveConstructionConfiguration,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> IborCurveTypeValidation {
    let configs = reachable_configurations(config, as_of, source);
    let users = users_by_reference(&configs, |declaration| match declaration {
        CurveTypeConfiguration::Ibor { convention, tenor } => {
            Some(IborCurveInformation::new(convention.clone(), *tenor))
        }
        _ => None,
    });
    classify_users(ItemKind::IborCurveInformation, users)
}

/// Check that every overnight reference is produced by one curve only.
pub fn validate_overnight_curve_types(
    config: &CurveConstructionConfiguration,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> OvernightCurveTypeValidation {
    let configs = reachable_configurations(config, as_of, source);
    let users = users_by_reference(&configs, |declaration| match declaration {
        CurveTypeConfiguration::Overnight { convention } => Some(convention.clone()),
        _ => None,
    });
    classify_users(ItemKind::OvernightConvention, users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::config::CurveGroupConfiguration;
    use curve_core::source::InMemoryConfigSource;
    use curve_core::types::Tenor;

    fn convention(value: &str) -> ExternalId {
        ExternalId::of("CONVENTION", value)
    }

    fn ibor(value: &str, tenor: Tenor) -> CurveTypeConfiguration {
        CurveTypeConfiguration::ibor(convention(value), tenor)
    }

    fn config(
        name: &str,
        curves: &[(&str, CurveTypeConfiguration)],
        exogenous: &[&str],
    ) -> CurveConstructionConfiguration {
        let group = curves
            .iter()
            .fold(CurveGroupConfiguration::new(), |g, (curve, t)| {
                g.with_curve(*curve, vec![t.clone()])
            });
        CurveConstructionConfiguration::new(name, vec![group])
            .with_exogenous(exogenous.iter().copied())
    }

    // ========================================
    // Ibor Tests
    // ========================================

    #[test]
    fn test_unique_references_validate() {
        let config = config(
            "USD",
            &[
                ("USD-3M", ibor("USD-LIBOR", Tenor::ThreeMonth)),
                ("USD-6M", ibor("USD-LIBOR", Tenor::SixMonth)),
            ],
            &[],
        );
        let source = InMemoryConfigSource::new();
        let result = validate_ibor_curve_types(&config, VersionCorrection::LATEST, &source);
        assert!(result.is_valid());
        let six_month = IborCurveInformation::new(convention("USD-LIBOR"), Tenor::SixMonth);
        assert_eq!(result.validated()[&six_month], "USD-6M");
    }

    #[test]
    fn test_reference_reused_in_nested_exogenous_is_duplicated() {
        let mut source = InMemoryConfigSource::new();
        source.add(config(
            "LEVEL-2",
            &[("OLD-3M", ibor("USD-LIBOR", Tenor::ThreeMonth))],
            &[],
        ));
        source.add(config(
            "LEVEL-1",
            &[("EUR-6M", ibor("EURIBOR", Tenor::SixMonth))],
            &["LEVEL-2"],
        ));
        let top = config(
            "TOP",
            &[("USD-3M", ibor("USD-LIBOR", Tenor::ThreeMonth))],
            &["LEVEL-1", "NOT-STORED"],
        );

        let result = validate_ibor_curve_types(&top, VersionCorrection::LATEST, &source);
        let three_month = IborCurveInformation::new(convention("USD-LIBOR"), Tenor::ThreeMonth);
        assert!(result.duplicated().contains(&three_month));
        assert_eq!(result.validated().len(), 1);
    }

    #[test]
    fn test_cycle_is_walked_once() {
        let mut source = InMemoryConfigSource::new();
        source.add(config("A", &[("A-3M", ibor("A", Tenor::ThreeMonth))], &["B"]));
        source.add(config("B", &[("B-3M", ibor("B", Tenor::ThreeMonth))], &["A"]));
        let top = config("A", &[("A-3M", ibor("A", Tenor::ThreeMonth))], &["B"]);

        let configs = reachable_configurations(&top, VersionCorrection::LATEST, &source);
        let names: Vec<&str> = configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        let result = validate_ibor_curve_types(&top, VersionCorrection::LATEST, &source);
        assert!(result.is_valid());
    }

    // ========================================
    // Overnight Tests
    // ========================================

    #[test]
    fn test_overnight_references() {
        let mut source = InMemoryConfigSource::new();
        source.add(config(
            "BASE",
            &[("USD-FF", CurveTypeConfiguration::overnight(convention("FEDFUNDS")))],
            &[],
        ));
        let top = config(
            "TOP",
            &[
                ("USD-FF-2", CurveTypeConfiguration::overnight(convention("FEDFUNDS"))),
                ("GBP-SONIA", CurveTypeConfiguration::overnight(convention("SONIA"))),
                ("USD-3M", ibor("USD-LIBOR", Tenor::ThreeMonth)),
            ],
            &["BASE"],
        );
        let result = validate_overnight_curve_types(&top, VersionCorrection::LATEST, &source);
        assert!(result.duplicated().contains(&convention("FEDFUNDS")));
        assert_eq!(result.validated()[&convention("SONIA")], "GBP-SONIA");
        assert_eq!(result.len(), 2);
    }
}
