//! Validators over the configuration source: curve definitions, construction
//! configurations and exposure function lists.

use curve_core::config::{
    ConfigItem, CurveConstructionConfiguration, CurveDefinition, CurveGroupConfiguration,
    ExposureFunctions, ItemKind,
};
use curve_core::source::ConfigSource;
use curve_core::types::VersionCorrection;

use crate::classify::{classify, FnResolver};
use crate::result::ValidationResult;

/// Classification of names that should resolve to curve definitions.
pub type CurveDefinitionValidation = ValidationResult<String, CurveDefinition, ConfigItem>;

/// Classification of names that should resolve to construction configurations.
pub type ConstructionValidation = ValidationResult<String, CurveConstructionConfiguration, ConfigItem>;

/// Classification of names that should resolve to exposure function lists.
pub type ExposureFunctionsValidation = ValidationResult<String, ExposureFunctions, ConfigItem>;

/// Resolve every curve of a group to its definition.
///
/// # Examples
///
/// ```
/// use curve_core::config::{CurveDefinition, CurveGroupConfiguration};
/// use curve_core::source::InMemoryConfigSource;
/// use curve_core::types::VersionCorrection;
/// use curve_validation::validate_curve_group;
///
/// let mut source = InMemoryConfigSource::new();
/// source.add(CurveDefinition::constant("USD-OIS"));
///
/// let group = CurveGroupConfiguration::new()
///     .with_curve("USD-OIS", vec![])
///     .with_curve("USD-3M", vec![]);
/// let result = validate_curve_group(&group, VersionCorrection::LATEST, &source);
///
/// assert!(result.validated().contains_key("USD-OIS"));
/// assert!(result.missing().contains("USD-3M"));
/// ```
pub fn validate_curve_group(
    group: &CurveGroupConfiguration,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> CurveDefinitionValidation {
    let resolver = FnResolver::new(
        |name: &String| source.get(name, as_of),
        ConfigItem::into_curve_definition,
    );
    classify(
        ItemKind::CurveDefinition,
        group.curve_names().map(str::to_string),
        &resolver,
    )
}

/// Resolve names to construction configurations.
pub fn validate_construction_configurations<I, S>(
    names: I,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> ConstructionValidation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let resolver = FnResolver::new(
        |name: &String| source.get(name, as_of),
        ConfigItem::into_curve_construction,
    );
    classify(
        ItemKind::CurveConstruction,
        names.into_iter().map(Into::into),
        &resolver,
    )
}

/// Resolve the direct exogenous dependencies of a configuration.
pub fn validate_exogenous_configurations(
    config: &CurveConstructionConfiguration,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> ConstructionValidation {
    validate_construction_configurations(
        config.exogenous_configurations.iter().cloned(),
        as_of,
        source,
    )
}

/// Resolve names to exposure function lists.
pub fn validate_exposure_function_configurations<I, S>(
    names: I,
    as_of: VersionCorrection,
    source: &dyn ConfigSource,
) -> ExposureFunctionsValidation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let resolver = FnResolver::new(
        |name: &String| source.get(name, as_of),
        ConfigItem::into_exposure_functions,
    );
    classify(
        ItemKind::ExposureFunctions,
        names.into_iter().map(Into::into),
        &resolver,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use curve_core::source::InMemoryConfigSource;

    fn source() -> InMemoryConfigSource {
        let mut source = InMemoryConfigSource::new();
        source.add(CurveDefinition::constant("USD-OIS"));
        source.add(CurveDefinition::constant("USD-3M"));
        source.add(CurveDefinition::constant("USD-3M"));
        source.add(CurveConstructionConfiguration::new("USD-1", vec![]));
        source.add(CurveConstructionConfiguration::new("EUR-1", vec![]));
        source
    }

    // ========================================
    // Curve Group Tests
    // ========================================

    #[test]
    fn test_curve_group_classification() {
        let group = CurveGroupConfiguration::new()
            .with_curve("USD-OIS", vec![])
            .with_curve("USD-3M", vec![])
            .with_curve("USD-1", vec![])
            .with_curve("USD-6M", vec![]);
        let result = validate_curve_group(&group, VersionCorrection::LATEST, &source());

        assert_eq!(result.expected(), ItemKind::CurveDefinition);
        assert_eq!(
            result.validated()["USD-OIS"],
            CurveDefinition::constant("USD-OIS")
        );
        assert!(result.duplicated().contains("USD-3M"));
        assert_eq!(result.unsupported()["USD-1"].kind(), ItemKind::CurveConstruction);
        assert!(result.missing().contains("USD-6M"));
    }

    #[test]
    fn test_curve_group_as_of() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut source = InMemoryConfigSource::new();
        source.add_valid_from(CurveDefinition::constant("USD-OIS"), Some(t1));
        let group = CurveGroupConfiguration::new().with_curve("USD-OIS", vec![]);

        let before = validate_curve_group(&group, VersionCorrection::as_of(t0), &source);
        let after = validate_curve_group(&group, VersionCorrection::as_of(t1), &source);
        assert!(before.missing().contains("USD-OIS"));
        assert!(after.is_valid());
    }

    // ========================================
    // Construction Configuration Tests
    // ========================================

    #[test]
    fn test_exogenous_classification() {
        let config = CurveConstructionConfiguration::new("USD-2", vec![])
            .with_exogenous(["USD-1", "GBP-1", "USD-OIS"]);
        let result =
            validate_exogenous_configurations(&config, VersionCorrection::LATEST, &source());

        assert!(result.validated().contains_key("USD-1"));
        assert!(result.missing().contains("GBP-1"));
        assert!(result.unsupported().contains_key("USD-OIS"));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_exposure_function_lists() {
        let mut source = source();
        source.add(ExposureFunctions {
            name: "DEFAULT".to_string(),
            exposure_functions: vec!["Currency".to_string()],
        });
        let result = validate_exposure_function_configurations(
            ["DEFAULT", "EUR-1"],
            VersionCorrection::LATEST,
            &source,
        );
        assert_eq!(result.validated()["DEFAULT"].exposure_functions, vec!["Currency"]);
        assert!(result.unsupported().contains_key("EUR-1"));
    }
}
