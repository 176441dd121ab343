//! Every validator run against one construction configuration.

use curve_core::config::CurveConstructionConfiguration;
use curve_core::source::ResolutionContext;
use curve_core::types::VersionCorrection;

use crate::validators::{
    validate_curve_group, validate_discounting_types, validate_exogenous_configurations,
    validate_ibor_curve_types, validate_ibor_securities, validate_overnight_curve_types,
    validate_overnight_securities, ConstructionValidation, CurveDefinitionValidation,
    DiscountingValidation, IborCurveTypeValidation, IborSecurityValidation,
    OvernightCurveTypeValidation, OvernightSecurityValidation,
};

/// Group-level validations, one per curve group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    /// Position of the group in the configuration
    pub index: usize,
    /// Curve names resolved to definitions
    pub curves: CurveDefinitionValidation,
    /// Discounting references
    pub discounting: DiscountingValidation,
    /// Ibor declaration securities
    pub ibor_securities: IborSecurityValidation,
    /// Overnight declaration securities
    pub overnight_securities: OvernightSecurityValidation,
}

impl GroupReport {
    /// Issue counts, labelled.
    pub fn issues(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("curve definitions", self.curves.issue_count()),
            ("discounting references", self.discounting.issue_count()),
            ("ibor securities", self.ibor_securities.issue_count()),
            ("overnight securities", self.overnight_securities.issue_count()),
        ]
    }
}

/// Configuration-wide validation.
#[derive(Debug, Clone)]
pub struct ConfigurationReport {
    /// Configuration name
    pub configuration: String,
    /// Direct exogenous dependencies
    pub exogenous: ConstructionValidation,
    /// Per-group results
    pub groups: Vec<GroupReport>,
    /// Ibor reference uniqueness, across exogenous chains
    pub ibor_curve_types: IborCurveTypeValidation,
    /// Overnight reference uniqueness, across exogenous chains
    pub overnight_curve_types: OvernightCurveTypeValidation,
}

impl ConfigurationReport {
    /// Issue counts, labelled; group entries are prefixed with the group index.
    pub fn issues(&self) -> Vec<(String, usize)> {
        let mut issues = vec![(
            "exogenous configurations".to_string(),
            self.exogenous.issue_count(),
        )];
        for group in &self.groups {
            for (label, count) in group.issues() {
                issues.push((format!("group {}: {}", group.index, label), count));
            }
        }
        issues.push(("ibor curve types".to_string(), self.ibor_curve_types.issue_count()));
        issues.push((
            "overnight curve types".to_string(),
            self.overnight_curve_types.issue_count(),
        ));
        issues
    }

    /// Total issue count.
    pub fn issue_count(&self) -> usize {
        self.issues().iter().map(|(_, count)| count).sum()
    }

    /// Whether every validator validated every name.
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Run every validator for a configuration.
///
/// Classification outcomes are collected, never raised.
pub fn validate_configuration(
    config: &CurveConstructionConfiguration,
    as_of: VersionCorrection,
    context: &ResolutionContext,
) -> ConfigurationReport {
    let configs = context.configs.as_ref();
    let securities = context.securities.as_ref();
    let groups = config
        .curve_groups
        .iter()
        .enumerate()
        .map(|(index, group)| GroupReport {
            index,
            curves: validate_curve_group(group, as_of, configs),
            discounting: validate_discounting_types(group),
            ibor_securities: validate_ibor_securities(group, as_of, securities),
            overnight_securities: validate_overnight_securities(group, as_of, securities),
        })
        .collect();

    ConfigurationReport {
        configuration: config.name.clone(),
        exogenous: validate_exogenous_configurations(config, as_of, configs),
        groups,
        ibor_curve_types: validate_ibor_curve_types(config, as_of, configs),
        overnight_curve_types: validate_overnight_curve_types(config, as_of, configs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::config::{CurveDefinition, CurveGroupConfiguration, CurveTypeConfiguration};
    use curve_core::reference::IborIndexSecurity;
    use curve_core::source::{
        InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource, MarketDataSnapshot,
    };
    use curve_core::types::{ExternalId, Tenor};

    fn libor() -> ExternalId {
        ExternalId::of("SEC", "US0003M")
    }

    fn usd_config() -> CurveConstructionConfiguration {
        let group = CurveGroupConfiguration::new()
            .with_curve("USD-OIS", vec![CurveTypeConfiguration::discounting("USD")])
            .with_curve(
                "USD-3M",
                vec![CurveTypeConfiguration::ibor(libor(), Tenor::ThreeMonth)],
            );
        CurveConstructionConfiguration::new("USD-1", vec![group])
    }

    fn context(with_definitions: bool) -> ResolutionContext {
        let mut configs = InMemoryConfigSource::new();
        configs.add(usd_config());
        if with_definitions {
            configs.add(CurveDefinition::constant("USD-OIS"));
            configs.add(CurveDefinition::constant("USD-3M"));
        }
        let mut securities = InMemorySecuritySource::new();
        securities.add(IborIndexSecurity {
            id: libor(),
            name: "USD LIBOR 3M".to_string(),
            convention_id: ExternalId::of("CONVENTION", "USD-LIBOR-3M"),
            tenor: Tenor::ThreeMonth,
        });
        ResolutionContext::in_memory(
            configs,
            securities,
            InMemoryConventionSource::new(),
            MarketDataSnapshot::new(),
        )
    }

    #[test]
    fn test_clean_configuration() {
        let report = validate_configuration(&usd_config(), VersionCorrection::LATEST, &context(true));
        assert!(report.is_clean(), "{:?}", report.issues());
        assert_eq!(report.configuration, "USD-1");
        assert_eq!(report.groups.len(), 1);
    }

    #[test]
    fn test_missing_definitions_are_counted() {
        let report = validate_configuration(&usd_config(), VersionCorrection::LATEST, &context(false));
        assert!(!report.is_clean());
        assert_eq!(report.issue_count(), 2);
        assert_eq!(report.groups[0].curves.missing().len(), 2);
        assert!(report
            .issues()
            .contains(&("group 0: curve definitions".to_string(), 2)));
    }
}
