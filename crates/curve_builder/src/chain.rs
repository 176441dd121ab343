//! Building a configuration together with everything it depends on.
//!
//! [`CurveBuildEngine`] only merges bundles it is given. The chained builder
//! builds exogenous configurations first, depth-first and once per name, and
//! hands their outputs to the engine as the exogenous map.
//!
//! Every build extends the output of the build before it, so all outputs of
//! one call share a single column numbering. Sibling and diamond
//! dependencies then merge without collisions. An output may therefore hold
//! curves of configurations built earlier in the same call that it does not
//! depend on.

use curve_core::types::VersionCorrection;
use tracing::debug;

use crate::engine::{BuildOutput, CurveBuildEngine, ExogenousBundles};
use crate::error::BuildError;

/// Builds exogenous chains of any depth.
#[derive(Debug, Clone)]
pub struct ChainedCurveBuilder {
    engine: CurveBuildEngine,
}

impl ChainedCurveBuilder {
    /// Wrap an engine.
    pub fn new(engine: CurveBuildEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &CurveBuildEngine {
        &self.engine
    }

    /// Build a configuration after its dependencies.
    pub fn build(&self, name: &str, as_of: VersionCorrection) -> Result<BuildOutput, BuildError> {
        let mut built = self.build_all(name, as_of)?;
        built
            .remove(name)
            .ok_or_else(|| BuildError::configuration_not_found(name))
    }

    /// Build a configuration and every configuration it reaches.
    ///
    /// The returned map holds one output per configuration built.
    ///
    /// # Errors
    ///
    /// `CyclicDependency` when a configuration depends on itself through
    /// exogenous links, plus any error of the individual builds.
    pub fn build_all(
        &self,
        name: &str,
        as_of: VersionCorrection,
    ) -> Result<ExogenousBundles, BuildError> {
        let mut walk = Walk::default();
        self.visit(name, as_of, &mut walk)?;
        Ok(walk.built)
    }

    fn visit(
        &self,
        name: &str,
        as_of: VersionCorrection,
        walk: &mut Walk,
    ) -> Result<(), BuildError> {
        if walk.built.contains_key(name) {
            return Ok(());
        }
        if let Some(position) = walk.stack.iter().position(|entry| entry == name) {
            let mut chain = walk.stack[position..].to_vec();
            chain.push(name.to_string());
            return Err(BuildError::cyclic_dependency(chain));
        }

        let config = self.engine.resolve_configuration(name, as_of)?;
        walk.stack.push(name.to_string());
        for dependency in &config.exogenous_configurations {
            self.visit(dependency, as_of, walk)?;
        }
        walk.stack.pop();

        let baseline = walk.last.as_ref().and_then(|last| walk.built.get(last));
        debug!(
            configuration = name,
            depth = walk.stack.len(),
            baseline = baseline.map(|b| b.configuration.as_str()),
            "building"
        );
        let output = self.engine.build_extending(&config, as_of, &walk.built, baseline)?;
        walk.built.insert(name.to_string(), output);
        walk.last = Some(name.to_string());
        Ok(())
    }
}

/// State of one depth-first build.
#[derive(Default)]
struct Walk {
    built: ExogenousBundles,
    stack: Vec<String>,
    last: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::bundle::BlockRange;
    use curve_core::config::{
        CurveConstructionConfiguration, CurveGroupConfiguration, CurveTypeConfiguration,
    };
    use curve_core::source::{
        InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource, MarketDataSnapshot,
        ResolutionContext,
    };
    use curve_core::types::Currency;

    fn config(
        name: &str,
        curve: &str,
        currency: &str,
        exogenous: &[&str],
    ) -> CurveConstructionConfiguration {
        let group = CurveGroupConfiguration::new()
            .with_curve(curve, vec![CurveTypeConfiguration::discounting(currency)]);
        CurveConstructionConfiguration::new(name, vec![group])
            .with_exogenous(exogenous.iter().copied())
    }

    fn builder(configs: InMemoryConfigSource) -> ChainedCurveBuilder {
        let snapshot = MarketDataSnapshot::new()
            .with_point("EUR-OIS", 0.02)
            .with_point("GBP-OIS", 0.03)
            .with_point("USD-OIS", 0.05);
        ChainedCurveBuilder::new(CurveBuildEngine::new(ResolutionContext::in_memory(
            configs,
            InMemorySecuritySource::new(),
            InMemoryConventionSource::new(),
            snapshot,
        )))
    }

    // ========================================
    // Chain Tests
    // ========================================

    #[test]
    fn test_three_level_chain() {
        let mut configs = InMemoryConfigSource::new();
        configs.add(config("EUR", "EUR-OIS", "EUR", &[]));
        configs.add(config("GBP", "GBP-OIS", "GBP", &["EUR"]));
        configs.add(config("USD", "USD-OIS", "USD", &["GBP"]));

        let output = builder(configs)
            .build("USD", VersionCorrection::LATEST)
            .unwrap();

        let units = output.blocks.unit_map();
        assert_eq!(units["EUR-OIS"], BlockRange::new(0, 1));
        assert_eq!(units["GBP-OIS"], BlockRange::new(1, 1));
        assert_eq!(units["USD-OIS"], BlockRange::new(2, 1));
        assert!(output.multicurve.discount_curve(Currency::EUR).is_some());
        assert!(output.multicurve.discount_curve(Currency::GBP).is_some());
    }

    #[test]
    fn test_build_all_returns_every_level() {
        let mut configs = InMemoryConfigSource::new();
        configs.add(config("EUR", "EUR-OIS", "EUR", &[]));
        configs.add(config("USD", "USD-OIS", "USD", &["EUR"]));

        let built = builder(configs)
            .build_all("USD", VersionCorrection::LATEST)
            .unwrap();
        assert_eq!(built.len(), 2);
        assert_eq!(built["EUR"].blocks.len(), 1);
        assert_eq!(built["USD"].blocks.len(), 2);
    }

    #[test]
    fn test_fan_out_continues_numbering() {
        let mut configs = InMemoryConfigSource::new();
        configs.add(config("EUR", "EUR-OIS", "EUR", &[]));
        configs.add(config("GBP", "GBP-OIS", "GBP", &[]));
        configs.add(config("USD", "USD-OIS", "USD", &["EUR", "GBP"]));

        let output = builder(configs)
            .build("USD", VersionCorrection::LATEST)
            .unwrap();

        let units = output.blocks.unit_map();
        assert_eq!(units["EUR-OIS"], BlockRange::new(0, 1));
        assert_eq!(units["GBP-OIS"], BlockRange::new(1, 1));
        assert_eq!(units["USD-OIS"], BlockRange::new(2, 1));
        assert_eq!(output.multicurve.discounting().len(), 3);
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut configs = InMemoryConfigSource::new();
        configs.add(config("A", "EUR-OIS", "EUR", &["B"]));
        configs.add(config("B", "GBP-OIS", "GBP", &["A"]));

        let err = builder(configs)
            .build("A", VersionCorrection::LATEST)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::cyclic_dependency(vec!["A".into(), "B".into(), "A".into()])
        );
    }

    #[test]
    fn test_missing_dependency_is_not_found() {
        let mut configs = InMemoryConfigSource::new();
        configs.add(config("USD", "USD-OIS", "USD", &["EUR"]));

        let err = builder(configs)
            .build("USD", VersionCorrection::LATEST)
            .unwrap_err();
        assert_eq!(err, BuildError::configuration_not_found("EUR"));
    }
}
