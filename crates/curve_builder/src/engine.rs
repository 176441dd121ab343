//! Curve build engine.
//!
//! Turns a named construction configuration into a multicurve bundle and
//! the matching building-block bundle:
//!
//! 1. Resolve the name to exactly one construction configuration.
//! 2. Merge the bundles of its exogenous configurations, supplied by the
//!    caller and never rebuilt here. A currency or index attached to two
//!    different curves fails the build.
//! 3. For every curve, in group then declaration order: read its quote,
//!    build a constant curve, place its Jacobian block and attach it under
//!    every declared currency or index.
//!
//! Any failure aborts the build; no partial output is returned.

use std::collections::BTreeMap;

use curve_core::bundle::{CurveBuildingBlockBundle, JacobianMatrix, MulticurveBundle};
use curve_core::config::CurveConstructionConfiguration;
use curve_core::market_data::ConstantCurve;
use curve_core::source::ResolutionContext;
use curve_core::types::VersionCorrection;
use curve_validation::{validate_construction_configurations, validate_curve_group};
use tracing::{debug, info, warn};

use crate::accumulator::BlockAccumulator;
use crate::dispatch::{CurveAttachment, CurveTypeDispatcher};
use crate::error::BuildError;

/// Previously built outputs, keyed by configuration name.
pub type ExogenousBundles = BTreeMap<String, BuildOutput>;

/// Result of one build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutput {
    /// Configuration that was built
    pub configuration: String,
    /// Curves with their currency and index attachments
    pub multicurve: MulticurveBundle,
    /// Jacobian block bookkeeping
    pub blocks: CurveBuildingBlockBundle,
}

/// Requested curves split into those built and those absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSelection {
    /// Requested curves that were built
    pub present: BTreeMap<String, ConstantCurve<f64>>,
    /// Requested names with no curve
    pub absent: Vec<String>,
}

impl BuildOutput {
    /// Pick the requested curves.
    ///
    /// An absent name is reported, not an error.
    pub fn select<S: AsRef<str>>(&self, requested: &[S]) -> CurveSelection {
        let mut present = BTreeMap::new();
        let mut absent = Vec::new();
        for name in requested.iter().map(AsRef::as_ref) {
            match self.multicurve.curve(name) {
                Some(curve) => {
                    present.insert(name.to_string(), curve.clone());
                }
                None => {
                    warn!(
                        configuration = %self.configuration,
                        curve = name,
                        "requested curve was not built"
                    );
                    absent.push(name.to_string());
                }
            }
        }
        CurveSelection { present, absent }
    }
}

/// Builds construction configurations against a set of sources.
#[derive(Debug, Clone)]
pub struct CurveBuildEngine {
    context: ResolutionContext,
}

impl CurveBuildEngine {
    /// Create an engine over the given sources.
    pub fn new(context: ResolutionContext) -> Self {
        Self { context }
    }

    /// The sources this engine reads.
    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Resolve a name to its construction configuration.
    ///
    /// # Errors
    ///
    /// - `AmbiguousConfiguration` when several documents share the name
    /// - `ConfigurationNotFound` when nothing, or something other than a
    ///   construction configuration, is stored under the name
    pub fn resolve_configuration(
        &self,
        name: &str,
        as_of: VersionCorrection,
    ) -> Result<CurveConstructionConfiguration, BuildError> {
        let configs = self.context.configs.as_ref();
        let result = validate_construction_configurations([name], as_of, configs);
        if let Some(config) = result.validated().get(name) {
            return Ok(config.clone());
        }
        if result.duplicated().contains(name) {
            let matches = configs.get(name, as_of).len();
            return Err(BuildError::ambiguous_configuration(name, matches));
        }
        Err(BuildError::configuration_not_found(name))
    }

    /// Curve names of a configuration, in declaration order.
    pub fn curve_names(
        &self,
        name: &str,
        as_of: VersionCorrection,
    ) -> Result<Vec<String>, BuildError> {
        Ok(self.resolve_configuration(name, as_of)?.curve_names())
    }

    /// Build a configuration by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_builder::{CurveBuildEngine, ExogenousBundles};
    /// use curve_core::config::{
    ///     CurveConstructionConfiguration, CurveGroupConfiguration, CurveTypeConfiguration,
    /// };
    /// use curve_core::source::{
    ///     InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource,
    ///     MarketDataSnapshot, ResolutionContext,
    /// };
    /// use curve_core::types::{Currency, VersionCorrection};
    ///
    /// let group = CurveGroupConfiguration::new()
    ///     .with_curve("USD-OIS", vec![CurveTypeConfiguration::discounting("USD")]);
    /// let mut configs = InMemoryConfigSource::new();
    /// configs.add(CurveConstructionConfiguration::new("USD", vec![group]));
    ///
    /// let context = ResolutionContext::in_memory(
    ///     configs,
    ///     InMemorySecuritySource::new(),
    ///     InMemoryConventionSource::new(),
    ///     MarketDataSnapshot::new().with_point("USD-OIS", 0.05),
    /// );
    /// let engine = CurveBuildEngine::new(context);
    /// let output = engine
    ///     .build("USD", VersionCorrection::LATEST, &ExogenousBundles::new())
    ///     .unwrap();
    ///
    /// assert!(output.multicurve.discount_curve(Currency::USD).is_some());
    /// assert_eq!(output.blocks.len(), 1);
    /// ```
    pub fn build(
        &self,
        name: &str,
        as_of: VersionCorrection,
        exogenous: &ExogenousBundles,
    ) -> Result<BuildOutput, BuildError> {
        let config = self.resolve_configuration(name, as_of)?;
        self.build_configuration(&config, as_of, exogenous)
    }

    /// Build an already resolved configuration.
    pub fn build_configuration(
        &self,
        config: &CurveConstructionConfiguration,
        as_of: VersionCorrection,
        exogenous: &ExogenousBundles,
    ) -> Result<BuildOutput, BuildError> {
        self.build_extending(config, as_of, exogenous, None)
    }

    /// Build a configuration on top of an earlier output.
    ///
    /// The blocks and curves of `baseline` are merged before the exogenous
    /// bundles, so new blocks are numbered after every column it holds.
    /// Exogenous bundles must agree with the baseline on shared units.
    pub fn build_extending(
        &self,
        config: &CurveConstructionConfiguration,
        as_of: VersionCorrection,
        exogenous: &ExogenousBundles,
        baseline: Option<&BuildOutput>,
    ) -> Result<BuildOutput, BuildError> {
        let mut blocks = BlockAccumulator::new();
        let mut multicurve = MulticurveBundle::new();

        if let Some(base) = baseline {
            blocks.merge_exogenous(&base.blocks)?;
            multicurve.merge(&base.multicurve)?;
        }
        for dependency in &config.exogenous_configurations {
            let supplied = exogenous
                .get(dependency)
                .ok_or_else(|| BuildError::missing_exogenous_bundle(&config.name, dependency))?;
            blocks.merge_exogenous(&supplied.blocks)?;
            multicurve.merge(&supplied.multicurve)?;
        }
        debug!(
            configuration = %config.name,
            merged = blocks.unit_map().len(),
            next_index = blocks.next_index(),
            "merged exogenous blocks"
        );

        let dispatcher = CurveTypeDispatcher::new(
            self.context.securities.as_ref(),
            self.context.conventions.as_ref(),
            as_of,
        );

        for group in &config.curve_groups {
            let definitions = validate_curve_group(group, as_of, self.context.configs.as_ref());
            if !definitions.is_valid() {
                warn!(
                    configuration = %config.name,
                    missing = definitions.missing().len(),
                    duplicated = definitions.duplicated().len(),
                    unsupported = definitions.unsupported().len(),
                    "curve definitions did not all validate"
                );
            }

            for (curve_name, types) in group.types_for_curves() {
                let rate = self
                    .context
                    .market_data
                    .data_point(curve_name)
                    .ok_or_else(|| BuildError::missing_market_data(curve_name))?;
                let curve = ConstantCurve::new(curve_name, rate);
                let size = curve.parameter_count();
                blocks.append(curve_name, size, JacobianMatrix::identity(size))?;
                multicurve.add_curve(curve);

                for declaration in types {
                    match dispatcher.resolve(declaration)? {
                        CurveAttachment::Discounting(currency) => {
                            multicurve.set_discount_curve(currency, curve_name)?;
                        }
                        CurveAttachment::Forward(index) => {
                            multicurve.set_forward_curve(index, curve_name)?;
                        }
                    }
                }
            }
        }

        let blocks = blocks.finish();
        info!(
            configuration = %config.name,
            curves = multicurve.len(),
            blocks = blocks.len(),
            "built curve configuration"
        );
        Ok(BuildOutput {
            configuration: config.name.clone(),
            multicurve,
            blocks,
        })
    }

    /// Build several configurations, in parallel.
    ///
    /// Results are returned in the order of `names`; one failure does not
    /// stop the other builds.
    #[cfg(feature = "parallel")]
    pub fn build_batch(
        &self,
        names: &[String],
        as_of: VersionCorrection,
        exogenous: &ExogenousBundles,
    ) -> Vec<Result<BuildOutput, BuildError>> {
        use rayon::prelude::*;

        names
            .par_iter()
            .map(|name| self.build(name, as_of, exogenous))
            .collect()
    }

    /// Build several configurations, sequentially.
    #[cfg(not(feature = "parallel"))]
    pub fn build_batch(
        &self,
        names: &[String],
        as_of: VersionCorrection,
        exogenous: &ExogenousBundles,
    ) -> Vec<Result<BuildOutput, BuildError>> {
        names
            .iter()
            .map(|name| self.build(name, as_of, exogenous))
            .collect()
    }
}
