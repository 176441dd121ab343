//! Curve construction configurations and curve groups.

use super::curve_type::CurveTypeConfiguration;

/// One curve of a group together with its type declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveGroupEntry {
    /// Curve name
    pub curve: String,
    /// Declarations the curve is attached under
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<CurveTypeConfiguration>,
}

/// A group of curves built together.
///
/// Curves keep their declaration order, which is the order in which they
/// receive Jacobian blocks. Adding a curve name twice replaces its types
/// in place.
///
/// # Examples
///
/// ```
/// use curve_core::config::{CurveGroupConfiguration, CurveTypeConfiguration};
///
/// let group = CurveGroupConfiguration::new()
///     .with_curve("USD-OIS", vec![CurveTypeConfiguration::discounting("USD")])
///     .with_curve("USD-3M", vec![]);
///
/// assert_eq!(group.curve_names().collect::<Vec<_>>(), vec!["USD-OIS", "USD-3M"]);
/// assert_eq!(group.types_for("USD-OIS").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveGroupConfiguration {
    #[cfg_attr(feature = "serde", serde(default))]
    curves: Vec<CurveGroupEntry>,
}

impl CurveGroupConfiguration {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a curve and its type declarations.
    pub fn with_curve(
        mut self,
        curve: impl Into<String>,
        types: Vec<CurveTypeConfiguration>,
    ) -> Self {
        let curve = curve.into();
        match self.curves.iter_mut().find(|entry| entry.curve == curve) {
            Some(entry) => entry.types = types,
            None => self.curves.push(CurveGroupEntry { curve, types }),
        }
        self
    }

    /// Curves with their declarations, in declaration order.
    pub fn types_for_curves(
        &self,
    ) -> impl Iterator<Item = (&str, &[CurveTypeConfiguration])> + '_ {
        self.curves
            .iter()
            .map(|entry| (entry.curve.as_str(), entry.types.as_slice()))
    }

    /// Curve names in declaration order.
    pub fn curve_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.curves.iter().map(|entry| entry.curve.as_str())
    }

    /// Declarations for a single curve.
    pub fn types_for(&self, curve: &str) -> Option<&[CurveTypeConfiguration]> {
        self.curves
            .iter()
            .find(|entry| entry.curve == curve)
            .map(|entry| entry.types.as_slice())
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the group has no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Named recipe for a multicurve bundle.
///
/// `exogenous_configurations` names other configurations whose bundles are
/// merged in before this one is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveConstructionConfiguration {
    /// Configuration name
    pub name: String,
    /// Groups, built in order
    #[cfg_attr(feature = "serde", serde(default))]
    pub curve_groups: Vec<CurveGroupConfiguration>,
    /// Configurations this one depends on
    #[cfg_attr(feature = "serde", serde(default))]
    pub exogenous_configurations: Vec<String>,
}

impl CurveConstructionConfiguration {
    /// Create a configuration with no exogenous dependencies.
    pub fn new(name: impl Into<String>, curve_groups: Vec<CurveGroupConfiguration>) -> Self {
        Self {
            name: name.into(),
            curve_groups,
            exogenous_configurations: Vec::new(),
        }
    }

    /// Set the exogenous configuration names.
    pub fn with_exogenous<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exogenous_configurations = names.into_iter().map(Into::into).collect();
        self
    }

    /// Every curve name in the configuration, in declaration order.
    ///
    /// A curve named in several groups is listed once per group.
    pub fn curve_names(&self) -> Vec<String> {
        self.curve_groups
            .iter()
            .flat_map(|group| group.curve_names().map(str::to_string))
            .collect()
    }

    /// Every `(curve, declaration)` pair, in declaration order.
    pub fn curve_types(&self) -> impl Iterator<Item = (&str, &CurveTypeConfiguration)> + '_ {
        self.curve_groups.iter().flat_map(|group| {
            group
                .types_for_curves()
                .flat_map(|(curve, types)| types.iter().map(move |t| (curve, t)))
        })
    }
}
