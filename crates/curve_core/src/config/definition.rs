//! Curve definitions referenced by curve groups.

use crate::types::Tenor;

/// Shape of a curve to be calibrated.
///
/// Definitions are resolved by curve name when a group is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum CurveDefinition {
    /// A curve calibrated to a single quoted level.
    Constant {
        /// Curve name
        name: String,
    },
    /// A curve interpolated between quoted nodes.
    Interpolated {
        /// Curve name
        name: String,
        /// Interpolator name, e.g. `Linear`
        interpolator: String,
        /// Node tenors
        #[cfg_attr(feature = "serde", serde(default))]
        nodes: Vec<Tenor>,
    },
}

impl CurveDefinition {
    /// Constant definition.
    pub fn constant(name: impl Into<String>) -> Self {
        CurveDefinition::Constant { name: name.into() }
    }

    /// The curve name.
    pub fn name(&self) -> &str {
        match self {
            CurveDefinition::Constant { name } | CurveDefinition::Interpolated { name, .. } => name,
        }
    }

    /// Number of calibration parameters the definition implies.
    pub fn parameter_count(&self) -> usize {
        match self {
            CurveDefinition::Constant { .. } => 1,
            CurveDefinition::Interpolated { nodes, .. } => nodes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_count() {
        assert_eq!(CurveDefinition::constant("USD-OIS").parameter_count(), 1);
        let interpolated = CurveDefinition::Interpolated {
            name: "USD-3M".to_string(),
            interpolator: "Linear".to_string(),
            nodes: vec![Tenor::ThreeMonth, Tenor::SixMonth, Tenor::TwelveMonth],
        };
        assert_eq!(interpolated.name(), "USD-3M");
        assert_eq!(interpolated.parameter_count(), 3);
    }
}
