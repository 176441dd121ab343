//! The unit stored in and returned by a configuration source.

use std::fmt;

use super::construction::CurveConstructionConfiguration;
use super::definition::CurveDefinition;
use super::exposure::ExposureFunctions;

/// Kind of a configuration item, used to report what a lookup expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// [`CurveConstructionConfiguration`]
    CurveConstruction,
    /// [`CurveDefinition`]
    CurveDefinition,
    /// [`ExposureFunctions`]
    ExposureFunctions,
    /// An exposure function produced by the factory
    ExposureFunction,
    /// A currency parsed from a discounting reference
    Currency,
    /// An ibor index security
    IborIndexSecurity,
    /// An overnight index security
    OvernightIndexSecurity,
    /// An ibor reference (convention and tenor)
    IborCurveInformation,
    /// An overnight reference (convention)
    OvernightConvention,
}

impl ItemKind {
    /// Display name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::CurveConstruction => "CurveConstructionConfiguration",
            ItemKind::CurveDefinition => "CurveDefinition",
            ItemKind::ExposureFunctions => "ExposureFunctions",
            ItemKind::ExposureFunction => "ExposureFunction",
            ItemKind::Currency => "Currency",
            ItemKind::IborIndexSecurity => "IborIndexSecurity",
            ItemKind::OvernightIndexSecurity => "OvernightIndexSecurity",
            ItemKind::IborCurveInformation => "IborCurveInformation",
            ItemKind::OvernightConvention => "OvernightConvention",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Any document a configuration source can hold.
///
/// Lookups by name return items of every kind; callers narrow to the kind
/// they expect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "item", rename_all = "snake_case")
)]
pub enum ConfigItem {
    /// A curve construction configuration
    CurveConstruction(CurveConstructionConfiguration),
    /// A curve definition
    CurveDefinition(CurveDefinition),
    /// A list of exposure functions
    ExposureFunctions(ExposureFunctions),
}

impl ConfigItem {
    /// Name the item is stored under.
    pub fn name(&self) -> &str {
        match self {
            ConfigItem::CurveConstruction(config) => &config.name,
            ConfigItem::CurveDefinition(definition) => definition.name(),
            ConfigItem::ExposureFunctions(functions) => &functions.name,
        }
    }

    /// Kind of the item.
    pub fn kind(&self) -> ItemKind {
        match self {
            ConfigItem::CurveConstruction(_) => ItemKind::CurveConstruction,
            ConfigItem::CurveDefinition(_) => ItemKind::CurveDefinition,
            ConfigItem::ExposureFunctions(_) => ItemKind::ExposureFunctions,
        }
    }

    /// Narrow to a construction configuration, handing the item back otherwise.
    pub fn into_curve_construction(self) -> Result<CurveConstructionConfiguration, ConfigItem> {
        match self {
            ConfigItem::CurveConstruction(config) => Ok(config),
            other => Err(other),
        }
    }

    /// Narrow to an exposure function list, handing the item back otherwise.
    pub fn into_exposure_functions(self) -> Result<ExposureFunctions, ConfigItem> {
        match self {
            ConfigItem::ExposureFunctions(functions) => Ok(functions),
            other => Err(other),
        }
    }

    /// Narrow to a curve definition, handing the item back otherwise.
    pub fn into_curve_definition(self) -> Result<CurveDefinition, ConfigItem> {
        match self {
            ConfigItem::CurveDefinition(definition) => Ok(definition),
            other => Err(other),
        }
    }
}

impl From<CurveConstructionConfiguration> for ConfigItem {
    fn from(config: CurveConstructionConfiguration) -> Self {
        ConfigItem::CurveConstruction(config)
    }
}

impl From<CurveDefinition> for ConfigItem {
    fn from(definition: CurveDefinition) -> Self {
        ConfigItem::CurveDefinition(definition)
    }
}

impl From<ExposureFunctions> for ConfigItem {
    fn from(functions: ExposureFunctions) -> Self {
        ConfigItem::ExposureFunctions(functions)
    }
}
