//! Curve construction configuration graph.
//!
//! - [`construction`]: Construction configurations and curve groups
//! - [`curve_type`]: Discounting / ibor / overnight declarations
//! - [`definition`]: Curve definitions resolved by curve name
//! - [`exposure`]: Exposure functions and their factory
//! - [`item`]: Tagged union of everything a configuration source stores

pub mod construction;
pub mod curve_type;
pub mod definition;
pub mod exposure;
pub mod item;

pub use construction::{CurveConstructionConfiguration, CurveGroupConfiguration, CurveGroupEntry};
pub use curve_type::{CurveTypeConfiguration, IborCurveInformation};
pub use definition::CurveDefinition;
pub use exposure::{
    ExposureFunction, ExposureFunctionFactory, ExposureFunctions, ExposureSubject,
    UnknownExposureFunction,
};
pub use item::{ConfigItem, ItemKind};
