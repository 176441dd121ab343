//! Typed validator specializations.
//!
//! - [`configuration`]: Curve definitions, construction configurations, exposure function lists
//! - [`exposure`]: Exposure function names
//! - [`discounting`]: Discounting references
//! - [`security`]: Ibor / overnight index securities
//! - [`curve_types`]: Forward reference uniqueness across exogenous chains

pub mod configuration;
pub mod curve_types;
pub mod discounting;
pub mod exposure;
pub mod security;

pub use configuration::{
    validate_construction_configurations, validate_curve_group,
    validate_exogenous_configurations, validate_exposure_function_configurations,
    ConstructionValidation, CurveDefinitionValidation, ExposureFunctionsValidation,
};
pub use curve_types::{
    reachable_configurations, validate_ibor_curve_types, validate_overnight_curve_types,
    IborCurveTypeValidation, OvernightCurveTypeValidation,
};
pub use discounting::{validate_discounting_types, DiscountingReference, DiscountingValidation};
pub use exposure::{validate_exposure_functions, ExposureFunctionValidation};
pub use security::{
    validate_ibor_securities, validate_overnight_securities, IborSecurityValidation,
    OvernightSecurityValidation,
};
