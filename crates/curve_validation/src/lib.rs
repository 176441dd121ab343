//! # curve_validation: Reference Classification for Curve Configurations
//!
//! ## Layer 2 (Domain) Role
//!
//! Classifies every name a configuration refers to as validated, missing,
//! duplicated or unsupported. One generic engine ([`classify`]) does the
//! work; each validator only supplies a lookup and a narrowing step.
//!
//! - [`result`]: The [`ValidationResult`] container
//! - [`classify`]: The classification rule and the [`Resolver`] strategy
//! - [`validators`]: Curve group, exogenous configuration, exposure function,
//!   discounting, index security and forward uniqueness validators
//! - [`report`]: All validators for one configuration
//!
//! Classification outcomes are data, not errors: nothing here returns
//! `Result`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_validation::validate_exposure_functions;
//!
//! let result = validate_exposure_functions(["Currency", "Region", "Counterparty"]);
//! assert_eq!(result.validated().len(), 2);
//! assert_eq!(result.missing().len(), 1);
//! ```

#![deny(missing_docs)]

pub mod classify;
pub mod report;
pub mod result;
pub mod validators;

pub use classify::{classify, FnResolver, Resolver};
pub use report::{validate_configuration, ConfigurationReport, GroupReport};
pub use result::ValidationResult;
pub use validators::*;
