//! Identifier, currency, tenor and versioning types.
//!
//! This module provides:
//! - `currency`: Three-letter currency codes
//! - `tenor`: Money-market index tenors
//! - `calendar`: Day count and business day conventions
//! - `id`: Scheme-qualified external identifiers
//! - `version`: Point-in-time visibility for source lookups
//! - `error`: Parse errors for the above
//!
//! # Re-exports
//!
//! - [`Currency`], [`Tenor`], [`ExternalId`], [`VersionCorrection`]
//! - [`DayCount`], [`BusinessDayConvention`]
//! - [`CurrencyError`], [`TenorError`], [`IdentifierError`]

pub mod calendar;
pub mod currency;
pub mod error;
pub mod id;
pub mod tenor;
pub mod version;

pub use calendar::{BusinessDayConvention, DayCount};
pub use currency::Currency;
pub use error::{CurrencyError, IdentifierError, TenorError};
pub use id::ExternalId;
pub use tenor::Tenor;
pub use version::VersionCorrection;
