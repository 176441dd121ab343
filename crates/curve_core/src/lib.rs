//! # curve_core: Data Model for Multi-Curve Construction
//!
//! ## Layer 1 (Foundation) Role
//!
//! curve_core is the bottom layer of the curve workspace, providing:
//! - Identifiers, currencies, tenors and version-correction (`types`)
//! - The configuration graph: construction configurations, curve groups,
//!   curve type declarations, curve definitions, exposure functions (`config`)
//! - Reference data: index securities, conventions and indices (`reference`)
//! - Calibrated curves and FX rates (`market_data`)
//! - Build results: building blocks and multicurve bundles (`bundle`)
//! - Read-only sources and their in-memory implementations (`source`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_core::config::{CurveConstructionConfiguration, CurveGroupConfiguration, CurveTypeConfiguration};
//! use curve_core::source::{ConfigSource, InMemoryConfigSource};
//! use curve_core::types::VersionCorrection;
//!
//! let group = CurveGroupConfiguration::new()
//!     .with_curve("USD-OIS", vec![CurveTypeConfiguration::discounting("USD")]);
//! let config = CurveConstructionConfiguration::new("USD-1", vec![group]);
//!
//! let mut source = InMemoryConfigSource::new();
//! source.add(config);
//!
//! let items = source.get("USD-1", VersionCorrection::LATEST);
//! assert_eq!(items.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for configurations, reference data and identifiers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bundle;
pub mod config;
pub mod market_data;
pub mod reference;
pub mod source;
pub mod types;
