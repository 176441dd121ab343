//! # curve_builder
//!
//! Multi-curve build engine for curve construction configurations.
//!
//! ## Architecture Position
//!
//! Layer 2 (Domain). Depends on `curve_core` (L1) for the data model and
//! sources, and on `curve_validation` (L2) to resolve configuration names.
//!
//! ## Modules
//!
//! - `dispatch`: Curve-type declarations to currencies and indices
//! - `accumulator`: Jacobian block assignment with exogenous merging
//! - `engine`: Single-configuration builds and parallel batches
//! - `chain`: Exogenous dependency chains of any depth
//!
//! ## Example
//!
//! ```rust
//! use curve_builder::{ChainedCurveBuilder, CurveBuildEngine};
//! use curve_core::config::{
//!     CurveConstructionConfiguration, CurveGroupConfiguration, CurveTypeConfiguration,
//! };
//! use curve_core::source::{
//!     InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource,
//!     MarketDataSnapshot, ResolutionContext,
//! };
//! use curve_core::types::VersionCorrection;
//!
//! let eur = CurveGroupConfiguration::new()
//!     .with_curve("EUR-OIS", vec![CurveTypeConfiguration::discounting("EUR")]);
//! let usd = CurveGroupConfiguration::new()
//!     .with_curve("USD-OIS", vec![CurveTypeConfiguration::discounting("USD")]);
//!
//! let mut configs = InMemoryConfigSource::new();
//! configs.add(CurveConstructionConfiguration::new("EUR", vec![eur]));
//! configs.add(CurveConstructionConfiguration::new("USD", vec![usd]).with_exogenous(["EUR"]));
//!
//! let snapshot = MarketDataSnapshot::new()
//!     .with_point("EUR-OIS", 0.02)
//!     .with_point("USD-OIS", 0.05);
//! let context = ResolutionContext::in_memory(
//!     configs,
//!     InMemorySecuritySource::new(),
//!     InMemoryConventionSource::new(),
//!     snapshot,
//! );
//!
//! let builder = ChainedCurveBuilder::new(CurveBuildEngine::new(context));
//! let output = builder.build("USD", VersionCorrection::LATEST).unwrap();
//! assert_eq!(output.blocks.next_free_index(), 2);
//! ```

pub mod accumulator;
pub mod chain;
pub mod dispatch;
pub mod engine;

mod error;

pub use accumulator::BlockAccumulator;
pub use chain::ChainedCurveBuilder;
pub use dispatch::{CurveAttachment, CurveTypeDispatcher};
pub use engine::{BuildOutput, CurveBuildEngine, CurveSelection, ExogenousBundles};
pub use error::BuildError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulator::*;
    pub use crate::chain::*;
    pub use crate::dispatch::*;
    pub use crate::engine::*;
    pub use crate::BuildError;
}
