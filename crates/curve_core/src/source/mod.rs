//! Collaborator sources the validators and the build engine read from.
//!
//! - [`traits`]: Configuration, security, convention and market data sources
//! - [`memory`]: Versioned in-memory implementations and [`ResolutionContext`]

pub mod memory;
pub mod traits;

pub use memory::{
    InMemoryConfigSource, InMemoryConventionSource, InMemorySecuritySource, MarketDataSnapshot,
    ResolutionContext, VersionedStore,
};
pub use traits::{ConfigSource, ConventionSource, MarketDataSource, SecuritySource};
