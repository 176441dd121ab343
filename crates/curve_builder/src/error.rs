//! Build error types.
//!
//! Every variant is fatal: the current build stops and nothing partial is
//! returned. Each variant names the configuration, curve or identifier at
//! fault.

use curve_core::bundle::{AttachmentConflict, BlockRange};
use curve_core::types::ExternalId;
use thiserror::Error;

/// Errors that abort a curve build.
///
/// # Variants
///
/// - `ConfigurationNotFound`: No construction configuration under the name
/// - `AmbiguousConfiguration`: Several documents under the name
/// - `UnsupportedConfigurationReference`: Discounting reference is not a currency
/// - `IndexResolutionFailure`: Neither security nor convention resolves an index
/// - `MissingMarketData`: No quote for a curve
/// - `BlockCollision`: Two curves claim overlapping Jacobian columns
/// - `AttachmentConflict`: Two curves claim one currency or index
/// - `MissingExogenousBundle`: A dependency was not supplied
/// - `CyclicDependency`: Exogenous links loop back
///
/// # Examples
///
/// ```
/// use curve_builder::BuildError;
///
/// let err = BuildError::missing_market_data("USD-OIS");
/// assert!(err.to_string().contains("USD-OIS"));
/// assert!(err.is_missing_market_data());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// No construction configuration is stored under the name.
    #[error("Curve construction configuration not found: {name}")]
    ConfigurationNotFound {
        /// Requested configuration name
        name: String,
    },

    /// More than one document is stored under the name.
    #[error("Curve construction configuration {name} is ambiguous: {matches} matches")]
    AmbiguousConfiguration {
        /// Requested configuration name
        name: String,
        /// Number of documents found
        matches: usize,
    },

    /// A discounting reference does not parse as a currency.
    #[error("Unsupported discounting reference: {reference}")]
    UnsupportedConfigurationReference {
        /// The reference as declared
        reference: String,
    },

    /// No index could be built for a convention identifier.
    #[error("Could not resolve index for {id}")]
    IndexResolutionFailure {
        /// Identifier that failed to resolve
        id: ExternalId,
    },

    /// No market quote is available for a curve.
    #[error("Could not get market value for curve {curve}")]
    MissingMarketData {
        /// Curve name
        curve: String,
    },

    /// A curve's columns collide with columns already assigned.
    #[error("Block collision for curve {curve}: {attempted} overlaps {existing}")]
    BlockCollision {
        /// Curve whose range could not be placed
        curve: String,
        /// Range already assigned
        existing: BlockRange,
        /// Range that was being placed
        attempted: BlockRange,
    },

    /// A currency or index is already attached to another curve.
    #[error("Curve {attempted} cannot be attached to {attachment}: already attached to {existing}")]
    AttachmentConflict {
        /// Currency code or index
        attachment: String,
        /// Curve already attached
        existing: String,
        /// Curve whose attachment was refused
        attempted: String,
    },

    /// An exogenous dependency was not supplied to the build.
    #[error("Configuration {configuration} needs exogenous bundle {exogenous}, which was not supplied")]
    MissingExogenousBundle {
        /// Configuration being built
        configuration: String,
        /// Missing dependency
        exogenous: String,
    },

    /// Exogenous links form a cycle.
    #[error("Cyclic exogenous dependency: {}", chain.join(" -> "))]
    CyclicDependency {
        /// Configuration names along the cycle, first name repeated at the end
        chain: Vec<String>,
    },
}

impl BuildError {
    /// Create a configuration not found error.
    pub fn configuration_not_found(name: impl Into<String>) -> Self {
        Self::ConfigurationNotFound { name: name.into() }
    }

    /// Create an ambiguous configuration error.
    pub fn ambiguous_configuration(name: impl Into<String>, matches: usize) -> Self {
        Self::AmbiguousConfiguration {
            name: name.into(),
            matches,
        }
    }

    /// Create an unsupported reference error.
    pub fn unsupported_reference(reference: impl Into<String>) -> Self {
        Self::UnsupportedConfigurationReference {
            reference: reference.into(),
        }
    }

    /// Create an index resolution failure.
    pub fn index_resolution_failure(id: ExternalId) -> Self {
        Self::IndexResolutionFailure { id }
    }

    /// Create a missing market data error.
    pub fn missing_market_data(curve: impl Into<String>) -> Self {
        Self::MissingMarketData {
            curve: curve.into(),
        }
    }

    /// Create a block collision error.
    pub fn block_collision(
        curve: impl Into<String>,
        existing: BlockRange,
        attempted: BlockRange,
    ) -> Self {
        Self::BlockCollision {
            curve: curve.into(),
            existing,
            attempted,
        }
    }

    /// Create an attachment conflict error.
    pub fn attachment_conflict(
        attachment: impl Into<String>,
        existing: impl Into<String>,
        attempted: impl Into<String>,
    ) -> Self {
        Self::AttachmentConflict {
            attachment: attachment.into(),
            existing: existing.into(),
            attempted: attempted.into(),
        }
    }

    /// Create a missing exogenous bundle error.
    pub fn missing_exogenous_bundle(
        configuration: impl Into<String>,
        exogenous: impl Into<String>,
    ) -> Self {
        Self::MissingExogenousBundle {
            configuration: configuration.into(),
            exogenous: exogenous.into(),
        }
    }

    /// Create a cyclic dependency error.
    pub fn cyclic_dependency(chain: Vec<String>) -> Self {
        Self::CyclicDependency { chain }
    }

    /// Check if this is a configuration not found error.
    pub fn is_configuration_not_found(&self) -> bool {
        matches!(self, Self::ConfigurationNotFound { .. })
    }

    /// Check if this is an ambiguous configuration error.
    pub fn is_ambiguous_configuration(&self) -> bool {
        matches!(self, Self::AmbiguousConfiguration { .. })
    }

    /// Check if this is an unsupported reference error.
    pub fn is_unsupported_reference(&self) -> bool {
        matches!(self, Self::UnsupportedConfigurationReference { .. })
    }

    /// Check if this is an index resolution failure.
    pub fn is_index_resolution_failure(&self) -> bool {
        matches!(self, Self::IndexResolutionFailure { .. })
    }

    /// Check if this is a missing market data error.
    pub fn is_missing_market_data(&self) -> bool {
        matches!(self, Self::MissingMarketData { .. })
    }

    /// Check if this is a block collision.
    ///
    /// A collision means a supplied bundle was malformed, not that the
    /// configuration is wrong.
    pub fn is_block_collision(&self) -> bool {
        matches!(self, Self::BlockCollision { .. })
    }

    /// Check if this is an attachment conflict.
    pub fn is_attachment_conflict(&self) -> bool {
        matches!(self, Self::AttachmentConflict { .. })
    }

    /// Check if this is a missing exogenous bundle error.
    pub fn is_missing_exogenous_bundle(&self) -> bool {
        matches!(self, Self::MissingExogenousBundle { .. })
    }

    /// Check if this is a cyclic dependency error.
    pub fn is_cyclic_dependency(&self) -> bool {
        matches!(self, Self::CyclicDependency { .. })
    }
}

impl From<AttachmentConflict> for BuildError {
    fn from(conflict: AttachmentConflict) -> Self {
        Self::AttachmentConflict {
            attachment: conflict.attachment,
            existing: conflict.existing,
            attempted: conflict.attempted,
        }
    }
}
