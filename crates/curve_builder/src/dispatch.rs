//! Curve-type dispatch: what a curve is attached to in a multicurve bundle.
//!
//! A discounting declaration attaches a curve to a currency. Ibor and
//! overnight declarations attach it to an index, resolved in two steps:
//!
//! 1. A security stored under the declaration's identifier. Its own
//!    convention identifier must then resolve to a convention of the same
//!    kind, and the security's tenor is used.
//! 2. Otherwise a convention stored under the declaration's identifier,
//!    with the declaration's tenor.
//!
//! A security or convention of the wrong kind counts as absent.

use std::fmt;

use curve_core::config::CurveTypeConfiguration;
use curve_core::reference::{IborIndex, Index, OvernightIndex};
use curve_core::source::{ConventionSource, SecuritySource};
use curve_core::types::{Currency, ExternalId, Tenor, VersionCorrection};
use tracing::info;

use crate::error::BuildError;

/// Where a curve is attached in a multicurve bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveAttachment {
    /// Discount curve of a currency
    Discounting(Currency),
    /// Forward curve of an index
    Forward(Index),
}

impl fmt::Display for CurveAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discounting(currency) => write!(f, "discounting {}", currency),
            Self::Forward(index) => write!(f, "forward {}", index),
        }
    }
}

/// Resolves declarations against reference data.
#[derive(Clone, Copy)]
pub struct CurveTypeDispatcher<'a> {
    securities: &'a dyn SecuritySource,
    conventions: &'a dyn ConventionSource,
    as_of: VersionCorrection,
}

impl<'a> CurveTypeDispatcher<'a> {
    /// Create a dispatcher reading both sources at `as_of`.
    pub fn new(
        securities: &'a dyn SecuritySource,
        conventions: &'a dyn ConventionSource,
        as_of: VersionCorrection,
    ) -> Self {
        Self {
            securities,
            conventions,
            as_of,
        }
    }

    /// Resolve one declaration.
    pub fn resolve(
        &self,
        declaration: &CurveTypeConfiguration,
    ) -> Result<CurveAttachment, BuildError> {
        match declaration {
            CurveTypeConfiguration::Discounting { reference } => reference
                .trim()
                .parse::<Currency>()
                .map(CurveAttachment::Discounting)
                .map_err(|_| BuildError::unsupported_reference(reference.clone())),
            CurveTypeConfiguration::Ibor { convention, tenor } => self
                .ibor_index(convention, *tenor)
                .map(|index| CurveAttachment::Forward(index.into())),
            CurveTypeConfiguration::Overnight { convention } => self
                .overnight_index(convention)
                .map(|index| CurveAttachment::Forward(index.into())),
        }
    }

    /// Resolve an ibor index.
    pub fn ibor_index(&self, id: &ExternalId, tenor: Tenor) -> Result<IborIndex, BuildError> {
        let security = self
            .securities
            .get(id, self.as_of)
            .into_iter()
            .find_map(|security| security.as_ibor_index().cloned());

        if let Some(security) = security {
            let convention = self
                .conventions
                .get(&security.convention_id, self.as_of)
                .into_iter()
                .find_map(|convention| convention.as_ibor_index().cloned())
                .ok_or_else(|| {
                    BuildError::index_resolution_failure(security.convention_id.clone())
                })?;
            return Ok(IborIndex::from_convention(&convention, security.tenor));
        }

        let convention = self
            .conventions
            .get(id, self.as_of)
            .into_iter()
            .find_map(|convention| convention.as_ibor_index().cloned())
            .ok_or_else(|| BuildError::index_resolution_failure(id.clone()))?;
        info!(id = %id, "no ibor index security, using convention");
        Ok(IborIndex::from_convention(&convention, tenor))
    }

    /// Resolve an overnight index.
    pub fn overnight_index(&self, id: &ExternalId) -> Result<OvernightIndex, BuildError> {
        let security = self
            .securities
            .get(id, self.as_of)
            .into_iter()
            .find_map(|security| security.as_overnight_index().cloned());

        let convention_id = match &security {
            Some(security) => &security.convention_id,
            None => id,
        };
        let convention = self
            .conventions
            .get(convention_id, self.as_of)
            .into_iter()
            .find_map(|convention| convention.as_overnight_index().cloned())
            .ok_or_else(|| BuildError::index_resolution_failure(convention_id.clone()))?;
        if security.is_none() {
            info!(id = %id, "no overnight index security, using convention");
        }
        Ok(OvernightIndex::from_convention(&convention))
    }
}
