//! Index security validation for forward declarations.

use curve_core::config::{CurveGroupConfiguration, CurveTypeConfiguration, ItemKind};
use curve_core::reference::{IborIndexSecurity, OvernightIndexSecurity, Security};
use curve_core::source::SecuritySource;
use curve_core::types::{ExternalId, VersionCorrection};

use crate::classify::{classify, FnResolver};
use crate::result::ValidationResult;

/// Classification of ibor declaration identifiers against the security source.
pub type IborSecurityValidation = ValidationResult<ExternalId, IborIndexSecurity, Security>;

/// Classification of overnight declaration identifiers against the security source.
pub type OvernightSecurityValidation = ValidationResult<ExternalId, OvernightIndexSecurity, Security>;

/// Resolve the identifier of every ibor declaration in a group to a security.
///
/// A security of another kind is kept whole in `unsupported`.
pub fn validate_ibor_securities(
    group: &CurveGroupConfiguration,
    as_of: VersionCorrection,
    source: &dyn SecuritySource,
) -> IborSecurityValidation {
    let ids = group.types_for_curves().flat_map(|(_, types)| {
        types.iter().filter_map(|t| match t {
            CurveTypeConfiguration::Ibor { convention, .. } => Some(convention.clone()),
            _ => None,
        })
    });
    let resolver = FnResolver::new(
        |id: &ExternalId| source.get(id, as_of),
        |security: Security| match security {
            Security::IborIndex(ibor) => Ok(ibor),
            other => Err(other),
        },
    );
    classify(ItemKind::IborIndexSecurity, ids, &resolver)
}

/// Resolve the identifier of every overnight declaration in a group to a security.
pub fn validate_overnight_securities(
    group: &CurveGroupConfiguration,
    as_of: VersionCorrection,
    source: &dyn SecuritySource,
) -> OvernightSecurityValidation {
    let ids = group.types_for_curves().flat_map(|(_, types)| {
        types.iter().filter_map(|t| match t {
            CurveTypeConfiguration::Overnight { convention } => Some(convention.clone()),
            _ => None,
        })
    });
    let resolver = FnResolver::new(
        |id: &ExternalId| source.get(id, as_of),
        |security: Security| match security {
            Security::OvernightIndex(overnight) => Ok(overnight),
            other => Err(other),
        },
    );
    classify(ItemKind::OvernightIndexSecurity, ids, &resolver)
}
