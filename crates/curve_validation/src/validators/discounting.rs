//! Discounting declaration validation.

use curve_core::config::{CurveGroupConfiguration, CurveTypeConfiguration, ItemKind};
use curve_core::types::Currency;

use crate::classify::{classify, FnResolver};
use crate::result::ValidationResult;

/// A discounting declaration and the curve it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountingReference {
    /// Curve carrying the declaration
    pub curve: String,
    /// Reference as written
    pub reference: String,
}

/// Classification of discounting references, keyed by normalised reference.
pub type DiscountingValidation = ValidationResult<String, Currency, DiscountingReference>;

fn normalise(reference: &str) -> String {
    reference.trim().to_uppercase()
}

/// Check every discounting declaration of a group.
///
/// References are compared after trimming and upper-casing. A reference
/// used by one curve validates when it parses as a currency and is
/// unsupported otherwise; a reference used by several curves is duplicated.
///
/// # Examples
///
/// ```
/// use curve_core::config::{CurveGroupConfiguration, CurveTypeConfiguration};
/// use curve_core::types::Currency;
/// use curve_validation::validate_discounting_types;
///
/// let group = CurveGroupConfiguration::new()
///     .with_curve("USD-OIS", vec![CurveTypeConfiguration::discounting("USD")])
///     .with_curve("BAD", vec![CurveTypeConfiguration::discounting("US-DOLLAR")]);
/// let result = validate_discounting_types(&group);
///
/// assert_eq!(result.validated()["USD"], Currency::USD);
/// assert_eq!(result.unsupported()["US-DOLLAR"].curve, "BAD");
/// ```
pub fn validate_discounting_types(group: &CurveGroupConfiguration) -> DiscountingValidation {
    let declarations: Vec<DiscountingReference> = group
        .types_for_curves()
        .flat_map(|(curve, types)| {
            types.iter().filter_map(move |t| match t {
                CurveTypeConfiguration::Discounting { reference } => Some(DiscountingReference {
                    curve: curve.to_string(),
                    reference: reference.clone(),
                }),
                _ => None,
            })
        })
        .collect();

    let resolver = FnResolver::new(
        |name: &String| {
            let mut users: Vec<DiscountingReference> = Vec::new();
            for declaration in &declarations {
                if normalise(&declaration.reference) == *name
                    && !users.iter().any(|u| u.curve == declaration.curve)
                {
                    users.push(declaration.clone());
                }
            }
            users
        },
        |declaration: DiscountingReference| match declaration.reference.parse::<Currency>() {
            Ok(currency) => Ok(currency),
            Err(_) => Err(declaration),
        },
    );
    classify(
        ItemKind::Currency,
        declarations.iter().map(|d| normalise(&d.reference)),
        &resolver,
    )
}
