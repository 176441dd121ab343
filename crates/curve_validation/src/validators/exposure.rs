//! Exposure function name validation.

use curve_core::config::{ExposureFunction, ExposureFunctionFactory, ItemKind};

use crate::classify::{classify, FnResolver};
use crate::result::ValidationResult;

/// Classification of exposure function names.
pub type ExposureFunctionValidation = ValidationResult<String, ExposureFunction, ExposureFunction>;

/// Resolve exposure function names through the factory.
///
/// A name the factory does not know is missing.
///
/// ```
/// use curve_validation::validate_exposure_functions;
///
/// let result = validate_exposure_functions(["Currency", "Security Type", "Trade Date"]);
/// assert_eq!(result.validated().len(), 2);
/// assert!(result.missing().contains("Trade Date"));
/// ```
pub fn validate_exposure_functions<I, S>(names: I) -> ExposureFunctionValidation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let resolver = FnResolver::new(
        |name: &String| {
            ExposureFunctionFactory::create(name)
                .into_iter()
                .collect::<Vec<_>>()
        },
        Ok::<ExposureFunction, ExposureFunction>,
    );
    classify(
        ItemKind::ExposureFunction,
        names.into_iter().map(Into::into),
        &resolver,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_canonical_name_validates() {
        let result = validate_exposure_functions(ExposureFunction::ALL.iter().map(|f| f.name()));
        assert!(result.is_valid());
        assert_eq!(result.validated().len(), 4);
        assert_eq!(
            result.validated()["Security Type / Currency"],
            ExposureFunction::SecurityTypeAndCurrency
        );
    }

    #[test]
    fn test_unknown_name_is_missing_not_unsupported() {
        let result = validate_exposure_functions(["currency"]);
        assert!(result.missing().contains("currency"));
        assert!(result.unsupported().is_empty());
        assert!(result.duplicated().is_empty());
    }
}
