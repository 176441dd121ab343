//! Exposure command implementation
//!
//! Resolves an exposure function list and checks every name in it.

use curve_core::types::VersionCorrection;
use curve_validation::{validate_exposure_function_configurations, validate_exposure_functions};
use tracing::info;

use crate::store::StoreDocument;
use crate::{CliError, Result};

/// Run the exposure command
pub fn run(store: StoreDocument, name: &str, as_of: VersionCorrection) -> Result<()> {
    info!("Validating exposure functions {}", name);

    let context = store.into_context();
    let lists = validate_exposure_function_configurations([name], as_of, context.configs.as_ref());
    let list = lists.validated().get(name).ok_or_else(|| {
        CliError::InvalidArgument(format!("no single exposure function list named {}", name))
    })?;

    let result = validate_exposure_functions(list.exposure_functions.iter().map(String::as_str));
    println!("Exposure functions {}", name);
    for function in &list.exposure_functions {
        let status = if result.validated().contains_key(function) {
            "ok"
        } else {
            "unknown"
        };
        println!("  {:<28} {}", function, status);
    }

    if result.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            configuration: name.to_string(),
            issues: result.issue_count(),
        })
    }
}
