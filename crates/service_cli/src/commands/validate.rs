//! Validate command implementation
//!
//! Runs every validator against a configuration and prints the outcome.

use std::fmt::Display;

use curve_builder::CurveBuildEngine;
use curve_core::types::VersionCorrection;
use curve_validation::{validate_configuration, ConfigurationReport, ValidationResult};
use tracing::info;

use crate::store::StoreDocument;
use crate::{CliError, Result};

/// Run the validate command
pub fn run(store: StoreDocument, name: &str, as_of: VersionCorrection) -> Result<()> {
    info!("Validating configuration {}", name);

    let engine = CurveBuildEngine::new(store.into_context());
    let config = engine.resolve_configuration(name, as_of)?;
    let report = validate_configuration(&config, as_of, engine.context());

    print!("{}", render(&report));

    if report.is_clean() {
        info!("Validation complete: no issues");
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            configuration: report.configuration.clone(),
            issues: report.issue_count(),
        })
    }
}

/// Render a report as text.
pub fn render(report: &ConfigurationReport) -> String {
    let mut out = format!("Configuration {}\n", report.configuration);
    out.push_str(&"=".repeat(14 + report.configuration.len()));
    out.push('\n');

    out.push_str(&line("exogenous configurations", &report.exogenous));
    for group in &report.groups {
        let prefix = format!("group {}", group.index);
        out.push_str(&line(&format!("{prefix}: curve definitions"), &group.curves));
        out.push_str(&line(
            &format!("{prefix}: discounting references"),
            &group.discounting,
        ));
        out.push_str(&line(
            &format!("{prefix}: ibor securities"),
            &group.ibor_securities,
        ));
        out.push_str(&line(
            &format!("{prefix}: overnight securities"),
            &group.overnight_securities,
        ));
    }
    out.push_str(&line("ibor curve types", &report.ibor_curve_types));
    out.push_str(&line("overnight curve types", &report.overnight_curve_types));

    out.push_str(&format!("\nTotal issues: {}\n", report.issue_count()));
    out
}

fn line<N: Ord + Display, T, U>(label: &str, result: &ValidationResult<N, T, U>) -> String {
    let mut out = format!("  {:<36} {:>3} validated", label, result.validated().len());
    if !result.missing().is_empty() {
        out.push_str(&format!("; missing: {}", join(result.missing().iter())));
    }
    if !result.duplicated().is_empty() {
        out.push_str(&format!("; duplicated: {}", join(result.duplicated().iter())));
    }
    if !result.unsupported().is_empty() {
        out.push_str(&format!("; unsupported: {}", join(result.unsupported().keys())));
    }
    out.push('\n');
    out
}

fn join<'a, N: Display + 'a>(names: impl Iterator<Item = &'a N>) -> String {
    names.map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
