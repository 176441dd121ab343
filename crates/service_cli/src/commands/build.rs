//! Build command implementation
//!
//! Builds a configuration after its exogenous chain and prints the Jacobian
//! unit map with the attached curves.

use curve_builder::{BuildOutput, ChainedCurveBuilder, CurveBuildEngine};
use curve_core::types::VersionCorrection;
use serde_json::{json, Value};
use tracing::info;

use crate::store::StoreDocument;
use crate::{CliError, Result};

/// Run the build command
pub fn run(
    store: StoreDocument,
    name: &str,
    curves: &[String],
    format: &str,
    as_of: VersionCorrection,
) -> Result<()> {
    info!("Building configuration {}", name);

    let builder = ChainedCurveBuilder::new(CurveBuildEngine::new(store.into_context()));
    let output = builder.build(name, as_of)?;

    let requested: Vec<String> = if curves.is_empty() {
        output.multicurve.curve_names()
    } else {
        curves.to_vec()
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&to_json(&output, &requested))?),
        "table" => print!("{}", render_table(&output, &requested)),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Build complete");
    Ok(())
}

/// Requested curves as a table.
pub fn render_table(output: &BuildOutput, requested: &[String]) -> String {
    let selection = output.select(requested);
    let units = output.blocks.unit_map();

    let mut out = String::new();
    out.push_str("┌──────────────────────┬────────────┬──────────┬──────────────────────────────┐\n");
    out.push_str("│ Curve                │ Rate       │ Block    │ Attached to                  │\n");
    out.push_str("├──────────────────────┼────────────┼──────────┼──────────────────────────────┤\n");
    for (name, curve) in &selection.present {
        let block = units
            .get(name)
            .map(ToString::to_string)
            .unwrap_or_default();
        out.push_str(&format!(
            "│ {:<20} │ {:>10.6} │ {:<8} │ {:<28} │\n",
            name,
            curve.rate(),
            block,
            attachments(output, name).join(", ")
        ));
    }
    out.push_str("└──────────────────────┴────────────┴──────────┴──────────────────────────────┘\n");
    for name in &selection.absent {
        out.push_str(&format!("not built: {}\n", name));
    }
    out
}

/// Requested curves as JSON.
pub fn to_json(output: &BuildOutput, requested: &[String]) -> Value {
    let selection = output.select(requested);
    let units = output.blocks.unit_map();

    let curves: serde_json::Map<String, Value> = selection
        .present
        .iter()
        .map(|(name, curve)| {
            let block = units
                .get(name)
                .map(|range| json!({ "start": range.start, "size": range.size }));
            let entry = json!({
                "rate": curve.rate(),
                "block": block,
                "attached_to": attachments(output, name),
            });
            (name.clone(), entry)
        })
        .collect();

    json!({
        "configuration": output.configuration,
        "curves": curves,
        "absent": selection.absent,
        "next_free_index": output.blocks.next_free_index(),
    })
}

fn attachments(output: &BuildOutput, curve: &str) -> Vec<String> {
    let discounting = output
        .multicurve
        .discounting()
        .iter()
        .filter(|(_, name)| name.as_str() == curve)
        .map(|(currency, _)| format!("discounting {}", currency));
    let forwards = output
        .multicurve
        .forwards()
        .iter()
        .filter(|(_, name)| name.as_str() == curve)
        .map(|(index, _)| format!("forward {}", index));
    discounting.chain(forwards).collect()
}
