//! Check command implementation
//!
//! Shows the effective settings and what the store holds.

use curve_builder::CurveBuildEngine;
use curve_core::config::ConfigItem;
use curve_core::types::VersionCorrection;
use tracing::info;

use crate::config::Settings;
use crate::store::StoreDocument;
use crate::Result;

/// Run the check command
pub fn run(store: &StoreDocument, settings: &Settings) -> Result<()> {
    info!("Checking settings and store...\n");

    println!("Curves System Check");
    println!("===================\n");

    println!("Settings:");
    println!("  Log level: {}", settings.general.log_level);
    println!("  Parallel builds: {}", settings.engine.parallel);
    println!("  Threads: {}", settings.engine.threads);
    println!("  CPU cores: {}", num_cpus::get());
    println!();

    let counts = store.counts();
    println!("Store:");
    println!("  Configuration items: {}", counts.configs);
    println!("  Securities: {}", counts.securities);
    println!("  Conventions: {}", counts.conventions);
    println!("  Market quotes: {}", counts.market_data);
    println!();

    let engine = CurveBuildEngine::new(store.clone().into_context());
    println!("Construction configurations:");
    for stored in &store.configs {
        if let ConfigItem::CurveConstruction(config) = &stored.document {
            let curves = engine
                .curve_names(&config.name, VersionCorrection::LATEST)
                .map(|names| names.join(", "))
                .unwrap_or_else(|err| format!("unavailable ({})", err));
            println!("  {}: {}", config.name, curves);
        }
    }
    println!();

    println!("All checks passed!");

    Ok(())
}
