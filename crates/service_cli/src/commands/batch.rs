//! Batch command implementation
//!
//! Builds several independent configurations on the rayon thread pool.

use curve_builder::{BuildError, BuildOutput, CurveBuildEngine, ExogenousBundles};
use curve_core::types::VersionCorrection;
use tracing::{info, warn};

use crate::config::Settings;
use crate::store::StoreDocument;
use crate::{CliError, Result};

/// Run the batch command
pub fn run(
    store: StoreDocument,
    names: &[String],
    as_of: VersionCorrection,
    settings: &Settings,
) -> Result<()> {
    let threads = if settings.engine.parallel {
        settings.engine.threads.max(1)
    } else {
        1
    };
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        warn!("Could not size the thread pool: {}", err);
    }
    info!("Building {} configuration(s) on {} thread(s)", names.len(), threads);

    let engine = CurveBuildEngine::new(store.into_context());
    let results = engine.build_batch(names, as_of, &ExogenousBundles::new());

    print!("{}", render(names, &results));

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        return Err(CliError::InvalidArgument(format!(
            "{} of {} configuration(s) failed to build",
            failed,
            names.len()
        )));
    }
    Ok(())
}

/// One line per configuration.
pub fn render(names: &[String], results: &[std::result::Result<BuildOutput, BuildError>]) -> String {
    names
        .iter()
        .zip(results)
        .map(|(name, result)| match result {
            Ok(output) => format!(
                "{:<24} ok     {} curve(s), {} column(s)\n",
                name,
                output.multicurve.len(),
                output.blocks.next_free_index()
            ),
            Err(err) => format!("{:<24} failed {}\n", name, err),
        })
        .collect()
}
