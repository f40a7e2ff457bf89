/*!
 * Guarded Stress - Main Entry Point
 *
 * Runs the reader/writer stress scenarios against the guarded adapters:
 * - Sequence: readers sum a vector while a writer pushes and erases a marker
 * - Map: readers sum map values while a writer inserts and removes a marker
 *
 * Exits non-zero with a rendered diagnostic when any reader observed a torn sum.
 */

use tracing::{error, info, warn};

use guarded_collections::init_tracing;
use guarded_collections::stress::{run_map_stress, run_sequence_stress, verdict, StressConfig};

fn main() -> miette::Result<()> {
    init_tracing();

    let config = StressConfig::from_env();
    info!(
        readers = config.readers,
        iterations = config.iterations,
        elements = config.elements,
        trace_sections = config.trace_sections,
        "Guarded stress starting"
    );

    let reports = [run_sequence_stress(&config), run_map_stress(&config)];

    for report in &reports {
        if !report.is_clean() {
            error!(scenario = report.scenario, torn = report.torn, "Torn reads observed");
        } else if !report.overlapped() {
            warn!(scenario = report.scenario, "Readers never overlapped the writer");
        }
    }

    verdict(&reports)?;

    info!("All scenarios clean");
    Ok(())
}
