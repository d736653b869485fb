//! Demo cohort command handler.

use std::path::Path;

use anyhow::Context;
use attrsim_synth::DataGenerator;

/// Generate the three demo cohorts, then either export one CSV per cohort or
/// print a one-line summary of each.
///
/// # Errors
///
/// Returns an error if the output directory or a cohort file cannot be
/// written.
pub(crate) fn run_segments(seed: Option<u64>, output_dir: Option<&Path>) -> anyhow::Result<()> {
    let mut generator = seed.map_or_else(DataGenerator::new, DataGenerator::from_seed);
    let segments = generator.generate_segments();

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for (name, records) in segments.named() {
            let path = dir.join(format!("{}.csv", name.replace(' ', "_")));
            std::fs::write(&path, attrsim_core::render_csv(records))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {} records to {}", records.len(), path.display());
        }
        return Ok(());
    }

    for (name, records) in segments.named() {
        let summary = attrsim_model::analyze_dataset(records)?;
        println!(
            "{name}: {} records, conversion rate {}, add-to-cart rate {}",
            summary.total_records,
            crate::percent(summary.conversion_rate),
            crate::percent(summary.add_to_cart_rate),
        );
    }

    Ok(())
}
