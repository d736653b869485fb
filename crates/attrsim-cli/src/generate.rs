//! Dataset generation command handler.

use std::path::Path;

use anyhow::Context;
use attrsim_core::{AppConfig, UserInteractionRecord};
use attrsim_synth::DataGenerator;

/// Build a generator, seeded when requested, and draw `count` records.
pub(crate) fn generate_batch(count: usize, seed: Option<u64>) -> Vec<UserInteractionRecord> {
    let mut generator = seed.map_or_else(DataGenerator::new, DataGenerator::from_seed);
    generator.generate(count)
}

/// Generate a synthetic dataset and print it or write it to a file.
///
/// # Errors
///
/// Returns an error if the format is unknown or the output file cannot be
/// written.
pub(crate) fn run_generate(
    config: &AppConfig,
    count: Option<usize>,
    seed: Option<u64>,
    format: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let count = count.unwrap_or(config.dataset_size);
    let records = generate_batch(count, seed);

    let rendered = match format {
        "csv" => attrsim_core::render_csv(&records),
        "json" => attrsim_core::render_json(&records)?,
        other => anyhow::bail!("unknown format '{other}'; expected csv or json"),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {count} records to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
