//! Dataset analysis command handler.

use std::path::Path;

use anyhow::Context;
use attrsim_core::{parse_csv, parse_json, AppConfig, UserInteractionRecord};
use attrsim_model::{analyze_dataset, DatasetSummary};

/// Read records from `path`, choosing the parser by file extension.
fn read_records(path: &Path) -> anyhow::Result<Vec<UserInteractionRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(parse_csv(&content)?),
        Some("json") => Ok(parse_json(&content)?),
        _ => anyhow::bail!(
            "cannot tell the format of {}; expected a .csv or .json file",
            path.display()
        ),
    }
}

/// Summarize a dataset read from disk or generated on the fly.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or parsed, or if the
/// dataset is empty.
pub(crate) fn run_analyze(
    config: &AppConfig,
    input: Option<&Path>,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let records = match input {
        Some(path) => read_records(path)?,
        None => crate::generate::generate_batch(count.unwrap_or(config.dataset_size), seed),
    };
    let summary = analyze_dataset(&records)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &DatasetSummary) {
    println!("records: {}", summary.total_records);
    println!("conversion rate: {}", crate::percent(summary.conversion_rate));
    println!(
        "add-to-cart rate: {}",
        crate::percent(summary.add_to_cart_rate)
    );
    println!();

    let header = format!(
        "{:<12}{:>9}{:>13}{:>8}",
        "CHANNEL", "RECORDS", "CONVERSIONS", "RATE"
    );
    println!("{header}");
    for channel in &summary.channels {
        println!(
            "{:<12}{:>9}{:>13}{:>8}",
            channel.channel.as_str(),
            channel.records,
            channel.conversions,
            crate::percent(channel.conversion_rate),
        );
    }
    println!();

    let averages = &summary.averages;
    println!("average product views: {:.2}", averages.product_views);
    println!("average image quality: {:.2}", averages.image_quality);
    println!("average review count: {:.1}", averages.review_count);
    println!(
        "average time on page: {:.1}s",
        averages.time_spent_on_page
    );
}
