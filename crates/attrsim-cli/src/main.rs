use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod analyze;
mod generate;
mod remote;
mod scenario;
mod segments;
mod simulate;

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "attrsim-cli")]
#[command(about = "Marketing attribution simulator command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a synthetic interaction dataset
    Generate {
        /// Number of records (defaults to the configured dataset size)
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate the three demo cohorts and summarize or export them
    Segments {
        /// Seed for reproducible cohorts
        #[arg(long)]
        seed: Option<u64>,
        /// Write one CSV per cohort into this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Summarize a dataset from a file or a freshly generated batch
    Analyze {
        /// Dataset to read (.csv or .json, chosen by extension)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Generate this many records instead of reading a file
        #[arg(long)]
        count: Option<usize>,
        /// Seed used when generating
        #[arg(long)]
        seed: Option<u64>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a hypothetical profile with the local model
    Simulate {
        #[command(flatten)]
        profile: simulate::ProfileArgs,
        /// YAML weights file overriding the built-in model configuration
        #[arg(long)]
        weights: Option<PathBuf>,
    },
    /// Inspect and grow the saved what-if scenarios
    Scenario {
        #[command(subcommand)]
        command: scenario::ScenarioCommands,
    },
    /// Call the optional remote scoring service
    Remote {
        #[command(subcommand)]
        command: remote::RemoteCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = attrsim_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(dataset_size = config.dataset_size, "configuration loaded");

    match cli.command {
        Commands::Generate {
            count,
            seed,
            format,
            output,
        } => generate::run_generate(&config, count, seed, &format, output.as_deref()),
        Commands::Segments { seed, output_dir } => {
            segments::run_segments(seed, output_dir.as_deref())
        }
        Commands::Analyze {
            input,
            count,
            seed,
            json,
        } => analyze::run_analyze(&config, input.as_deref(), count, seed, json),
        Commands::Simulate { profile, weights } => {
            simulate::run_simulate(&config, &profile, weights.as_deref())
        }
        Commands::Scenario { command } => match command {
            scenario::ScenarioCommands::List => scenario::run_scenario_list(),
            scenario::ScenarioCommands::Save {
                name,
                profile,
                weights,
            } => scenario::run_scenario_save(&config, &name, &profile, weights.as_deref()),
            scenario::ScenarioCommands::Compare { weights } => {
                scenario::run_scenario_compare(&config, weights.as_deref())
            }
        },
        Commands::Remote { command } => {
            let service = attrsim_mlclient::service_from_config(&config)?;
            match command {
                remote::RemoteCommands::Status => {
                    remote::run_remote_status(service.as_ref()).await
                }
                remote::RemoteCommands::Train { count, seed } => {
                    remote::run_remote_train(&config, service.as_ref(), count, seed).await
                }
                remote::RemoteCommands::Evaluate { count, seed } => {
                    remote::run_remote_evaluate(&config, service.as_ref(), count, seed).await
                }
                remote::RemoteCommands::Predict { profile, weights } => {
                    remote::run_remote_predict(
                        &config,
                        service.as_ref(),
                        &profile,
                        weights.as_deref(),
                    )
                    .await
                }
            }
        }
    }
}

/// Install the fmt subscriber, preferring `RUST_LOG` over the configured
/// level when both are set.
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Format a probability for display.
pub(crate) fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format a signed probability change for display.
pub(crate) fn signed_percent(value: f64) -> String {
    format!("{:+.1}%", value * 100.0)
}
