//! Saved-scenario command handlers.
//!
//! Scenarios live in an in-memory session seeded with the demo bookmarks, so
//! every invocation starts from the same baseline.

mod query;
mod save;

use attrsim_core::SavedScenario;
use clap::Subcommand;

pub(crate) use query::{run_scenario_compare, run_scenario_list};
pub(crate) use save::run_scenario_save;

/// Sub-commands available under `scenario`.
#[derive(Debug, Subcommand)]
pub enum ScenarioCommands {
    /// List the demo scenarios
    List,
    /// Score a profile and bookmark it alongside the demo scenarios
    Save {
        /// Name for the new scenario
        #[arg(long)]
        name: String,
        #[command(flatten)]
        profile: crate::simulate::ProfileArgs,
        /// YAML weights file overriding the built-in model configuration
        #[arg(long)]
        weights: Option<std::path::PathBuf>,
    },
    /// Re-score every saved scenario against the current model
    Compare {
        /// YAML weights file overriding the built-in model configuration
        #[arg(long)]
        weights: Option<std::path::PathBuf>,
    },
}

/// Print the scenario table shared by `list` and `save`.
fn print_scenarios(scenarios: &[SavedScenario]) {
    let header = format!("{:<26}{:<12}{:>8}  SAVED", "NAME", "CHANNEL", "RATE");
    println!("{header}");
    for scenario in scenarios {
        println!(
            "{:<26}{:<12}{:>8}  {}",
            scenario.name,
            scenario.params.marketing_channel.as_str(),
            crate::percent(scenario.conversion_rate),
            scenario.saved_at.format("%Y-%m-%d"),
        );
    }
}
