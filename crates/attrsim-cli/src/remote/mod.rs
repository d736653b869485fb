//! Remote scoring-service command handlers.
//!
//! These are called from `main` with the service already constructed from the
//! application config. When no service is configured the commands print a
//! notice instead of failing, and the local model stays authoritative.

mod ops;
mod status;

use clap::Subcommand;

pub(crate) use ops::{run_remote_evaluate, run_remote_predict, run_remote_train};
pub(crate) use status::run_remote_status;

/// Sub-commands available under `remote`.
#[derive(Debug, Subcommand)]
pub enum RemoteCommands {
    /// Probe service availability and model state
    Status,
    /// Train the remote model on a synthetic dataset
    Train {
        /// Records to generate for training (defaults to the configured size)
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible training data
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate the remote model on a fresh synthetic dataset
    Evaluate {
        /// Records to generate for evaluation (defaults to the configured size)
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible evaluation data
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a profile remotely and compare it with the local model
    Predict {
        #[command(flatten)]
        profile: crate::simulate::ProfileArgs,
        /// YAML weights file for the local comparison
        #[arg(long)]
        weights: Option<std::path::PathBuf>,
    },
}

/// Shared notice for commands invoked without a configured service.
fn print_disabled_notice() {
    println!("remote scoring service is not configured; set ATTRSIM_ML_BASE_URL to enable it");
}
