//! Read-only scenario queries.

use std::path::Path;

use attrsim_core::{AppConfig, SessionState};
use attrsim_model::predict;

/// List the demo scenarios.
pub(crate) fn run_scenario_list() -> anyhow::Result<()> {
    let state = SessionState::with_demo_scenarios();
    super::print_scenarios(&state.scenarios);
    Ok(())
}

/// Re-score each saved scenario under the active weights and show the drift
/// from the stored rate.
///
/// # Errors
///
/// Returns an error if the weights file cannot be loaded.
pub(crate) fn run_scenario_compare(
    config: &AppConfig,
    weights: Option<&Path>,
) -> anyhow::Result<()> {
    let model_config = crate::simulate::load_weights(config, weights)?;
    let state = SessionState::with_demo_scenarios();

    let header = format!("{:<26}{:>8}{:>8}{:>9}", "NAME", "SAVED", "MODEL", "DRIFT");
    println!("{header}");
    for scenario in &state.scenarios {
        let modeled = predict(&scenario.params, &model_config);
        println!(
            "{:<26}{:>8}{:>8}{:>9}",
            scenario.name,
            crate::percent(scenario.conversion_rate),
            crate::percent(modeled),
            crate::signed_percent(modeled - scenario.conversion_rate),
        );
    }

    Ok(())
}
