//! Scenario bookmarking.

use std::path::Path;

use attrsim_core::{reduce, AppConfig, SessionAction, SessionState};
use attrsim_model::predict;

use crate::simulate::ProfileArgs;

/// Score a profile, bookmark it under `name`, and print the resulting table.
///
/// The session starts from the demo scenarios, so the new bookmark appears
/// alongside them.
///
/// # Errors
///
/// Returns an error if the channel or the weights file is invalid, or if the
/// name is empty.
pub(crate) fn run_scenario_save(
    config: &AppConfig,
    name: &str,
    profile: &ProfileArgs,
    weights: Option<&Path>,
) -> anyhow::Result<()> {
    let model_config = crate::simulate::load_weights(config, weights)?;
    let params = profile.to_params()?;
    let conversion_rate = predict(&params, &model_config);

    let state = SessionState::with_demo_scenarios();
    let state = reduce(&state, SessionAction::SetParameters(params))?;
    let state = reduce(
        &state,
        SessionAction::SaveScenario {
            name: name.to_string(),
            conversion_rate,
        },
    )?;

    if let Some(saved) = state.scenarios.last() {
        println!(
            "saved '{}' at {} predicted conversion",
            saved.name,
            crate::percent(saved.conversion_rate)
        );
        println!();
    }
    super::print_scenarios(&state.scenarios);

    Ok(())
}
