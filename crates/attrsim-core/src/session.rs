use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::types::{MarketingChannel, SimulationParameters, UserInteractionRecord};
use crate::weights::AttributionModelConfig;

/// A bookmarked simulation profile and the conversion rate it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScenario {
    pub id: Uuid,
    pub name: String,
    pub params: SimulationParameters,
    /// Predicted conversion probability at save time.
    pub conversion_rate: f64,
    pub saved_at: DateTime<Utc>,
}

/// Everything a simulation session tracks between actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub params: SimulationParameters,
    /// Profile in effect before the most recent parameter change, if any.
    /// Drives the impact-delta readout.
    pub previous_params: Option<SimulationParameters>,
    pub config: AttributionModelConfig,
    pub scenarios: Vec<SavedScenario>,
    pub dataset: Vec<UserInteractionRecord>,
}

impl SessionState {
    /// Fresh session preloaded with the three demo scenarios.
    #[must_use]
    pub fn with_demo_scenarios() -> Self {
        SessionState {
            scenarios: demo_scenarios(),
            ..SessionState::default()
        }
    }
}

/// State transitions understood by [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Adopt a new profile, remembering the old one for delta reporting.
    SetParameters(SimulationParameters),
    /// Swap in a new model configuration; its weights are normalized on entry.
    SetConfig(AttributionModelConfig),
    /// Restore the default profile and configuration. Saved scenarios and the
    /// dataset survive a reset.
    ResetSimulation,
    /// Bookmark the current profile under `name`.
    SaveScenario { name: String, conversion_rate: f64 },
    DeleteScenario(Uuid),
    /// Re-adopt a saved profile, with the same previous-profile bookkeeping
    /// as [`SessionAction::SetParameters`].
    ApplyScenario(Uuid),
    ReplaceDataset(Vec<UserInteractionRecord>),
}

/// Apply `action` to `state`, returning the next state.
///
/// The input state is never mutated, so a rejected action leaves the caller's
/// state exactly as it was.
///
/// # Errors
///
/// Returns `SessionError` for blank scenario names, unknown scenario ids, and
/// configurations whose weights cannot be normalized.
pub fn reduce(state: &SessionState, action: SessionAction) -> Result<SessionState, SessionError> {
    let mut next = state.clone();
    match action {
        SessionAction::SetParameters(params) => {
            next.previous_params = Some(next.params);
            next.params = params;
        }
        SessionAction::SetConfig(mut config) => {
            config.feature_weights = config.feature_weights.normalized()?;
            next.config = config;
        }
        SessionAction::ResetSimulation => {
            next.params = SimulationParameters::default();
            next.previous_params = None;
            next.config = AttributionModelConfig::default();
        }
        SessionAction::SaveScenario {
            name,
            conversion_rate,
        } => {
            if name.trim().is_empty() {
                return Err(SessionError::EmptyScenarioName);
            }
            next.scenarios.push(SavedScenario {
                id: Uuid::new_v4(),
                name,
                params: next.params,
                conversion_rate,
                saved_at: Utc::now(),
            });
        }
        SessionAction::DeleteScenario(id) => {
            let before = next.scenarios.len();
            next.scenarios.retain(|s| s.id != id);
            if next.scenarios.len() == before {
                return Err(SessionError::ScenarioNotFound(id));
            }
        }
        SessionAction::ApplyScenario(id) => {
            let scenario = next
                .scenarios
                .iter()
                .find(|s| s.id == id)
                .ok_or(SessionError::ScenarioNotFound(id))?;
            let params = scenario.params;
            next.previous_params = Some(next.params);
            next.params = params;
        }
        SessionAction::ReplaceDataset(records) => {
            next.dataset = records;
        }
    }
    Ok(next)
}

/// The three demo scenarios a session is seeded with.
#[must_use]
pub fn demo_scenarios() -> Vec<SavedScenario> {
    vec![
        SavedScenario {
            id: Uuid::new_v4(),
            name: "Facebook Ad Campaign".to_string(),
            params: SimulationParameters {
                marketing_channel: MarketingChannel::Ad,
                product_views: 4.0,
                image_quality: 4.0,
                review_count: 25.0,
                time_spent_on_page: 150.0,
            },
            conversion_rate: 0.68,
            saved_at: demo_date(2025, 3, 15),
        },
        SavedScenario {
            id: Uuid::new_v4(),
            name: "Email Remarketing".to_string(),
            params: SimulationParameters {
                marketing_channel: MarketingChannel::Email,
                product_views: 2.0,
                image_quality: 3.0,
                review_count: 18.0,
                time_spent_on_page: 90.0,
            },
            conversion_rate: 0.55,
            saved_at: demo_date(2025, 4, 2),
        },
        SavedScenario {
            id: Uuid::new_v4(),
            name: "Influencer Partnership".to_string(),
            params: SimulationParameters {
                marketing_channel: MarketingChannel::Influencer,
                product_views: 5.0,
                image_quality: 5.0,
                review_count: 32.0,
                time_spent_on_page: 180.0,
            },
            conversion_rate: 0.74,
            saved_at: demo_date(2025, 4, 8),
        },
    ]
}

fn demo_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
