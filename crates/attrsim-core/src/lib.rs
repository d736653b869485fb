//! Shared domain model for the attrsim workspace.
//!
//! Defines the interaction records produced by the synthetic generator, the
//! simulation profiles and feature weights consumed by the scoring model,
//! dataset export/import (CSV and JSON), session state with its reducer, and
//! environment-driven application configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod export;
pub mod session;
pub mod types;
pub mod weights;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ExportError, SessionError, WeightError};
pub use export::{parse_csv, parse_json, render_csv, render_json, CSV_HEADER};
pub use session::{demo_scenarios, reduce, SavedScenario, SessionAction, SessionState};
pub use types::{
    Feature, MarketingChannel, ParseChannelError, SimulationParameters, UserInteractionRecord,
};
pub use weights::{
    load_model_config, AttributionModelConfig, FeatureWeights, ModelType, WEIGHT_SUM_TOLERANCE,
};
