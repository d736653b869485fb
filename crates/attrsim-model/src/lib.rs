//! Attribution scoring for attrsim.
//!
//! A closed-form stand-in for a trained model: linear feature normalization,
//! a configurable weighted sum, and a sigmoid squash, plus per-feature
//! contribution breakdowns, what-if impact deltas, and whole-dataset
//! analysis.

pub mod analysis;
pub mod error;
pub mod scoring;

pub use analysis::{analyze_dataset, ChannelSummary, DatasetSummary, FeatureAverages};
pub use error::AnalysisError;
pub use scoring::{
    channel_score, feature_contributions, impact_delta, normalize_feature, predict, sigmoid,
    weighted_sum, FeatureContributions,
};
