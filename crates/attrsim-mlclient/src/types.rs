//! Wire types for the remote ML scoring service.
//!
//! Shapes mirror the service's JSON envelopes: a `success` flag plus
//! operation-specific payload fields, with `message` carrying error detail.

use std::collections::HashMap;

use attrsim_core::UserInteractionRecord;
use serde::{Deserialize, Serialize};

/// Body of `POST /train` and `POST /evaluate`.
#[derive(Debug, Serialize)]
pub(crate) struct DatasetPayload<'a> {
    pub data: &'a [UserInteractionRecord],
}

/// Response of `POST /train`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainResponse {
    pub success: bool,
    /// Per-feature importances keyed by wire name, when training succeeded.
    #[serde(default)]
    pub feature_importances: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub feature_contributions: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Model quality metrics from `POST /evaluate`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EvaluationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub auc: f64,
}

/// Response of `POST /evaluate`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateResponse {
    pub success: bool,
    #[serde(default)]
    pub metrics: Option<EvaluationMetrics>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Health probe summary. Probes degrade to the default (unavailable,
/// untrained) instead of erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStatus {
    pub available: bool,
    pub model_trained: bool,
}

/// Raw body of `GET /health`.
#[derive(Debug, Deserialize)]
pub(crate) struct HealthResponse {
    #[serde(default)]
    pub model_loaded: bool,
}
