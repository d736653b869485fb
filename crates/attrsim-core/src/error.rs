use thiserror::Error;
use uuid::Uuid;

/// Failures while loading application or model configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read weights file {path}: {source}")]
    WeightsFileIo {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse weights file: {0}")]
    WeightsFileParse(serde_yaml::Error),

    #[error("invalid model configuration: {0}")]
    Validation(String),

    #[error("invalid feature weights: {0}")]
    Weights(#[from] WeightError),
}

/// Failures while normalizing feature weights.
#[derive(Debug, Error)]
pub enum WeightError {
    #[error("feature weights sum to {0}; rescaling requires a positive, finite total")]
    UnusableSum(f64),
}

/// Failures while rendering or parsing dataset exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unexpected CSV header: '{found}'")]
    Header { found: String },

    #[error("line {line}: expected 8 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {column}: {reason}")]
    Field {
        line: usize,
        column: &'static str,
        reason: String,
    },

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected session actions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("scenario name must be non-empty")]
    EmptyScenarioName,

    #[error("no saved scenario with id {0}")]
    ScenarioNotFound(Uuid),

    #[error("invalid feature weights: {0}")]
    InvalidWeights(#[from] WeightError),
}
