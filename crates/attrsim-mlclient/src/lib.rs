//! Typed client for the optional remote ML scoring service.
//!
//! The service re-implements the closed-form attribution model behind a
//! small HTTP API (train/predict/evaluate/health). It is consumed, never
//! implemented, and everything downstream must keep working when it is
//! absent: the health probe degrades to "unavailable", and an unconfigured
//! deployment gets [`DisabledMlService`] instead of a connected client.

pub mod client;
pub mod error;
pub mod service;
pub mod types;

pub use client::MlClient;
pub use error::MlClientError;
pub use service::{service_from_config, DisabledMlService, MlService};
pub use types::{
    EvaluateResponse, EvaluationMetrics, PredictResponse, ServiceStatus, TrainResponse,
};
