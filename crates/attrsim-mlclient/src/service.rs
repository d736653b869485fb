//! Capability trait over the remote scoring service.

use async_trait::async_trait;
use attrsim_core::{AppConfig, SimulationParameters, UserInteractionRecord};

use crate::client::MlClient;
use crate::error::MlClientError;
use crate::types::{EvaluateResponse, PredictResponse, ServiceStatus, TrainResponse};

/// Remote scoring operations, object-safe so binaries can hold a
/// `Box<dyn MlService>` chosen at startup.
#[async_trait]
pub trait MlService: Send + Sync {
    /// Probe service health. Degrades to "unavailable" instead of erroring.
    async fn status(&self) -> ServiceStatus;

    /// Train the remote model on `records`.
    async fn train(
        &self,
        records: &[UserInteractionRecord],
    ) -> Result<TrainResponse, MlClientError>;

    /// Score one profile remotely.
    async fn predict(
        &self,
        params: &SimulationParameters,
    ) -> Result<PredictResponse, MlClientError>;

    /// Evaluate the remote model against `records`.
    async fn evaluate(
        &self,
        records: &[UserInteractionRecord],
    ) -> Result<EvaluateResponse, MlClientError>;
}

/// Stand-in used when no remote service is configured. The status probe
/// reports unavailable; every other operation returns
/// [`MlClientError::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMlService;

#[async_trait]
impl MlService for DisabledMlService {
    async fn status(&self) -> ServiceStatus {
        ServiceStatus::default()
    }

    async fn train(
        &self,
        _records: &[UserInteractionRecord],
    ) -> Result<TrainResponse, MlClientError> {
        Err(MlClientError::Disabled)
    }

    async fn predict(
        &self,
        _params: &SimulationParameters,
    ) -> Result<PredictResponse, MlClientError> {
        Err(MlClientError::Disabled)
    }

    async fn evaluate(
        &self,
        _records: &[UserInteractionRecord],
    ) -> Result<EvaluateResponse, MlClientError> {
        Err(MlClientError::Disabled)
    }
}

/// Build the service implementation selected by configuration: a connected
/// client when `ml_base_url` is set, otherwise the disabled stand-in.
///
/// # Errors
///
/// Returns `MlClientError` if a base URL is configured but the client cannot
/// be constructed from it.
pub fn service_from_config(config: &AppConfig) -> Result<Box<dyn MlService>, MlClientError> {
    match config.ml_base_url.as_deref() {
        Some(base_url) => Ok(Box::new(MlClient::new(base_url, config.ml_timeout_secs)?)),
        None => Ok(Box::new(DisabledMlService)),
    }
}
