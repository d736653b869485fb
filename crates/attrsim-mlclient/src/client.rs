//! HTTP client for the remote ML scoring service.
//!
//! Wraps `reqwest` with typed request/response handling for the four
//! endpoints the service exposes. The scoring endpoints surface transport
//! and decode failures as typed errors; the health probe degrades to
//! "unavailable" instead, because remote scoring is optional everywhere it
//! is consumed.

use std::time::Duration;

use async_trait::async_trait;
use attrsim_core::{SimulationParameters, UserInteractionRecord};
use reqwest::{Client, Url};
use tracing::warn;

use crate::error::MlClientError;
use crate::service::MlService;
use crate::types::{
    DatasetPayload, EvaluateResponse, HealthResponse, PredictResponse, ServiceStatus,
    TrainResponse,
};

/// Client for the remote scoring service.
///
/// Use [`MlClient::new`] with the configured base URL (the reference service
/// listens on `http://localhost:5000/api`); point it at a mock server in
/// tests.
#[derive(Debug)]
pub struct MlClient {
    client: Client,
    base_url: Url,
}

impl MlClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`MlClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MlClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, MlClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("attrsim/0.1 (attribution-demo)")
            .build()?;

        // Normalise: exactly one trailing slash so joined paths land under
        // the base rather than replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| MlClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(MlClient { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, MlClientError> {
        self.base_url
            .join(path)
            .map_err(|e| MlClientError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    /// POSTs `body` as JSON, asserts a 2xx status, and decodes the response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, MlClientError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.client.post(url).json(body).send().await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| MlClientError::Deserialize {
            context: path.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl MlService for MlClient {
    async fn status(&self) -> ServiceStatus {
        let url = match self.endpoint("health") {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "health probe skipped: bad endpoint");
                return ServiceStatus::default();
            }
        };
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "scoring service unreachable");
                return ServiceStatus::default();
            }
        };
        if !response.status().is_success() {
            warn!(status = %response.status(), "scoring service health probe failed");
            return ServiceStatus::default();
        }
        match response.json::<HealthResponse>().await {
            Ok(health) => ServiceStatus {
                available: true,
                model_trained: health.model_loaded,
            },
            Err(err) => {
                warn!(error = %err, "scoring service returned a malformed health body");
                ServiceStatus::default()
            }
        }
    }

    async fn train(
        &self,
        records: &[UserInteractionRecord],
    ) -> Result<TrainResponse, MlClientError> {
        self.post_json("train", &DatasetPayload { data: records })
            .await
    }

    async fn predict(
        &self,
        params: &SimulationParameters,
    ) -> Result<PredictResponse, MlClientError> {
        self.post_json("predict", params).await
    }

    async fn evaluate(
        &self,
        records: &[UserInteractionRecord],
    ) -> Result<EvaluateResponse, MlClientError> {
        self.post_json("evaluate", &DatasetPayload { data: records })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_exactly_one_trailing_slash() {
        let client = MlClient::new("http://localhost:5000/api", 30).unwrap();
        assert_eq!(client.base_url.as_str(), "http://localhost:5000/api/");

        let client = MlClient::new("http://localhost:5000/api///", 30).unwrap();
        assert_eq!(client.base_url.as_str(), "http://localhost:5000/api/");
    }

    #[test]
    fn endpoints_join_under_the_base_path() {
        let client = MlClient::new("http://localhost:5000/api", 30).unwrap();
        let url = client.endpoint("predict").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/predict");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = MlClient::new("not a url", 30).unwrap_err();
        assert!(matches!(err, MlClientError::InvalidBaseUrl { .. }));
    }
}
