use thiserror::Error;

/// Errors returned by the remote scoring-service client.
#[derive(Debug, Error)]
pub enum MlClientError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// non-2xx statuses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No remote service is configured; only the status probe is usable.
    #[error("remote scoring service is not configured")]
    Disabled,
}
