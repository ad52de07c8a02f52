//! `HttpEndpoint` implementation.

use launchspark_core::{ApiResponse, EndpointError, Operation, Payload, SubmissionEndpoint};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Submits leads to the remote API over HTTP.
///
/// Requests are sent once; failed attempts are not retried.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEndpoint {
    /// Build an endpoint from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` for an unusable base URL, or
    /// `ClientError::Http` if the HTTP client cannot be constructed.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.normalized_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of `operation`.
    #[must_use]
    pub fn url_for(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }
}

#[async_trait::async_trait]
impl SubmissionEndpoint for HttpEndpoint {
    async fn submit(
        &self,
        operation: Operation,
        payload: &Payload,
    ) -> Result<ApiResponse, EndpointError> {
        let url = self.url_for(operation);
        debug!(%url, fields = payload.len(), "posting lead");

        let resp = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "endpoint returned error status");
            return Ok(ApiResponse::from_status(status.as_u16()));
        }

        let text = resp.text().await.map_err(transport_error)?;
        serde_json::from_str(&text).map_err(|e| EndpointError::Decode {
            reason: e.to_string(),
        })
    }
}

fn transport_error(e: reqwest::Error) -> EndpointError {
    if e.is_timeout() {
        EndpointError::Timeout
    } else {
        EndpointError::Transport {
            reason: e.to_string(),
        }
    }
}
