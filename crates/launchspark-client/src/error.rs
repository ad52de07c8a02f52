//! Error types for the HTTP endpoint.

/// Errors raised while setting up an [`HttpEndpoint`](crate::HttpEndpoint).
///
/// Failures during a submission are reported as
/// [`launchspark_core::EndpointError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Missing or malformed configuration.
    #[error("launchspark config error: {0}")]
    Config(String),

    /// The HTTP client could not be built.
    #[error("launchspark http client error: {0}")]
    Http(#[from] reqwest::Error),
}
