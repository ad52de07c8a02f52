//! Error types for `launchspark-core`.
//!
//! Field validation problems are not errors in this sense: they live in the
//! [`ErrorMap`](crate::form::ErrorMap) and never leave the controller. The
//! only failure that crosses a crate boundary is an endpoint call that did
//! not complete.

/// A submission endpoint call that did not produce a response.
///
/// HTTP status failures are not represented here. The endpoint translates
/// those into a failure [`ApiResponse`](crate::endpoint::ApiResponse).
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The request could not be sent or the connection dropped.
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The endpoint answered with a success status but the body was not a
    /// valid response document.
    #[error("malformed response body: {reason}")]
    Decode { reason: String },
}
