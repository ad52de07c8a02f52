//! The remote submission endpoint, seen from the client side.
//!
//! All three lead operations share one request and response shape: a flat
//! JSON object of string fields goes in, an [`ApiResponse`] comes back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EndpointError;
use crate::schema::Operation;

/// Flat request body, keyed by the endpoint's field names.
pub type Payload = BTreeMap<String, String>;

/// Result code the endpoint uses for an accepted request.
pub const CODE_SUCCESS: i64 = 0;

/// Result code the endpoint uses for a declined request.
pub const CODE_FAILURE: i64 = 1;

/// Response document returned by every lead operation.
///
/// `code == 0` is the only success discriminant the controller looks at;
/// `success` is carried for completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    /// An accepted response carrying `message`.
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            code: CODE_SUCCESS,
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A declined response carrying `message`.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            code: CODE_FAILURE,
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// The failure response synthesized for a non-2xx HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self::rejected(format!("Server responded with status: {status}"))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// The message to show the user, treating an empty string as absent.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
    }
}

/// A service that accepts lead submissions.
///
/// Implementations must be safe to share across async tasks. Only failures
/// to obtain a response are reported as `Err`; a request the service
/// declined, including one answered with a non-2xx status, is an `Ok`
/// response with a non-zero code.
#[async_trait::async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    /// Submit `payload` to `operation`.
    ///
    /// # Errors
    ///
    /// Returns an [`EndpointError`] if no response document was obtained.
    async fn submit(
        &self,
        operation: Operation,
        payload: &Payload,
    ) -> Result<ApiResponse, EndpointError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_document() {
        let resp: ApiResponse = serde_json::from_str(r#"{"code":0}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, None);
        assert_eq!(resp.data, None);
    }

    #[test]
    fn decodes_full_document() {
        let resp: ApiResponse = serde_json::from_str(
            r#"{"code":1,"success":false,"message":"Budget too low","data":{"id":7}}"#,
        )
        .unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.message.as_deref(), Some("Budget too low"));
        assert_eq!(resp.data, Some(serde_json::json!({ "id": 7 })));
    }

    #[test]
    fn empty_message_uses_fallback() {
        let mut resp = ApiResponse::accepted("");
        assert_eq!(resp.message_or("Quote request sent!"), "Quote request sent!");
        resp.message = None;
        assert_eq!(resp.message_or("Quote request sent!"), "Quote request sent!");
        resp.message = Some("ok".to_owned());
        assert_eq!(resp.message_or("Quote request sent!"), "ok");
    }

    #[test]
    fn status_failure_mentions_status() {
        let resp = ApiResponse::from_status(500);
        assert_eq!(resp.code, CODE_FAILURE);
        assert!(!resp.success);
        assert!(resp.message_or("").contains("500"));
    }
}
