//! HTTP client for the assessment service.
//!
//! Implements the three service operations: loading a response record,
//! exporting its PDF report, and submitting an access-code request.

use crate::models::{AccessRequest, AccessRequestAck, ApiEnvelope, ResponseData};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced at the service boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The server could not be reached.
    #[error("cannot connect to server at {0}")]
    Connect(String),

    /// The requested response record does not exist.
    #[error("response record not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },

    /// The response body could not be decoded.
    #[error("malformed response payload: {0}")]
    Malformed(String),

    /// The server answered well-formed but unsuccessful.
    #[error("request was not accepted by the server")]
    Rejected,

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Operations the assessment service exposes.
#[async_trait]
pub trait ResponseApi: Send + Sync {
    /// Load the full response record (metadata plus answers) by identifier.
    async fn fetch_response(&self, id: &str) -> Result<ResponseData, ApiError>;

    /// Fetch the binary PDF report for a response record.
    async fn export_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError>;

    /// Submit an access-code request. A well-formed `{ "success": false }`
    /// reply is reported as [`ApiError::Rejected`].
    async fn request_access(&self, request: &AccessRequest) -> Result<(), ApiError>;
}

/// Production implementation backed by reqwest.
pub struct HttpResponseApi {
    base_url: String,
    timeout_seconds: u64,
    client: reqwest::Client,
}

impl HttpResponseApi {
    /// Create a client for the given base URL with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            base_url,
            timeout_seconds,
            client,
        })
    }

    fn response_url(&self, id: &str) -> String {
        format!("{}/api/responses/{}", self.base_url, id)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.timeout_seconds)
        } else if e.is_connect() {
            ApiError::Connect(self.base_url.clone())
        } else {
            ApiError::Http(e)
        }
    }

    /// Turn a non-success status into the matching error variant.
    async fn check_status(
        response: reqwest::Response,
        id: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(ApiError::NotFound(id.to_string()));
            }
        }

        let body = response.text().await.unwrap_or_default();
        warn!("server error {}: {}", status, body);
        Err(ApiError::Status { status, body })
    }
}

#[async_trait]
impl ResponseApi for HttpResponseApi {
    async fn fetch_response(&self, id: &str) -> Result<ResponseData, ApiError> {
        let url = self.response_url(id);
        debug!("fetching response record: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response, Some(id)).await?;

        let envelope: ApiEnvelope<ResponseData> = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        debug!(
            "loaded response {} with {} answers",
            envelope.data.response.id,
            envelope.data.answers.len()
        );
        Ok(envelope.data)
    }

    async fn export_pdf(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/pdf", self.response_url(id));
        debug!("requesting PDF export: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response, Some(id)).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        debug!("received PDF payload ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }

    async fn request_access(&self, request: &AccessRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/responses/access-request", self.base_url);
        debug!("submitting access request for {}", request.email);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response, None).await?;

        let ack: AccessRequestAck = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let api = HttpResponseApi::new("http://localhost:3000/", 30).unwrap();
        assert_eq!(
            api.response_url("abc123"),
            "http://localhost:3000/api/responses/abc123"
        );
    }

    #[test]
    fn test_export_url_shape() {
        let api = HttpResponseApi::new("http://localhost:3000", 30).unwrap();
        let url = format!("{}/pdf", api.response_url("abc123"));
        assert_eq!(url, "http://localhost:3000/api/responses/abc123/pdf");
    }
}
