//! The [`InferenceEndpoint`] seam and its HTTP implementation.
//!
//! The infer stage submits raw image bytes to a named hosted endpoint
//! and receives the endpoint's textual response body back. Parsing
//! that body into a probability vector is the stage's job, not the
//! client's.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{Result, StageError};

/// Content type for every inference request. The hosted model accepts
/// a single binary-image media type; there is no negotiation.
pub const IMAGE_CONTENT_TYPE: &str = "image/png";

/// A hosted prediction service that classifies one image per call.
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    /// Submit `image` to the endpoint named `endpoint` and return the
    /// raw response body.
    ///
    /// # Errors
    ///
    /// [`StageError::EndpointNotFound`] when no such endpoint exists
    /// or it is not ready, [`StageError::InferenceFailed`] when the
    /// endpoint rejects the request or fails server-side.
    async fn predict(&self, endpoint: &str, image: Vec<u8>) -> Result<Vec<u8>>;
}

/// [`InferenceEndpoint`] backed by an HTTP invocation API.
///
/// Requests are POSTed to `{base_url}/endpoints/{name}/invocations`
/// with the fixed [`IMAGE_CONTENT_TYPE`].
#[derive(Debug, Clone)]
pub struct HttpInferenceEndpoint {
    base_url: String,
    http: reqwest::Client,
}

impl HttpInferenceEndpoint {
    /// Create an endpoint client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the invocation URL for a named endpoint.
    fn invocation_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/endpoints/{endpoint}/invocations")
    }
}

#[async_trait]
impl InferenceEndpoint for HttpInferenceEndpoint {
    async fn predict(&self, endpoint: &str, image: Vec<u8>) -> Result<Vec<u8>> {
        let url = self.invocation_url(endpoint);

        debug!(endpoint, len = image.len(), "invoking inference endpoint");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", IMAGE_CONTENT_TYPE)
            .body(image)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, status = status.as_u16(), "inference invocation failed");

            if status.as_u16() == 404 {
                return Err(StageError::EndpointNotFound(endpoint.to_string()));
            }

            return Err(StageError::InferenceFailed(format!("HTTP {status}: {body}")));
        }

        let bytes = response.bytes().await?;
        debug!(endpoint, len = bytes.len(), "inference response received");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_url_construction() {
        let client = HttpInferenceEndpoint::new("https://inference.example.com");
        assert_eq!(
            client.invocation_url("img-classifier"),
            "https://inference.example.com/endpoints/img-classifier/invocations"
        );
    }

    #[test]
    fn invocation_url_strips_trailing_slash() {
        let client = HttpInferenceEndpoint::new("https://inference.example.com/");
        assert_eq!(
            client.invocation_url("ep-1"),
            "https://inference.example.com/endpoints/ep-1/invocations"
        );
    }
}
