//! Infer stage.
//!
//! Decodes the payload produced by the fetch stage, submits the raw
//! bytes to a named hosted endpoint, and parses the endpoint's textual
//! response into a probability vector.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use lensgate_types::{InferBody, InferRequest, StageConfig, StageResponse};

use crate::endpoint::InferenceEndpoint;
use crate::error::{Result, StageError};

/// Second pipeline stage: classify an image via a hosted endpoint.
#[derive(Debug)]
pub struct InferStage<E> {
    endpoint: E,
    config: StageConfig,
}

impl<E: InferenceEndpoint> InferStage<E> {
    /// Create the stage over an endpoint collaborator and the
    /// process-wide configuration.
    pub fn new(endpoint: E, config: StageConfig) -> Self {
        Self { endpoint, config }
    }

    /// Resolve the endpoint name: a non-empty field in the input wins
    /// over the configured default.
    fn resolve_endpoint<'a>(&'a self, req: &'a InferRequest) -> Result<&'a str> {
        req.endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .or(self.config.default_endpoint.as_deref())
            .ok_or(StageError::EndpointNotConfigured)
    }

    /// Decode the payload, run inference, and return the parsed
    /// probability vector.
    ///
    /// Endpoint-side failures and malformed payloads are fatal; the
    /// stage performs no retries and no circuit breaking.
    pub async fn handle(&self, req: InferRequest) -> Result<StageResponse<InferBody>> {
        let endpoint = self.resolve_endpoint(&req)?;

        let image = BASE64
            .decode(&req.encoded_payload)
            .map_err(|e| StageError::InvalidPayload(e.to_string()))?;

        debug!(endpoint, len = image.len(), "infer stage invoked");

        let raw = self.endpoint.predict(endpoint, image).await?;

        // The response body is textual JSON: one confidence per class.
        let inferences: Vec<f64> = serde_json::from_slice(&raw).map_err(|e| {
            StageError::InvalidResponse(format!("endpoint response is not a number array: {e}"))
        })?;

        debug!(endpoint, classes = inferences.len(), "inference complete");

        Ok(StageResponse::ok(InferBody { inferences }))
    }
}
