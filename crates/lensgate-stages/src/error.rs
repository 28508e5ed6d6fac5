//! Stage error types.
//!
//! All stage operations return [`Result<T>`] which uses [`StageError`]
//! as the error type. Nothing here is retried or recovered inside a
//! stage; every error propagates to the caller, which decides whether
//! to retry, fail the pipeline, or branch to remediation.

use thiserror::Error;

/// Errors a stage can surface to its caller.
///
/// Infrastructure failures (storage, endpoint, configuration) and the
/// deliberate gate failure are separate variants so callers can
/// pattern-match instead of string-matching.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StageError {
    /// The referenced object does not exist in storage.
    #[error("object not found: {location}/{key}")]
    ObjectNotFound {
        /// Storage location that was queried.
        location: String,
        /// Key that was not found.
        key: String,
    },

    /// The caller is not allowed to read the referenced object.
    #[error("access denied: {location}/{key}")]
    AccessDenied {
        /// Storage location that rejected the read.
        location: String,
        /// Key the read was rejected for.
        key: String,
    },

    /// No endpoint in the input envelope and no configured default.
    #[error("no inference endpoint configured")]
    EndpointNotConfigured,

    /// The named endpoint does not exist or is not ready.
    #[error("endpoint not found: {0}")]
    EndpointNotFound(String),

    /// The endpoint accepted the request but failed to produce a
    /// prediction.
    #[error("inference failed: {0}")]
    InferenceFailed(String),

    /// The encoded payload is not valid base64.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// A collaborator returned a response that could not be parsed.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A collaborator returned an unexpected non-success status.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// No class confidence cleared the threshold. This is a business
    /// rule halting the pipeline, not an infrastructure fault; the
    /// message is a fixed sentinel the orchestrator can route on.
    #[error("THRESHOLD_CONFIDENCE_NOT_MET")]
    ThresholdNotMet,

    /// An HTTP-level error from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias for stage operations.
pub type Result<T> = std::result::Result<T, StageError>;
