//! The [`ObjectStore`] seam and its HTTP implementation.
//!
//! The fetch stage reads exactly one immutable blob per invocation.
//! Production talks to an S3-compatible service with path-style GETs;
//! tests substitute an in-memory double or a local mock server.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{Result, StageError};

/// Read-only access to a single object in storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieve the full bytes of `key` within `location`.
    ///
    /// # Errors
    ///
    /// [`StageError::ObjectNotFound`] when the object does not exist,
    /// [`StageError::AccessDenied`] when the read is not authorized,
    /// [`StageError::RequestFailed`] for any other storage-side
    /// failure. None of these are retried here.
    async fn get(&self, location: &str, key: &str) -> Result<Vec<u8>>;
}

/// [`ObjectStore`] backed by an S3-compatible HTTP service.
///
/// Objects are addressed path-style: `{base_url}/{location}/{key}`.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    base_url: String,
    http: reqwest::Client,
}

impl HttpObjectStore {
    /// Create a store client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the path-style URL for an object.
    fn object_url(&self, location: &str, key: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{location}/{key}")
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn get(&self, location: &str, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(location, key);

        debug!(location, key, "fetching object");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(location, key, status = status.as_u16(), "object fetch failed");

            if status.as_u16() == 404 {
                return Err(StageError::ObjectNotFound {
                    location: location.to_string(),
                    key: key.to_string(),
                });
            }

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(StageError::AccessDenied {
                    location: location.to_string(),
                    key: key.to_string(),
                });
            }

            let body = response.text().await.unwrap_or_default();
            return Err(StageError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        let bytes = response.bytes().await?;
        debug!(location, key, len = bytes.len(), "object fetched");
        Ok(bytes.to_vec())
    }
}
