//! Fetch-and-encode stage.
//!
//! Retrieves one object from storage and produces the base64 encoding
//! that moves its bytes through the pipeline envelope.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use lensgate_types::{FetchBody, FetchRequest, StageResponse};

use crate::error::Result;
use crate::store::ObjectStore;

/// First pipeline stage: retrieve and encode an object.
///
/// Stateless; every invocation is an independent unit of work against
/// the injected [`ObjectStore`].
#[derive(Debug)]
pub struct FetchStage<S> {
    store: S,
}

impl<S: ObjectStore> FetchStage<S> {
    /// Create the stage over a storage collaborator.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Retrieve the referenced object and return its encoded payload.
    ///
    /// The object reference fields are echoed in the output body so
    /// downstream steps keep provenance. Storage errors propagate
    /// untouched; the stage performs no retries.
    pub async fn handle(&self, req: FetchRequest) -> Result<StageResponse<FetchBody>> {
        debug!(
            storage_location = %req.storage_location,
            object_key = %req.object_key,
            "fetch stage invoked"
        );

        let bytes = self
            .store
            .get(&req.storage_location, &req.object_key)
            .await?;
        let encoded_payload = BASE64.encode(&bytes);

        Ok(StageResponse::ok(FetchBody {
            encoded_payload,
            storage_location: req.storage_location,
            object_key: req.object_key,
        }))
    }
}
