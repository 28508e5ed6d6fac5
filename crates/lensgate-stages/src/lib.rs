//! Stage handlers for the lensgate classification pipeline.
//!
//! Three stateless stages, each a single envelope-in/envelope-out
//! handler with no retries and no shared state. An external
//! orchestrator sequences them and routes failures.
//!
//! # Architecture
//!
//! - [`FetchStage`] retrieves an object via the [`ObjectStore`] seam
//!   and base64-encodes its bytes
//! - [`InferStage`] decodes the payload and submits it via the
//!   [`InferenceEndpoint`] seam, parsing the returned probability
//!   vector
//! - [`GateStage`] passes only when a class confidence clears
//!   [`CONFIDENCE_THRESHOLD`]
//!
//! The production collaborator implementations ([`HttpObjectStore`],
//! [`HttpInferenceEndpoint`]) speak plain HTTP; tests swap in doubles
//! or a local mock server.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lensgate_stages::{FetchStage, HttpObjectStore};
//! use lensgate_types::FetchRequest;
//!
//! let stage = FetchStage::new(HttpObjectStore::new("https://storage.example.com"));
//! let envelope = stage
//!     .handle(FetchRequest {
//!         storage_location: "images".into(),
//!         object_key: "test/bike.png".into(),
//!     })
//!     .await?;
//! println!("{}", envelope.body.encoded_payload);
//! ```

pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod gate;
pub mod infer;
pub mod store;

pub use endpoint::{HttpInferenceEndpoint, InferenceEndpoint, IMAGE_CONTENT_TYPE};
pub use error::{Result, StageError};
pub use fetch::FetchStage;
pub use gate::{GateStage, CONFIDENCE_THRESHOLD};
pub use infer::InferStage;
pub use store::{HttpObjectStore, ObjectStore};
