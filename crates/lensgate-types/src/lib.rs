//! Core types for the lensgate classification pipeline.
//!
//! The pipeline is three stateless stages sequenced by an external
//! orchestrator: fetch-and-encode, infer, threshold-gate. Each stage is
//! invoked with a single JSON mapping and returns a single success
//! envelope (or fails, which is the orchestrator's signal to stop).
//! This crate holds the envelope shapes each stage reads and writes,
//! plus the process-wide stage configuration.

pub mod config;
pub mod envelope;

pub use config::StageConfig;
pub use envelope::{
    FetchBody, FetchRequest, GateBody, GateRequest, InferBody, InferRequest, StageResponse,
};
