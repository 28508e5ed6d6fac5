//! Threshold-gate stage.
//!
//! Inspects the probability vector and decides whether the pipeline
//! continues. The decision is control flow, not data: pass returns an
//! empty body, fail raises the fixed-sentinel error.

use tracing::debug;

use lensgate_types::{GateBody, GateRequest, StageResponse};

use crate::error::{Result, StageError};

/// Confidence a class must strictly exceed for the gate to pass.
pub const CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Final pipeline stage: halt unless some class is confident enough.
#[derive(Debug, Default)]
pub struct GateStage;

impl GateStage {
    /// Create the stage. It carries no state.
    pub fn new() -> Self {
        Self
    }

    /// Pass iff any confidence is strictly greater than
    /// [`CONFIDENCE_THRESHOLD`].
    ///
    /// An empty vector never exceeds the threshold and always fails.
    /// Failure is [`StageError::ThresholdNotMet`], whose message is
    /// the sentinel the orchestrator routes to its failure path.
    pub fn handle(&self, req: GateRequest) -> Result<StageResponse<GateBody>> {
        let best = req
            .inferences
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        debug!(classes = req.inferences.len(), best, "gate stage invoked");

        if req.inferences.iter().any(|&x| x > CONFIDENCE_THRESHOLD) {
            Ok(StageResponse::ok(GateBody {}))
        } else {
            Err(StageError::ThresholdNotMet)
        }
    }
}
