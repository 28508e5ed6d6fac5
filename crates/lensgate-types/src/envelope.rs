//! Stage input/output envelope types.
//!
//! Each stage receives one JSON mapping and returns
//! `{"statusCode": 200, "body": {...}}` on success. The orchestrator
//! owns step-to-step data passing and may carry extra keys alongside
//! these; stages only read the keys named here.

use serde::{Deserialize, Serialize};

/// Success envelope returned by every stage.
///
/// `statusCode` is the literal wire name the orchestrator expects, so
/// it is renamed rather than snake-cased away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResponse<B> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: B,
}

impl<B> StageResponse<B> {
    /// Wrap a stage body in a 200 envelope.
    pub fn ok(body: B) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}

/// Input to the fetch-and-encode stage: a reference to one immutable
/// object in storage. Created externally before the pipeline starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Storage location (bucket) holding the object.
    pub storage_location: String,
    /// Key of the object within the location.
    pub object_key: String,
}

/// Output body of the fetch-and-encode stage.
///
/// Echoes the object reference so downstream steps keep provenance
/// without the orchestrator having to merge envelopes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchBody {
    /// Base64 encoding of the object bytes. Round-trips exactly.
    pub encoded_payload: String,
    pub storage_location: String,
    pub object_key: String,
}

/// Input to the infer stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferRequest {
    /// Base64 payload produced by the fetch stage.
    pub encoded_payload: String,
    /// Endpoint to invoke. When present and non-empty this wins over
    /// the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Output body of the infer stage: one confidence score per class, in
/// the order the endpoint returned them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferBody {
    pub inferences: Vec<f64>,
}

/// Input to the threshold gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRequest {
    pub inferences: Vec<f64>,
}

/// Empty body returned on gate pass: continue, nothing to add.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateBody {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_status_code_wire_name() {
        let resp = StageResponse::ok(GateBody {});
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"statusCode": 200, "body": {}}));
    }

    #[test]
    fn fetch_request_deserializes() {
        let req: FetchRequest = serde_json::from_str(
            r#"{"storage_location": "images", "object_key": "test/bike.png"}"#,
        )
        .unwrap();
        assert_eq!(req.storage_location, "images");
        assert_eq!(req.object_key, "test/bike.png");
    }

    #[test]
    fn fetch_body_echoes_object_reference() {
        let body = FetchBody {
            encoded_payload: "aGVsbG8=".into(),
            storage_location: "images".into(),
            object_key: "a.png".into(),
        };
        let json = serde_json::to_value(StageResponse::ok(body)).unwrap();
        assert_eq!(json["body"]["encoded_payload"], "aGVsbG8=");
        assert_eq!(json["body"]["storage_location"], "images");
        assert_eq!(json["body"]["object_key"], "a.png");
    }

    #[test]
    fn infer_request_endpoint_defaults_to_none() {
        let req: InferRequest =
            serde_json::from_str(r#"{"encoded_payload": "aGVsbG8="}"#).unwrap();
        assert!(req.endpoint.is_none());
    }

    #[test]
    fn infer_request_explicit_endpoint() {
        let req: InferRequest =
            serde_json::from_str(r#"{"encoded_payload": "aGVsbG8=", "endpoint": "ep-1"}"#)
                .unwrap();
        assert_eq!(req.endpoint.as_deref(), Some("ep-1"));
    }

    #[test]
    fn infer_request_omits_absent_endpoint_on_serialize() {
        let req = InferRequest {
            encoded_payload: "aGVsbG8=".into(),
            endpoint: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("endpoint").is_none());
    }

    #[test]
    fn gate_request_preserves_order() {
        let req: GateRequest =
            serde_json::from_str(r#"{"inferences": [0.6, 0.4]}"#).unwrap();
        assert_eq!(req.inferences, vec![0.6, 0.4]);
    }

    #[test]
    fn gate_body_is_empty_object() {
        let json = serde_json::to_string(&GateBody {}).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        // The orchestrator may accumulate fields from prior stages.
        let req: GateRequest = serde_json::from_str(
            r#"{"inferences": [0.9], "encoded_payload": "aGVsbG8=", "object_key": "a.png"}"#,
        )
        .unwrap();
        assert_eq!(req.inferences, vec![0.9]);
    }
}
