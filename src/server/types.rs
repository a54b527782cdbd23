use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Body of `POST /api/analyze`. Both fields default to empty so that missing
/// fields reach the handler and get the relay's own 400 envelope instead of
/// axum's 422 rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error envelope: `{ "error": ... }`. The error value is either a locally
/// constructed `{ "message": ... }` object or the upstream response body passed
/// through unchanged.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl ErrorResponse {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            error: json!({ "message": msg.into() }),
        }
    }

    pub fn upstream(body: Value) -> Self {
        Self { error: body }
    }
}
