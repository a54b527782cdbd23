use super::types::{AnalyzeRequest, ErrorResponse, HealthResponse};
use crate::{Error, upstream::UpstreamClient};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Vision relay server is running".to_string(),
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    if request.image.is_empty() || request.prompt.is_empty() {
        warn!("Rejecting analysis request with missing image or prompt");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("Missing image or prompt")),
        ));
    }

    info!(
        "Analyzing image ({} bytes encoded, prompt {} chars)",
        request.image.len(),
        request.prompt.len()
    );

    match state
        .upstream
        .create_completion(&request.image, &request.prompt)
        .await
    {
        Ok(body) => {
            info!("Analysis complete");
            Ok(Json(body))
        }
        Err(Error::Upstream { status, body }) => {
            error!("Upstream call failed with status {}", status);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::upstream(body)),
            ))
        }
        Err(e) => {
            error!("Analysis request failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::message(e.to_string())),
            ))
        }
    }
}
