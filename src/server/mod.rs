pub mod handlers;
pub mod types;

use crate::{Result, config::Config, upstream::HttpUpstreamClient};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use handlers::AppState;

/// Builds the relay router. Oversized bodies are rejected with 413 by the body
/// limit layer before the handler runs.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // The credential travels inside the client, injected once at startup.
    let upstream = HttpUpstreamClient::new(config.upstream.clone());

    let app_state = AppState {
        upstream: Arc::new(upstream),
    };

    let app = router(app_state, config.server.max_body_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting relay server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
