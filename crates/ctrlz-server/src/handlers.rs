//! HTTP Handlers

use axum::{
    Json, Router,
    extract::State,
    handler::Handler,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use ctrlz_core::routes;
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Serve `index.html` for paths the front-end router owns
///
/// Reached only when no file in the static directory matched.
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if !routes::is_client_route(uri.path()) {
        return (StatusCode::NOT_FOUND, "Page not found").into_response();
    }

    let index = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Cannot read {}: {}", index.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Front-end not built").into_response()
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir)
        .fallback(spa_fallback.with_state(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
