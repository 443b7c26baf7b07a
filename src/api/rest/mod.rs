pub mod riders;
pub mod rides;
pub mod routes;
pub mod ws;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .merge(riders::router())
        .merge(rides::router())
        .merge(routes::router())
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .fallback_service(ServeDir::new(static_dir))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    riders: usize,
    rides: usize,
    routes: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok",
        riders: state.riders.len()?,
        rides: state.rides.len()?,
        routes: state.routes.len()?,
    }))
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}
