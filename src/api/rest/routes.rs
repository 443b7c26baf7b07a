use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use uuid::Uuid;

use crate::engine::criteria::{route_tags, RouteCriteria, RouteQuery};
use crate::engine::forms::{build_route, CreateRouteRequest};
use crate::engine::hooks::record_hook;
use crate::engine::listing::list_matching;
use crate::error::AppError;
use crate::models::activity::{ActivityEvent, HookAction};
use crate::models::route::Route;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/routes", get(list_routes).post(create_route))
        .route("/routes/tags", get(list_tags))
        .route("/routes/:id", get(get_route))
        .route("/routes/:id/save", post(save_route))
}

async fn list_routes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Vec<Route>>, AppError> {
    let criteria = RouteCriteria::try_from(query)?;
    let routes = list_matching(&state.routes, &criteria, &state.metrics)?;
    Ok(Json(routes))
}

async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, AppError> {
    let routes = state.routes.snapshot()?;
    Ok(Json(route_tags(&routes)))
}

async fn create_route(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRouteRequest>,
) -> Result<(StatusCode, Json<Route>), AppError> {
    let creator = state.riders.get(payload.creator_id)?;
    let route = build_route(payload, creator)?;

    let size = state.routes.push(route.clone())?;
    state.record_catalog_size(&state.routes, size);

    tracing::info!(
        route_id = %route.id,
        waypoints = route.waypoints.len(),
        "route created"
    );
    Ok((StatusCode::CREATED, Json(route)))
}

async fn get_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Route>, AppError> {
    Ok(Json(state.routes.get(id)?))
}

async fn save_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ActivityEvent>), AppError> {
    let event = record_hook(&state, HookAction::Save, id)?;
    Ok((StatusCode::ACCEPTED, Json(event)))
}
