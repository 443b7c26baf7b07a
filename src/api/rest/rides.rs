use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use uuid::Uuid;

use crate::engine::criteria::{RideCriteria, RideQuery};
use crate::engine::forms::{build_ride, CreateRideRequest};
use crate::engine::hooks::record_hook;
use crate::engine::listing::list_matching;
use crate::error::AppError;
use crate::models::activity::{ActivityEvent, HookAction};
use crate::models::ride::Ride;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rides", get(list_rides).post(create_ride))
        .route("/rides/:id", get(get_ride))
        .route("/rides/:id/join", post(join_ride))
}

async fn list_rides(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RideQuery>,
) -> Result<Json<Vec<Ride>>, AppError> {
    let criteria = RideCriteria::try_from(query)?;
    let rides = list_matching(&state.rides, &criteria, &state.metrics)?;
    Ok(Json(rides))
}

async fn create_ride(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRideRequest>,
) -> Result<(StatusCode, Json<Ride>), AppError> {
    let organizer = state.riders.get(payload.organizer_id)?;
    let ride = build_ride(payload, organizer)?;

    let size = state.rides.push(ride.clone())?;
    state.record_catalog_size(&state.rides, size);

    tracing::info!(ride_id = %ride.id, ride_type = %ride.ride_type, "ride created");
    Ok((StatusCode::CREATED, Json(ride)))
}

async fn get_ride(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ride>, AppError> {
    Ok(Json(state.rides.get(id)?))
}

async fn join_ride(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ActivityEvent>), AppError> {
    let event = record_hook(&state, HookAction::Join, id)?;
    Ok((StatusCode::ACCEPTED, Json(event)))
}
