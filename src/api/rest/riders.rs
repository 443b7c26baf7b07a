use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::engine::criteria::{RiderCriteria, RiderQuery};
use crate::engine::forms::{apply_profile, build_bike, AddBikeRequest, EditProfileRequest};
use crate::engine::hooks::record_hook;
use crate::engine::listing::list_matching;
use crate::error::AppError;
use crate::models::activity::{ActivityEvent, HookAction};
use crate::models::rider::Rider;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/riders", get(list_riders))
        .route("/riders/:id", get(get_rider).patch(edit_profile))
        .route("/riders/:id/bikes", post(add_bike))
        .route("/riders/:id/connect", post(connect))
}

async fn list_riders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RiderQuery>,
) -> Result<Json<Vec<Rider>>, AppError> {
    let criteria = RiderCriteria::try_from(query)?;
    let riders = list_matching(&state.riders, &criteria, &state.metrics)?;
    Ok(Json(riders))
}

async fn get_rider(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Rider>, AppError> {
    Ok(Json(state.riders.get(id)?))
}

async fn edit_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditProfileRequest>,
) -> Result<Json<Rider>, AppError> {
    let rider = state
        .riders
        .update(id, |rider| apply_profile(rider, payload))?;

    tracing::info!(rider_id = %id, "profile updated");
    Ok(Json(rider))
}

async fn add_bike(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddBikeRequest>,
) -> Result<Json<Rider>, AppError> {
    let bike = build_bike(payload, Utc::now().year())?;
    let bike_id = bike.id;

    let rider = state.riders.update(id, |rider| {
        rider.bikes.push(bike);
        Ok(())
    })?;

    tracing::info!(rider_id = %id, bike_id = %bike_id, "bike added");
    Ok(Json(rider))
}

async fn connect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ActivityEvent>), AppError> {
    let event = record_hook(&state, HookAction::Connect, id)?;
    Ok((StatusCode::ACCEPTED, Json(event)))
}
