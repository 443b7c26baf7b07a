use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::ride::{MeetingLocation, Ride, RideStatus, RideType};
use crate::models::rider::{Bike, BikeType, GeoPoint, Rider, RidingStyle, SkillLevel};
use crate::models::route::{Route, RouteDifficulty, Waypoint, WaypointType};

const OLDEST_BIKE_YEAR: i32 = 1900;

#[derive(Debug, Deserialize)]
pub struct CreateRideRequest {
    pub organizer_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub meeting_location: MeetingLocation,
    pub ride_type: RideType,
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub max_riders: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WaypointInput {
    pub name: String,
    pub coordinates: GeoPoint,
    pub waypoint_type: WaypointType,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRouteRequest {
    pub creator_id: Uuid,
    pub name: String,
    pub description: String,
    pub waypoints: Vec<WaypointInput>,
    pub difficulty: RouteDifficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default)]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct EditProfileRequest {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub city: String,
    pub state: String,
    pub skill_level: SkillLevel,
    pub riding_styles: Vec<RidingStyle>,
}

#[derive(Debug, Deserialize)]
pub struct AddBikeRequest {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub bike_type: BikeType,
    #[serde(default)]
    pub mods: Vec<String>,
}

fn default_public() -> bool {
    true
}

pub fn build_ride(payload: CreateRideRequest, organizer: Rider) -> Result<Ride, AppError> {
    if payload.max_riders == Some(0) {
        return Err(AppError::BadRequest("max_riders must be > 0".to_string()));
    }

    if !payload.meeting_location.coordinates.is_valid() {
        return Err(AppError::BadRequest(
            "meeting_location coordinates are out of range".to_string(),
        ));
    }

    let meeting_location = MeetingLocation {
        name: required("meeting_location.name", &payload.meeting_location.name)?,
        address: payload.meeting_location.address.trim().to_string(),
        coordinates: payload.meeting_location.coordinates,
    };

    Ok(Ride {
        id: Uuid::new_v4(),
        title: required("title", &payload.title)?,
        description: required("description", &payload.description)?,
        organizer,
        date: payload.date,
        meeting_location,
        ride_type: payload.ride_type,
        skill_level: payload.skill_level,
        max_riders: payload.max_riders,
        current_riders: Vec::new(),
        status: RideStatus::Planning,
        created_at: Utc::now(),
    })
}

pub fn build_route(payload: CreateRouteRequest, creator: Rider) -> Result<Route, AppError> {
    if payload.waypoints.is_empty() {
        return Err(AppError::BadRequest(
            "a route needs at least one waypoint".to_string(),
        ));
    }

    let waypoints = payload
        .waypoints
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            if !input.coordinates.is_valid() {
                return Err(AppError::BadRequest(format!(
                    "waypoint {index} coordinates are out of range"
                )));
            }

            Ok(Waypoint {
                id: Uuid::new_v4(),
                name: required("waypoint.name", &input.name)?,
                coordinates: input.coordinates,
                waypoint_type: input.waypoint_type,
                description: non_blank(input.description),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let distance_miles = payload.distance_miles.unwrap_or(0.0);
    if !distance_miles.is_finite() || distance_miles < 0.0 {
        return Err(AppError::BadRequest(
            "distance_miles must be a non-negative number".to_string(),
        ));
    }

    Ok(Route {
        id: Uuid::new_v4(),
        name: required("name", &payload.name)?,
        description: required("description", &payload.description)?,
        creator,
        waypoints,
        distance_miles,
        estimated_minutes: payload.estimated_minutes.unwrap_or(0),
        difficulty: payload.difficulty,
        tags: trimmed_list(payload.tags),
        is_public: payload.is_public,
        created_at: Utc::now(),
    })
}

/// Validates `payload` fully before touching `rider`.
pub fn apply_profile(rider: &mut Rider, payload: EditProfileRequest) -> Result<(), AppError> {
    let name = required("name", &payload.name)?;
    let city = required("city", &payload.city)?;
    let state = required("state", &payload.state)?;

    let mut riding_styles = Vec::with_capacity(payload.riding_styles.len());
    for style in payload.riding_styles {
        if !riding_styles.contains(&style) {
            riding_styles.push(style);
        }
    }
    if riding_styles.is_empty() {
        return Err(AppError::BadRequest(
            "at least one riding style is required".to_string(),
        ));
    }

    rider.name = name;
    rider.bio = non_blank(payload.bio);
    rider.location.city = city;
    rider.location.state = state;
    rider.skill_level = payload.skill_level;
    rider.riding_styles = riding_styles;
    Ok(())
}

pub fn build_bike(payload: AddBikeRequest, current_year: i32) -> Result<Bike, AppError> {
    let year = i32::from(payload.year);
    if !(OLDEST_BIKE_YEAR..=current_year + 1).contains(&year) {
        return Err(AppError::BadRequest(format!(
            "year must be between {OLDEST_BIKE_YEAR} and {}",
            current_year + 1
        )));
    }

    Ok(Bike {
        id: Uuid::new_v4(),
        make: required("make", &payload.make)?,
        model: required("model", &payload.model)?,
        year: payload.year,
        bike_type: payload.bike_type,
        mods: trimmed_list(payload.mods),
    })
}

fn required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} cannot be empty")));
    }
    Ok(value.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn trimmed_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
