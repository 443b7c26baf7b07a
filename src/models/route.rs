use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::rider::{GeoPoint, Rider};

categorical! {
    RouteDifficulty {
        Easy => "easy",
        Moderate => "moderate",
        Difficult => "difficult",
        Expert => "expert",
    }
}

categorical! {
    WaypointType {
        Start => "start",
        End => "end",
        RestStop => "rest_stop",
        Fuel => "fuel",
        Food => "food",
        Scenic => "scenic",
        Checkpoint => "checkpoint",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: Uuid,
    pub name: String,
    pub coordinates: GeoPoint,
    pub waypoint_type: WaypointType,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub creator: Rider,
    pub waypoints: Vec<Waypoint>,
    pub distance_miles: f64,
    pub estimated_minutes: u32,
    pub difficulty: RouteDifficulty,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}
