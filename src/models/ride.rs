use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::rider::{GeoPoint, Rider, SkillLevel};

categorical! {
    RideType {
        Cruise => "cruise",
        Sport => "sport",
        Touring => "touring",
        Beginner => "beginner",
        Adventure => "adventure",
        TrackDay => "track_day",
    }
}

categorical! {
    RideStatus {
        Planning => "planning",
        Active => "active",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingLocation {
    pub name: String,
    pub address: String,
    pub coordinates: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub organizer: Rider,
    pub date: DateTime<Utc>,
    pub meeting_location: MeetingLocation,
    pub ride_type: RideType,
    pub skill_level: SkillLevel,
    pub max_riders: Option<u32>,
    pub current_riders: Vec<Rider>,
    pub status: RideStatus,
    pub created_at: DateTime<Utc>,
}

impl Ride {
    /// Remaining seats, or `None` when the ride has no capacity limit.
    pub fn open_spots(&self) -> Option<u32> {
        self.max_riders
            .map(|max| max.saturating_sub(self.current_riders.len() as u32))
    }
}
