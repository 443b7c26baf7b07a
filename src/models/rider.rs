use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

categorical! {
    RidingStyle {
        Cruise => "cruise",
        Sport => "sport",
        Touring => "touring",
        Adventure => "adventure",
        Track => "track",
        Street => "street",
    }
}

categorical! {
    BikeType {
        Sport => "sport",
        Cruiser => "cruiser",
        Touring => "touring",
        Adventure => "adventure",
        Standard => "standard",
        DualSport => "dual_sport",
        Scooter => "scooter",
    }
}

categorical! {
    /// Shared by riders (self-assessed) and rides (required level).
    SkillLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Expert => "expert",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeLocation {
    pub city: String,
    pub state: String,
    pub coordinates: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub bike_type: BikeType,
    pub mods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub location: HomeLocation,
    pub bikes: Vec<Bike>,
    pub riding_styles: Vec<RidingStyle>,
    pub skill_level: SkillLevel,
    pub badges: Vec<Badge>,
    pub total_miles: u32,
    pub rides_completed: u32,
    pub created_at: DateTime<Utc>,
}
