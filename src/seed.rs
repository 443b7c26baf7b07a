//! Demo dataset loaded into the catalogues at startup when `SEED_DEMO_DATA`
//! is enabled. Ids are fixed so clients and tests can address records.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::ride::{MeetingLocation, Ride, RideStatus, RideType};
use crate::models::rider::{
    Badge, Bike, BikeType, GeoPoint, HomeLocation, Rider, RidingStyle, SkillLevel,
};
use crate::models::route::{Route, RouteDifficulty, Waypoint, WaypointType};

pub const MIKE_ID: Uuid = Uuid::from_u128(0x1000_0000_0000_0000_0000_0000_0000_0001);
pub const SARAH_ID: Uuid = Uuid::from_u128(0x1000_0000_0000_0000_0000_0000_0000_0002);
pub const ALEX_ID: Uuid = Uuid::from_u128(0x1000_0000_0000_0000_0000_0000_0000_0003);

pub const SUNDAY_CRUISE_ID: Uuid = Uuid::from_u128(0x2000_0000_0000_0000_0000_0000_0000_0001);
pub const MOUNTAIN_ROADS_ID: Uuid = Uuid::from_u128(0x2000_0000_0000_0000_0000_0000_0000_0002);

pub const PACIFIC_COAST_ID: Uuid = Uuid::from_u128(0x3000_0000_0000_0000_0000_0000_0000_0001);
pub const TAIL_OF_DRAGON_ID: Uuid = Uuid::from_u128(0x3000_0000_0000_0000_0000_0000_0000_0002);
pub const BLUE_RIDGE_ID: Uuid = Uuid::from_u128(0x3000_0000_0000_0000_0000_0000_0000_0003);

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seeded_id(kind: u128, n: u128) -> Uuid {
    Uuid::from_u128((kind << 112) | n)
}

fn badge(n: u128, name: &str, description: &str, icon: &str, earned_at: DateTime<Utc>) -> Badge {
    Badge {
        id: seeded_id(0x5000, n),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        earned_at,
    }
}

fn bike(n: u128, make: &str, model: &str, year: u16, bike_type: BikeType, mods: &[&str]) -> Bike {
    Bike {
        id: seeded_id(0x4000, n),
        make: make.to_string(),
        model: model.to_string(),
        year,
        bike_type,
        mods: mods.iter().map(|m| m.to_string()).collect(),
    }
}

fn waypoint(n: u128, name: &str, lat: f64, lng: f64, waypoint_type: WaypointType) -> Waypoint {
    Waypoint {
        id: seeded_id(0x6000, n),
        name: name.to_string(),
        coordinates: GeoPoint { lat, lng },
        waypoint_type,
        description: None,
    }
}

pub fn demo_riders() -> Vec<Rider> {
    vec![
        Rider {
            id: MIKE_ID,
            name: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
            bio: Some("Love cruising on my Harley. Always up for a weekend ride!".to_string()),
            location: HomeLocation {
                city: "New York".to_string(),
                state: "NY".to_string(),
                coordinates: GeoPoint { lat: 40.7128, lng: -74.0060 },
            },
            bikes: vec![bike(
                1,
                "Harley-Davidson",
                "Street Glide",
                2020,
                BikeType::Cruiser,
                &["Exhaust", "Air Filter"],
            )],
            riding_styles: vec![RidingStyle::Cruise, RidingStyle::Touring],
            skill_level: SkillLevel::Intermediate,
            badges: vec![
                badge(1, "First Ride", "Completed first group ride", "🎯", at(2023, 1, 15, 0)),
                badge(2, "1000 Miles", "Rode 1000 miles", "🏆", at(2023, 6, 20, 0)),
            ],
            total_miles: 5000,
            rides_completed: 25,
            created_at: at(2023, 1, 1, 0),
        },
        Rider {
            id: SARAH_ID,
            name: "Sarah Chen".to_string(),
            email: "sarah@example.com".to_string(),
            bio: Some(
                "Sport bike enthusiast. Track days and mountain roads are my jam!".to_string(),
            ),
            location: HomeLocation {
                city: "Los Angeles".to_string(),
                state: "CA".to_string(),
                coordinates: GeoPoint { lat: 34.0522, lng: -118.2437 },
            },
            bikes: vec![bike(
                2,
                "Yamaha",
                "YZF-R1",
                2022,
                BikeType::Sport,
                &["Exhaust", "ECU Flash", "Suspension"],
            )],
            riding_styles: vec![RidingStyle::Sport, RidingStyle::Track],
            skill_level: SkillLevel::Expert,
            badges: vec![
                badge(3, "Track Master", "Completed 10 track days", "🏁", at(2023, 8, 10, 0)),
                badge(4, "5000 Miles", "Rode 5000 miles", "🏆", at(2023, 9, 15, 0)),
            ],
            total_miles: 15000,
            rides_completed: 50,
            created_at: at(2022, 6, 1, 0),
        },
        Rider {
            id: ALEX_ID,
            name: "Alex Rodriguez".to_string(),
            email: "alex@example.com".to_string(),
            bio: Some(
                "Adventure rider. Love exploring off-road trails and long-distance touring."
                    .to_string(),
            ),
            location: HomeLocation {
                city: "Denver".to_string(),
                state: "CO".to_string(),
                coordinates: GeoPoint { lat: 39.7392, lng: -104.9903 },
            },
            bikes: vec![bike(
                3,
                "BMW",
                "R 1250 GS",
                2021,
                BikeType::Adventure,
                &["Panniers", "Skid Plate", "LED Lights"],
            )],
            riding_styles: vec![RidingStyle::Adventure, RidingStyle::Touring],
            skill_level: SkillLevel::Advanced,
            badges: vec![badge(
                5,
                "Adventure Seeker",
                "Completed 5 adventure rides",
                "🗺️",
                at(2023, 7, 5, 0),
            )],
            total_miles: 8000,
            rides_completed: 30,
            created_at: at(2022, 9, 1, 0),
        },
    ]
}

pub fn demo_rides(riders: &[Rider]) -> Vec<Ride> {
    let Some((mike, sarah)) = find(riders, MIKE_ID).zip(find(riders, SARAH_ID)) else {
        return Vec::new();
    };

    vec![
        Ride {
            id: SUNDAY_CRUISE_ID,
            title: "Sunday Morning Cruise".to_string(),
            description: "Easy going cruise through the countryside. Perfect for beginners!"
                .to_string(),
            organizer: mike,
            date: at(2024, 1, 15, 9),
            meeting_location: MeetingLocation {
                name: "Central Park".to_string(),
                address: "Central Park, New York, NY".to_string(),
                coordinates: GeoPoint { lat: 40.7829, lng: -73.9654 },
            },
            ride_type: RideType::Cruise,
            skill_level: SkillLevel::Beginner,
            max_riders: Some(10),
            current_riders: Vec::new(),
            status: RideStatus::Planning,
            created_at: at(2023, 12, 1, 0),
        },
        Ride {
            id: MOUNTAIN_ROADS_ID,
            title: "Twisty Mountain Roads".to_string(),
            description:
                "Advanced ride through challenging mountain passes. Experienced riders only."
                    .to_string(),
            organizer: sarah,
            date: at(2024, 1, 20, 8),
            meeting_location: MeetingLocation {
                name: "Angeles Crest Highway".to_string(),
                address: "Angeles Crest Highway, CA".to_string(),
                coordinates: GeoPoint { lat: 34.2594, lng: -118.1965 },
            },
            ride_type: RideType::Sport,
            skill_level: SkillLevel::Advanced,
            max_riders: Some(6),
            current_riders: Vec::new(),
            status: RideStatus::Planning,
            created_at: at(2023, 12, 5, 0),
        },
    ]
}

pub fn demo_routes(riders: &[Rider]) -> Vec<Route> {
    let (Some(mike), Some(sarah), Some(alex)) = (
        find(riders, MIKE_ID),
        find(riders, SARAH_ID),
        find(riders, ALEX_ID),
    ) else {
        return Vec::new();
    };

    vec![
        Route {
            id: PACIFIC_COAST_ID,
            name: "Pacific Coast Highway".to_string(),
            description: "Scenic coastal route from San Francisco to Los Angeles with breathtaking ocean views.".to_string(),
            creator: mike,
            waypoints: vec![
                waypoint(1, "San Francisco", 37.7749, -122.4194, WaypointType::Start),
                waypoint(2, "Big Sur", 36.2704, -121.8081, WaypointType::Scenic),
                waypoint(3, "Los Angeles", 34.0522, -118.2437, WaypointType::End),
            ],
            distance_miles: 450.0,
            estimated_minutes: 480,
            difficulty: RouteDifficulty::Moderate,
            tags: tags(&["coastal", "scenic", "highway"]),
            is_public: true,
            created_at: at(2023, 6, 15, 0),
        },
        Route {
            id: TAIL_OF_DRAGON_ID,
            name: "Tail of the Dragon".to_string(),
            description: "318 curves in 11 miles - one of the most challenging and famous motorcycle roads in America.".to_string(),
            creator: sarah,
            waypoints: vec![
                waypoint(4, "Deals Gap", 35.5167, -83.95, WaypointType::Start),
                waypoint(5, "Tail of the Dragon", 35.5167, -83.95, WaypointType::Checkpoint),
                waypoint(6, "Cherohala Skyway", 35.5167, -83.95, WaypointType::End),
            ],
            distance_miles: 11.0,
            estimated_minutes: 60,
            difficulty: RouteDifficulty::Expert,
            tags: tags(&["twisty", "challenging", "famous"]),
            is_public: true,
            created_at: at(2023, 8, 20, 0),
        },
        Route {
            id: BLUE_RIDGE_ID,
            name: "Blue Ridge Parkway".to_string(),
            description: "469-mile scenic drive through the Appalachian Mountains with stunning fall colors.".to_string(),
            creator: alex,
            waypoints: vec![
                waypoint(7, "Shenandoah National Park", 38.5228, -78.4347, WaypointType::Start),
                waypoint(8, "Great Smoky Mountains", 35.6118, -83.5496, WaypointType::End),
            ],
            distance_miles: 469.0,
            estimated_minutes: 960,
            difficulty: RouteDifficulty::Moderate,
            tags: tags(&["scenic", "mountains", "fall-colors"]),
            is_public: true,
            created_at: at(2023, 9, 10, 0),
        },
    ]
}

fn find(riders: &[Rider], id: Uuid) -> Option<Rider> {
    riders.iter().find(|rider| rider.id == id).cloned()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|tag| tag.to_string()).collect()
}
