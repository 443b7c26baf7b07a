use std::collections::HashSet;

use serde::Deserialize;

use crate::engine::filter::{parse_choice, Criteria, SearchTerm};
use crate::error::AppError;
use crate::models::ride::{Ride, RideType};
use crate::models::rider::{BikeType, Rider, RidingStyle, SkillLevel};
use crate::models::route::{Route, RouteDifficulty};

/// Raw rider listing query as received from the front-end.
#[derive(Debug, Default, Deserialize)]
pub struct RiderQuery {
    pub search: Option<String>,
    pub riding_style: Option<String>,
    pub bike_type: Option<String>,
    pub skill_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RideQuery {
    pub search: Option<String>,
    pub ride_type: Option<String>,
    pub skill_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    /// Comma-separated tag selection.
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiderCriteria {
    pub search: Option<SearchTerm>,
    pub riding_style: Option<RidingStyle>,
    pub bike_type: Option<BikeType>,
    pub skill_level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RideCriteria {
    pub search: Option<SearchTerm>,
    pub ride_type: Option<RideType>,
    pub skill_level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteCriteria {
    pub search: Option<SearchTerm>,
    pub difficulty: Option<RouteDifficulty>,
    pub tags: HashSet<String>,
}

impl TryFrom<RiderQuery> for RiderCriteria {
    type Error = AppError;

    fn try_from(query: RiderQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            search: query.search.as_deref().and_then(SearchTerm::new),
            riding_style: parse_choice("riding_style", query.riding_style.as_deref())?,
            bike_type: parse_choice("bike_type", query.bike_type.as_deref())?,
            skill_level: parse_choice("skill_level", query.skill_level.as_deref())?,
        })
    }
}

impl TryFrom<RideQuery> for RideCriteria {
    type Error = AppError;

    fn try_from(query: RideQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            search: query.search.as_deref().and_then(SearchTerm::new),
            ride_type: parse_choice("ride_type", query.ride_type.as_deref())?,
            skill_level: parse_choice("skill_level", query.skill_level.as_deref())?,
        })
    }
}

impl TryFrom<RouteQuery> for RouteCriteria {
    type Error = AppError;

    fn try_from(query: RouteQuery) -> Result<Self, Self::Error> {
        let tags = query
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && !tag.eq_ignore_ascii_case("all"))
            .map(str::to_string)
            .collect();

        Ok(Self {
            search: query.search.as_deref().and_then(SearchTerm::new),
            difficulty: parse_choice("difficulty", query.difficulty.as_deref())?,
            tags,
        })
    }
}

impl Criteria<Rider> for RiderCriteria {
    fn matches(&self, rider: &Rider) -> bool {
        let matches_search = self.search.as_ref().is_none_or(|term| {
            term.found_in(&rider.name)
                || rider.bio.as_deref().is_some_and(|bio| term.found_in(bio))
                || rider
                    .bikes
                    .iter()
                    .any(|bike| term.found_in(&bike.make) || term.found_in(&bike.model))
        });

        let matches_style = self
            .riding_style
            .is_none_or(|style| rider.riding_styles.contains(&style));

        let matches_bike_type = self
            .bike_type
            .is_none_or(|bike_type| rider.bikes.iter().any(|bike| bike.bike_type == bike_type));

        let matches_skill = self
            .skill_level
            .is_none_or(|level| rider.skill_level == level);

        matches_search && matches_style && matches_bike_type && matches_skill
    }

    fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.riding_style.is_none()
            && self.bike_type.is_none()
            && self.skill_level.is_none()
    }
}

impl Criteria<Ride> for RideCriteria {
    fn matches(&self, ride: &Ride) -> bool {
        let matches_search = self
            .search
            .as_ref()
            .is_none_or(|term| term.found_in(&ride.title) || term.found_in(&ride.description));

        let matches_type = self.ride_type.is_none_or(|ride_type| ride.ride_type == ride_type);
        let matches_skill = self.skill_level.is_none_or(|level| ride.skill_level == level);

        matches_search && matches_type && matches_skill
    }

    fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.ride_type.is_none() && self.skill_level.is_none()
    }
}

impl Criteria<Route> for RouteCriteria {
    fn matches(&self, route: &Route) -> bool {
        let matches_search = self.search.as_ref().is_none_or(|term| {
            term.found_in(&route.name)
                || term.found_in(&route.description)
                || route.tags.iter().any(|tag| term.found_in(tag))
        });

        let matches_difficulty = self
            .difficulty
            .is_none_or(|difficulty| route.difficulty == difficulty);

        let matches_tags =
            self.tags.is_empty() || route.tags.iter().any(|tag| self.tags.contains(tag));

        matches_search && matches_difficulty && matches_tags
    }

    fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.difficulty.is_none() && self.tags.is_empty()
    }
}

/// Distinct tags across `routes`, in the order they are first seen.
pub fn route_tags(routes: &[Route]) -> Vec<String> {
    let mut seen = HashSet::new();
    routes
        .iter()
        .flat_map(|route| route.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
