use std::str::FromStr;

use crate::error::AppError;
use crate::models::UnknownVariant;

/// A conjunction of optional predicates over one entity kind.
pub trait Criteria<T> {
    /// True when every supplied criterion accepts `entity`.
    fn matches(&self, entity: &T) -> bool;

    /// True when no criterion is supplied at all.
    fn is_unconstrained(&self) -> bool;
}

/// Returns the entities accepted by `criteria`, keeping their relative order.
pub fn filter_entities<T, C>(entities: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T>,
{
    if criteria.is_unconstrained() {
        return entities.to_vec();
    }

    entities
        .iter()
        .filter(|entity| criteria.matches(entity))
        .cloned()
        .collect()
}

/// Case-insensitive substring needle. An empty search is unconstrained and
/// never becomes a `SearchTerm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_lowercase()))
        }
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses one categorical query value. Absent, empty and `all` mean
/// unconstrained; anything else must name a variant.
pub fn parse_choice<T>(field: &'static str, raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: FromStr<Err = UnknownVariant>,
{
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    raw.parse::<T>()
        .map(Some)
        .map_err(|err| AppError::InvalidCriterion {
            field,
            value: err.value,
        })
}
