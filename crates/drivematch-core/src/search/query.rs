//! Translation of UI search input into API query parameters.

use crate::models::FilterCriteria;
use serde::{Deserialize, Serialize};

/// What the user typed plus the filters they picked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchInput {
    /// Free-text name-or-city query.
    pub term: String,
    pub criteria: FilterCriteria,
}

impl SearchInput {
    pub fn new(term: impl Into<String>, criteria: FilterCriteria) -> Self {
        Self {
            term: term.into(),
            criteria,
        }
    }
}

/// Parameters accepted by `GET /public/instructor/search`.
///
/// `None` fields are omitted from the request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    pub name_or_city: Option<String>,
    pub min_rating: Option<f64>,
    pub max_hourly_rate: Option<f64>,
    pub min_years_experience: Option<u32>,
}

impl SearchQuery {
    /// Translate search input into remote parameters.
    ///
    /// License type and the verified-only flag have no remote counterpart;
    /// they are applied by the local filter pass only.
    pub fn from_input(input: &SearchInput) -> Self {
        let term = input.term.trim();
        Self {
            name_or_city: (!term.is_empty()).then(|| term.to_string()),
            min_rating: input.criteria.rating_floor(),
            max_hourly_rate: input.criteria.price_ceiling(),
            min_years_experience: input.criteria.experience.min_years(),
        }
    }

    /// True when no parameter is set, so the "get all" endpoint suffices.
    pub fn is_unfiltered(&self) -> bool {
        self.name_or_city.is_none()
            && self.min_rating.is_none()
            && self.max_hourly_rate.is_none()
            && self.min_years_experience.is_none()
    }

    /// Set parameters as `(name, value)` pairs in wire order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(ref name_or_city) = self.name_or_city {
            pairs.push(("nameOrCity", name_or_city.clone()));
        }
        if let Some(min_rating) = self.min_rating {
            pairs.push(("minRating", min_rating.to_string()));
        }
        if let Some(max_hourly_rate) = self.max_hourly_rate {
            pairs.push(("maxHourlyRate", max_hourly_rate.to_string()));
        }
        if let Some(min_years) = self.min_years_experience {
            pairs.push(("minYearsExperience", min_years.to_string()));
        }
        pairs
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
