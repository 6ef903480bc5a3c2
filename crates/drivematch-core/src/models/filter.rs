//! Filter criteria applied to instructor search results.

use super::instructor::InstructorViewModel;
use crate::config::SearchConfig;
use crate::error::DriveMatchError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Brazilian driving license (CNH) categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    /// Motorcycles
    A,
    /// Cars
    B,
    /// Light trucks
    C,
    /// Buses
    D,
    /// Articulated vehicles
    E,
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::A => "A",
            LicenseType::B => "B",
            LicenseType::C => "C",
            LicenseType::D => "D",
            LicenseType::E => "E",
        }
    }
}

impl FromStr for LicenseType {
    type Err = DriveMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(LicenseType::A),
            "B" => Ok(LicenseType::B),
            "C" => Ok(LicenseType::C),
            "D" => Ok(LicenseType::D),
            "E" => Ok(LicenseType::E),
            other => Err(DriveMatchError::Validation {
                field: "license".into(),
                message: format!("unknown license category '{}'", other),
            }),
        }
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// License constraint. `All` imposes none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "license")]
pub enum LicenseFilter {
    #[default]
    All,
    Only(LicenseType),
}

/// Years-of-experience bracket.
///
/// Beginner is under 3 years, intermediate is 3 up to but excluding 10,
/// expert is 10 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceBracket {
    #[default]
    All,
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceBracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBracket::All => "all",
            ExperienceBracket::Beginner => "beginner",
            ExperienceBracket::Intermediate => "intermediate",
            ExperienceBracket::Expert => "expert",
        }
    }

    /// Lower bound sent to the API as `minYearsExperience`.
    pub fn min_years(&self) -> Option<u32> {
        match self {
            ExperienceBracket::All => None,
            ExperienceBracket::Beginner => Some(0),
            ExperienceBracket::Intermediate => Some(3),
            ExperienceBracket::Expert => Some(10),
        }
    }

    /// Whether `years` of experience falls inside this bracket.
    pub fn contains(&self, years: u32) -> bool {
        match self {
            ExperienceBracket::All => true,
            ExperienceBracket::Beginner => years < 3,
            ExperienceBracket::Intermediate => (3..10).contains(&years),
            ExperienceBracket::Expert => years >= 10,
        }
    }
}

impl FromStr for ExperienceBracket {
    type Err = DriveMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ExperienceBracket::All),
            "beginner" => Ok(ExperienceBracket::Beginner),
            "intermediate" => Ok(ExperienceBracket::Intermediate),
            "expert" => Ok(ExperienceBracket::Expert),
            other => Err(DriveMatchError::Validation {
                field: "experience".into(),
                message: format!("unknown experience bracket '{}'", other),
            }),
        }
    }
}

impl std::fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-selected filters for the instructor list.
///
/// `min_rating` of `0.0` and `max_price` at
/// [`SearchConfig::DEFAULT_MAX_HOURLY_RATE`] are sentinels meaning
/// "unconstrained".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub license: LicenseFilter,
    pub min_rating: f64,
    pub max_price: f64,
    pub verified_only: bool,
    pub experience: ExperienceBracket,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            license: LicenseFilter::All,
            min_rating: 0.0,
            max_price: SearchConfig::DEFAULT_MAX_HOURLY_RATE,
            verified_only: false,
            experience: ExperienceBracket::All,
        }
    }
}

impl FilterCriteria {
    /// Criteria after an explicit "clear filters" action.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Rating floor, if one is in effect.
    pub fn rating_floor(&self) -> Option<f64> {
        (self.min_rating > 0.0).then_some(self.min_rating)
    }

    /// Price ceiling, if one below the slider maximum is in effect.
    pub fn price_ceiling(&self) -> Option<f64> {
        (self.max_price < SearchConfig::DEFAULT_MAX_HOURLY_RATE).then_some(self.max_price)
    }

    /// Whether every criterion is at its unconstrained value.
    pub fn is_default(&self) -> bool {
        self.license == LicenseFilter::All
            && self.rating_floor().is_none()
            && self.price_ceiling().is_none()
            && !self.verified_only
            && self.experience == ExperienceBracket::All
    }

    /// Local filter check for one instructor.
    pub fn matches(&self, instructor: &InstructorViewModel) -> bool {
        if let LicenseFilter::Only(license) = self.license {
            if !instructor.license_types.contains(&license) {
                return false;
            }
        }

        if self.verified_only && !instructor.verified {
            return false;
        }

        if !self.experience.contains(instructor.years_experience) {
            return false;
        }

        if let Some(floor) = self.rating_floor() {
            if instructor.rating < floor {
                return false;
            }
        }

        if let Some(ceiling) = self.price_ceiling() {
            if instructor.hourly_rate > ceiling {
                return false;
            }
        }

        true
    }
}

/// Apply the local filter pass, keeping the order the API returned.
pub fn apply_local_filters(
    instructors: Vec<InstructorViewModel>,
    criteria: &FilterCriteria,
) -> Vec<InstructorViewModel> {
    instructors
        .into_iter()
        .filter(|instructor| criteria.matches(instructor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructor(id: &str, years: u32, rating: f64, rate: f64, verified: bool) -> InstructorViewModel {
        InstructorViewModel {
            id: id.to_string(),
            user_id: format!("user-{}", id),
            name: format!("Instructor {}", id),
            email: format!("{}@example.com", id),
            image: None,
            hourly_rate: rate,
            bio: String::new(),
            years_experience: years,
            verified,
            rating,
            review_count: 0,
            city: None,
            license_types: vec![LicenseType::B],
        }
    }

    #[test]
    fn test_bracket_boundaries() {
        assert!(ExperienceBracket::Beginner.contains(0));
        assert!(ExperienceBracket::Beginner.contains(2));
        assert!(!ExperienceBracket::Beginner.contains(3));

        assert!(ExperienceBracket::Intermediate.contains(3));
        assert!(ExperienceBracket::Intermediate.contains(9));
        assert!(!ExperienceBracket::Intermediate.contains(10));

        assert!(ExperienceBracket::Expert.contains(10));
        assert!(!ExperienceBracket::Expert.contains(2));

        for years in [0, 3, 10, 40] {
            assert!(ExperienceBracket::All.contains(years));
        }
    }

    #[test]
    fn test_bracket_min_years() {
        assert_eq!(ExperienceBracket::All.min_years(), None);
        assert_eq!(ExperienceBracket::Beginner.min_years(), Some(0));
        assert_eq!(ExperienceBracket::Intermediate.min_years(), Some(3));
        assert_eq!(ExperienceBracket::Expert.min_years(), Some(10));
    }

    #[test]
    fn test_default_criteria_keep_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_default());

        let list = vec![
            instructor("a", 0, 0.0, 10.0, false),
            instructor("b", 12, 5.0, 199.0, true),
            instructor("c", 5, 2.5, 250.0, false),
        ];
        assert_eq!(apply_local_filters(list.clone(), &criteria), list);
    }

    #[test]
    fn test_sentinels() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.rating_floor(), None);
        assert_eq!(criteria.price_ceiling(), None);

        let criteria = FilterCriteria {
            min_rating: 4.0,
            max_price: 120.0,
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.rating_floor(), Some(4.0));
        assert_eq!(criteria.price_ceiling(), Some(120.0));
        assert!(!criteria.is_default());
    }

    #[test]
    fn test_license_containment() {
        let b_only = instructor("a", 1, 4.0, 50.0, true);

        let wants_b = FilterCriteria {
            license: LicenseFilter::Only(LicenseType::B),
            ..FilterCriteria::default()
        };
        let wants_a = FilterCriteria {
            license: LicenseFilter::Only(LicenseType::A),
            ..FilterCriteria::default()
        };

        assert!(wants_b.matches(&b_only));
        assert!(!wants_a.matches(&b_only));
    }

    #[test]
    fn test_combined_filters_preserve_order() {
        let criteria = FilterCriteria {
            verified_only: true,
            experience: ExperienceBracket::Intermediate,
            max_price: 100.0,
            ..FilterCriteria::default()
        };

        let list = vec![
            instructor("z", 5, 4.0, 90.0, true),
            instructor("unverified", 5, 4.0, 90.0, false),
            instructor("expensive", 5, 4.0, 150.0, true),
            instructor("expert", 10, 4.0, 90.0, true),
            instructor("a", 3, 4.0, 100.0, true),
        ];

        let ids: Vec<String> = apply_local_filters(list, &criteria)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("b".parse::<LicenseType>().unwrap(), LicenseType::B);
        assert!("X".parse::<LicenseType>().is_err());
        assert_eq!(
            "Expert".parse::<ExperienceBracket>().unwrap(),
            ExperienceBracket::Expert
        );
        assert!("veteran".parse::<ExperienceBracket>().is_err());
    }
}
