//! Instructor records as returned by the API and their flattened view model.

use super::filter::LicenseType;
use serde::{Deserialize, Serialize};

/// Identity block nested inside an instructor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Instructor profile from `GET /public/instructor` and the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorRecord {
    pub id: String,
    pub user: InstructorUser,
    pub hourly_rate: f64,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub city: Option<String>,
}

/// Card-shaped projection of an [`InstructorRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorViewModel {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub hourly_rate: f64,
    pub bio: String,
    pub years_experience: u32,
    pub verified: bool,
    pub rating: f64,
    pub review_count: u32,
    pub city: Option<String>,
    /// Always `[B]` until the backend exposes license categories.
    pub license_types: Vec<LicenseType>,
}

/// License categories reported for every instructor. The backend does not
/// return them yet.
pub const PLACEHOLDER_LICENSE_TYPES: [LicenseType; 1] = [LicenseType::B];

impl From<InstructorRecord> for InstructorViewModel {
    fn from(record: InstructorRecord) -> Self {
        let InstructorRecord {
            id,
            user,
            hourly_rate,
            bio,
            years_experience,
            is_verified,
            average_rating,
            review_count,
            city,
        } = record;

        Self {
            id,
            user_id: user.id,
            name: user.name,
            email: user.email,
            image: user.profile_image_url,
            hourly_rate,
            bio: bio.unwrap_or_default(),
            years_experience,
            verified: is_verified,
            rating: average_rating,
            review_count,
            city,
            license_types: PLACEHOLDER_LICENSE_TYPES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adapter_maps_every_field() {
        let raw = json!({
            "id": "inst-1",
            "user": {
                "id": "user-1",
                "name": "Ana Souza",
                "email": "ana@example.com",
                "profileImageUrl": "https://cdn.example.com/ana.png"
            },
            "hourlyRate": 95.5,
            "bio": "Paciência com iniciantes",
            "yearsExperience": 7,
            "isVerified": true,
            "averageRating": 4.8,
            "reviewCount": 31,
            "city": "São Paulo"
        });

        let record: InstructorRecord = serde_json::from_value(raw).unwrap();
        let view = InstructorViewModel::from(record);

        assert_eq!(view.id, "inst-1");
        assert_eq!(view.user_id, "user-1");
        assert_eq!(view.name, "Ana Souza");
        assert_eq!(view.email, "ana@example.com");
        assert_eq!(view.image.as_deref(), Some("https://cdn.example.com/ana.png"));
        assert_eq!(view.hourly_rate, 95.5);
        assert_eq!(view.bio, "Paciência com iniciantes");
        assert_eq!(view.years_experience, 7);
        assert!(view.verified);
        assert_eq!(view.rating, 4.8);
        assert_eq!(view.review_count, 31);
        assert_eq!(view.city.as_deref(), Some("São Paulo"));
        assert_eq!(view.license_types, vec![LicenseType::B]);
    }

    #[test]
    fn test_missing_optional_fields_decode() {
        let raw = json!({
            "id": "inst-2",
            "user": { "id": "user-2", "name": "Bruno", "email": "bruno@example.com" },
            "hourlyRate": 80.0
        });

        let record: InstructorRecord = serde_json::from_value(raw).unwrap();
        let view = InstructorViewModel::from(record);

        assert_eq!(view.image, None);
        assert_eq!(view.city, None);
        assert_eq!(view.bio, "");
        assert_eq!(view.rating, 0.0);
        assert!(!view.verified);
    }
}
