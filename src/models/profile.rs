use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in patient's profile, as returned by the records API
/// and cached in local storage between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Display name for the dashboard header.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            email: "pat@example.com".into(),
            first_name: "Pat".into(),
            last_name: "Doe".into(),
            date_of_birth: None,
            phone: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn full_name_concatenates() {
        assert_eq!(sample().full_name(), "Pat Doe");
    }

    #[test]
    fn profile_json_round_trip() {
        let profile = sample();
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
