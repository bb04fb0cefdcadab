use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A health professional the patient can request records from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub specialty: Option<String>,
    pub institution: Option<String>,
    pub phone: Option<String>,
    pub accepting_requests: bool,
}

/// A clinic, hospital, or lab facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_json_round_trip() {
        let provider = Provider {
            id: Uuid::new_v4(),
            name: "Dr. Osei".into(),
            specialty: Some("Cardiology".into()),
            institution: Some("Northgate Medical".into()),
            phone: None,
            accepting_requests: true,
        };
        let json = serde_json::to_string(&provider).unwrap();
        let back: Provider = serde_json::from_str(&json).unwrap();
        assert_eq!(back, provider);
    }
}
