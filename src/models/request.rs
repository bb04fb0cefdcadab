use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::RequestStatus;

/// A batch of record categories requested from one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBatch {
    pub id: Uuid,
    pub provider_id: Option<Uuid>,
    pub provider_name: String,
    /// Category names as the API reports them (e.g. "labs", "medications").
    pub categories: Vec<String>,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl RequestBatch {
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_batch_json_round_trip() {
        let batch = RequestBatch {
            id: Uuid::new_v4(),
            provider_id: Some(Uuid::new_v4()),
            provider_name: "Northgate Medical".into(),
            categories: vec!["labs".into(), "medications".into()],
            status: RequestStatus::Processing,
            requested_at: Utc::now(),
            completed_at: None,
        };
        let json = serde_json::to_string(&batch).unwrap();
        let back: RequestBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
        assert!(back.is_open());
    }
}
