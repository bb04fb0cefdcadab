use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ConditionStatus;

/// A diagnosed condition on the patient's record.
///
/// Also used for the legacy `diseases` collection, which the upstream
/// API still serves as a separate list with the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: Uuid,
    pub name: String,
    pub icd_code: Option<String>,
    pub diagnosed_date: Option<NaiveDate>,
    pub diagnosing_provider: Option<String>,
    pub status: ConditionStatus,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_json_round_trip() {
        let condition = Condition {
            id: Uuid::new_v4(),
            name: "Hypertension".into(),
            icd_code: Some("I10".into()),
            diagnosed_date: NaiveDate::from_ymd_opt(2023, 4, 12),
            diagnosing_provider: Some("Dr. Osei".into()),
            status: ConditionStatus::Active,
            notes: None,
        };
        let json = serde_json::to_string(&condition).unwrap();
        let back: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condition);
    }
}
