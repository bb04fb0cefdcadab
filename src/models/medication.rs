use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::MedicationStatus;

/// A medication on the patient's current or past list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub brand_name: Option<String>,
    pub dose: String,
    pub frequency: String,
    pub route: Option<String>,
    pub prescriber: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: MedicationStatus,
    pub instructions: Option<String>,
}
