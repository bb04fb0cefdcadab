use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A procedure performed on or scheduled for the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub id: Uuid,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub performing_provider: Option<String>,
    pub facility: Option<String>,
    pub outcome: Option<String>,
    pub follow_up_required: bool,
    pub notes: Option<String>,
}
