use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of vital sign measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalType {
    Temperature,
    BloodPressure,
    Weight,
    Height,
    HeartRate,
    BloodGlucose,
    OxygenSaturation,
}

impl VitalType {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalType::Temperature => "temperature",
            VitalType::BloodPressure => "blood_pressure",
            VitalType::Weight => "weight",
            VitalType::Height => "height",
            VitalType::HeartRate => "heart_rate",
            VitalType::BloodGlucose => "blood_glucose",
            VitalType::OxygenSaturation => "oxygen_saturation",
        }
    }

    /// Default unit for this vital type.
    pub fn default_unit(self) -> &'static str {
        match self {
            VitalType::Temperature => "°C",
            VitalType::BloodPressure => "mmHg",
            VitalType::Weight => "kg",
            VitalType::Height => "cm",
            VitalType::HeartRate => "bpm",
            VitalType::BloodGlucose => "mg/dL",
            VitalType::OxygenSaturation => "%",
        }
    }
}

/// A single vital sign measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSign {
    pub id: Uuid,
    pub vital_type: VitalType,
    pub value_primary: f64,
    pub value_secondary: Option<f64>, // diastolic for blood_pressure
    pub unit: String,
    pub recorded_at: DateTime<Utc>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vital_type_serializes_snake_case() {
        let json = serde_json::to_string(&VitalType::BloodPressure).unwrap();
        assert_eq!(json, "\"blood_pressure\"");
    }

    #[test]
    fn default_units_cover_all_types() {
        assert_eq!(VitalType::HeartRate.default_unit(), "bpm");
        assert_eq!(VitalType::BloodGlucose.default_unit(), "mg/dL");
    }

    #[test]
    fn vital_json_round_trip() {
        let vital = VitalSign {
            id: Uuid::new_v4(),
            vital_type: VitalType::BloodPressure,
            value_primary: 128.0,
            value_secondary: Some(82.0),
            unit: "mmHg".into(),
            recorded_at: Utc::now(),
            notes: None,
        };
        let json = serde_json::to_string(&vital).unwrap();
        let back: VitalSign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vital);
    }
}
