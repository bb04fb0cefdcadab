use serde::{Deserialize, Serialize};

/// Lifecycle status of a reminder alert.
///
/// Canonical set is `unread`/`read`/`acknowledged`. The legacy feed
/// used `active` for not-yet-seen alerts; it is accepted on input as
/// an alias for `unread` so older payloads still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[serde(alias = "active")]
    Unread,
    Read,
    Acknowledged,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Unread => "unread",
            AlertStatus::Read => "read",
            AlertStatus::Acknowledged => "acknowledged",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unread" | "active" => Some(AlertStatus::Unread),
            "read" => Some(AlertStatus::Read),
            "acknowledged" => Some(AlertStatus::Acknowledged),
            _ => None,
        }
    }

    /// Whether this status counts toward the unread badge.
    pub fn is_unread(self) -> bool {
        matches!(self, AlertStatus::Unread)
    }
}

/// What a reminder alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    MedicationRefill,
    Appointment,
    LabFollowUp,
    RequestUpdate,
    System,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::MedicationRefill => "medication_refill",
            AlertKind::Appointment => "appointment",
            AlertKind::LabFollowUp => "lab_follow_up",
            AlertKind::RequestUpdate => "request_update",
            AlertKind::System => "system",
        }
    }
}

/// Status of a diagnosed condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    Active,
    Resolved,
    Monitoring,
}

impl ConditionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionStatus::Active => "active",
            ConditionStatus::Resolved => "resolved",
            ConditionStatus::Monitoring => "monitoring",
        }
    }
}

/// Status of a medication on the patient's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    Active,
    Stopped,
    Paused,
}

impl MedicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MedicationStatus::Active => "active",
            MedicationStatus::Stopped => "stopped",
            MedicationStatus::Paused => "paused",
        }
    }
}

/// Lab value position relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbnormalFlag {
    Normal,
    Low,
    High,
    CriticalLow,
    CriticalHigh,
}

impl AbnormalFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            AbnormalFlag::Normal => "normal",
            AbnormalFlag::Low => "low",
            AbnormalFlag::High => "high",
            AbnormalFlag::CriticalLow => "critical_low",
            AbnormalFlag::CriticalHigh => "critical_high",
        }
    }
}

/// Lifecycle of a record-request batch sent to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Processing => "processing",
            RequestStatus::Completed => "completed",
            RequestStatus::Failed => "failed",
        }
    }

    /// Batches still awaiting the provider.
    pub fn is_open(self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Processing)
    }
}

/// Dashboard color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_status_round_trip() {
        for status in [AlertStatus::Unread, AlertStatus::Read, AlertStatus::Acknowledged] {
            assert_eq!(AlertStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn legacy_active_maps_to_unread() {
        assert_eq!(AlertStatus::from_str("active"), Some(AlertStatus::Unread));
        let parsed: AlertStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, AlertStatus::Unread);
    }

    #[test]
    fn only_unread_counts_as_unread() {
        assert!(AlertStatus::Unread.is_unread());
        assert!(!AlertStatus::Read.is_unread());
        assert!(!AlertStatus::Acknowledged.is_unread());
    }

    #[test]
    fn alert_status_serializes_snake_case() {
        let json = serde_json::to_string(&AlertStatus::Unread).unwrap();
        assert_eq!(json, "\"unread\"");
    }

    #[test]
    fn request_status_open_states() {
        assert!(RequestStatus::Pending.is_open());
        assert!(RequestStatus::Processing.is_open());
        assert!(!RequestStatus::Completed.is_open());
        assert!(!RequestStatus::Failed.is_open());
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("sepia"), None);
    }
}
