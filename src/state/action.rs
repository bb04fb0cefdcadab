//! The dispatchable action catalogue.
//!
//! A closed sum type: every transition the container supports is one
//! variant here, so the reducer's match is checked for exhaustiveness
//! at compile time and unknown action kinds are unrepresentable.

use uuid::Uuid;

use crate::models::{
    Alert, AlertStatus, Condition, Facility, LabResult, Medication, Procedure, Provider,
    RequestBatch, Theme, UserProfile, VitalSign,
};

/// Partial health-data payload for a bulk merge.
///
/// `None` leaves a collection untouched; `Some` replaces it. Produced
/// by the API layer after a multi-category fetch.
#[derive(Debug, Clone, Default)]
pub struct HealthDataUpdate {
    pub conditions: Option<Vec<Condition>>,
    pub diseases: Option<Vec<Condition>>,
    pub medications: Option<Vec<Medication>>,
    pub labs: Option<Vec<LabResult>>,
    pub vitals: Option<Vec<VitalSign>>,
    pub procedures: Option<Vec<Procedure>>,
}

/// Replacement payload for exactly one health-record collection.
#[derive(Debug, Clone)]
pub enum CategoryUpdate {
    Conditions(Vec<Condition>),
    Diseases(Vec<Condition>),
    Medications(Vec<Medication>),
    Labs(Vec<LabResult>),
    Vitals(Vec<VitalSign>),
    Procedures(Vec<Procedure>),
}

impl CategoryUpdate {
    /// Category name for logging.
    pub fn category(&self) -> &'static str {
        match self {
            CategoryUpdate::Conditions(_) => "conditions",
            CategoryUpdate::Diseases(_) => "diseases",
            CategoryUpdate::Medications(_) => "medications",
            CategoryUpdate::Labs(_) => "labs",
            CategoryUpdate::Vitals(_) => "vitals",
            CategoryUpdate::Procedures(_) => "procedures",
        }
    }
}

/// Everything a consumer may dispatch.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Auth ────────────────────────────────────────────────
    SetAuthLoading(bool),
    LoginSuccess { token: String, user: UserProfile },
    LoginFailure,
    /// Resets every sub-tree to initial except UI preferences.
    Logout,
    SetUser(UserProfile),
    UpdateUserAvatar(String),

    // ── Health data ─────────────────────────────────────────
    SetHealthDataLoading(bool),
    SetHealthData(HealthDataUpdate),
    SetHealthDataCategory(CategoryUpdate),
    AddCondition(Condition),
    EditCondition(Condition),
    DeleteCondition(Uuid),
    AddMedication(Medication),
    EditMedication(Medication),
    DeleteMedication(Uuid),
    AddLabResult(LabResult),
    EditLabResult(LabResult),
    DeleteLabResult(Uuid),
    AddVital(VitalSign),
    EditVital(VitalSign),
    DeleteVital(Uuid),
    AddProcedure(Procedure),
    EditProcedure(Procedure),
    DeleteProcedure(Uuid),
    ClearHealthData,
    /// Historical alias of `ClearHealthData`; same effect.
    ClearAllHealthData,

    // ── Providers ───────────────────────────────────────────
    SetProvidersLoading(bool),
    SetProviders(Vec<Provider>),
    SetFacilities(Vec<Facility>),

    // ── Requests ────────────────────────────────────────────
    SetRequestsLoading(bool),
    SetRequestBatches(Vec<RequestBatch>),
    SetActiveRequest(Option<RequestBatch>),

    // ── Alerts ──────────────────────────────────────────────
    SetAlertsLoading(bool),
    SetAlerts(Vec<Alert>),
    MarkAlertRead(Uuid),
    MarkAlertUnread(Uuid),
    DeleteAlert(Uuid),
    UpdateAlertStatus { id: Uuid, status: AlertStatus },

    // ── UI ──────────────────────────────────────────────────
    ToggleSidebar,
    SetTheme(Theme),
}

impl Action {
    /// Stable action name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetAuthLoading(_) => "set_auth_loading",
            Action::LoginSuccess { .. } => "login_success",
            Action::LoginFailure => "login_failure",
            Action::Logout => "logout",
            Action::SetUser(_) => "set_user",
            Action::UpdateUserAvatar(_) => "update_user_avatar",
            Action::SetHealthDataLoading(_) => "set_health_data_loading",
            Action::SetHealthData(_) => "set_health_data",
            Action::SetHealthDataCategory(_) => "set_health_data_category",
            Action::AddCondition(_) => "add_condition",
            Action::EditCondition(_) => "edit_condition",
            Action::DeleteCondition(_) => "delete_condition",
            Action::AddMedication(_) => "add_medication",
            Action::EditMedication(_) => "edit_medication",
            Action::DeleteMedication(_) => "delete_medication",
            Action::AddLabResult(_) => "add_lab_result",
            Action::EditLabResult(_) => "edit_lab_result",
            Action::DeleteLabResult(_) => "delete_lab_result",
            Action::AddVital(_) => "add_vital",
            Action::EditVital(_) => "edit_vital",
            Action::DeleteVital(_) => "delete_vital",
            Action::AddProcedure(_) => "add_procedure",
            Action::EditProcedure(_) => "edit_procedure",
            Action::DeleteProcedure(_) => "delete_procedure",
            Action::ClearHealthData => "clear_health_data",
            Action::ClearAllHealthData => "clear_all_health_data",
            Action::SetProvidersLoading(_) => "set_providers_loading",
            Action::SetProviders(_) => "set_providers",
            Action::SetFacilities(_) => "set_facilities",
            Action::SetRequestsLoading(_) => "set_requests_loading",
            Action::SetRequestBatches(_) => "set_request_batches",
            Action::SetActiveRequest(_) => "set_active_request",
            Action::SetAlertsLoading(_) => "set_alerts_loading",
            Action::SetAlerts(_) => "set_alerts",
            Action::MarkAlertRead(_) => "mark_alert_read",
            Action::MarkAlertUnread(_) => "mark_alert_unread",
            Action::DeleteAlert(_) => "delete_alert",
            Action::UpdateAlertStatus { .. } => "update_alert_status",
            Action::ToggleSidebar => "toggle_sidebar",
            Action::SetTheme(_) => "set_theme",
        }
    }
}
