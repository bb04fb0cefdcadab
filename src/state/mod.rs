//! Application state tree.
//!
//! One immutable record with six independent sub-trees, each behind an
//! `Arc`. The reducer replaces only the sub-trees an action touches, so
//! consumers can detect change with `Arc::ptr_eq` instead of deep
//! comparison.

pub mod action;
pub mod reducer;

pub use action::{Action, CategoryUpdate, HealthDataUpdate};
pub use reducer::reduce;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{
    Alert, Condition, Facility, LabResult, Medication, Procedure, Provider, RequestBatch, Theme,
    UserProfile, VitalSign,
};

// ═══════════════════════════════════════════════════════════
// Sub-trees
// ═══════════════════════════════════════════════════════════

/// Authentication and session state.
///
/// Invariant: `is_authenticated` implies `token.is_some()`. `user` may
/// be `None` transiently between session restore and profile refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// Signed-out auth state with session restore still pending.
    /// The bootstrap always resolves `loading` one way or the other.
    pub fn restoring() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            loading: true,
        }
    }

    /// Signed-out auth state after an explicit logout or failed login.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            loading: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::restoring()
    }
}

/// The patient's health-record collections.
///
/// Invariant: no collection holds two records with the same id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HealthDataState {
    pub conditions: Vec<Condition>,
    /// Legacy collection the upstream API serves separately from
    /// `conditions`; same record shape.
    pub diseases: Vec<Condition>,
    pub medications: Vec<Medication>,
    pub labs: Vec<LabResult>,
    pub vitals: Vec<VitalSign>,
    pub procedures: Vec<Procedure>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Providers and facilities available for record requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProvidersState {
    pub list: Vec<Provider>,
    pub facilities: Vec<Facility>,
    pub loading: bool,
}

/// Record-request batches and the one currently opened in the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestsState {
    pub batches: Vec<RequestBatch>,
    pub active_request: Option<RequestBatch>,
    pub loading: bool,
}

/// Reminder alerts and the unread badge count.
///
/// `unread_count` is re-derived from `list` inside every transition
/// that touches the list, so it can never drift or go negative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertsState {
    pub list: Vec<Alert>,
    pub unread_count: usize,
    pub loading: bool,
}

impl AlertsState {
    /// Build an alerts state with the count derived from the list.
    pub fn derived(list: Vec<Alert>, loading: bool) -> Self {
        let unread_count = count_unread(&list);
        Self {
            list,
            unread_count,
            loading,
        }
    }
}

/// Count of alerts whose status is `unread`.
pub fn count_unread(list: &[Alert]) -> usize {
    list.iter().filter(|a| a.is_unread()).count()
}

/// UI preferences. Survives logout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub sidebar_open: bool,
    pub theme: Theme,
}

// ═══════════════════════════════════════════════════════════
// AppState — the whole tree
// ═══════════════════════════════════════════════════════════

/// The whole application state tree. Cloning is cheap (six `Arc`s).
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub auth: Arc<AuthState>,
    pub health: Arc<HealthDataState>,
    pub providers: Arc<ProvidersState>,
    pub requests: Arc<RequestsState>,
    pub alerts: Arc<AlertsState>,
    pub ui: Arc<UiState>,
}

impl AppState {
    /// Deterministic initial tree: all collections empty, auth pending
    /// session restore.
    pub fn initial() -> Self {
        Self {
            auth: Arc::new(AuthState::restoring()),
            health: Arc::new(HealthDataState::default()),
            providers: Arc::new(ProvidersState::default()),
            requests: Arc::new(RequestsState::default()),
            alerts: Arc::new(AlertsState::default()),
            ui: Arc::new(UiState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertKind, AlertStatus};
    use uuid::Uuid;

    fn alert(status: AlertStatus) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            kind: AlertKind::System,
            title: "t".into(),
            message: None,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn initial_tree_is_empty_and_restoring() {
        let state = AppState::initial();
        assert!(state.auth.loading);
        assert!(!state.auth.is_authenticated);
        assert!(state.health.conditions.is_empty());
        assert!(state.alerts.list.is_empty());
        assert_eq!(state.alerts.unread_count, 0);
        assert!(!state.ui.sidebar_open);
    }

    #[test]
    fn derived_alerts_count_matches_list() {
        let list = vec![
            alert(AlertStatus::Unread),
            alert(AlertStatus::Read),
            alert(AlertStatus::Unread),
            alert(AlertStatus::Acknowledged),
        ];
        let alerts = AlertsState::derived(list, false);
        assert_eq!(alerts.unread_count, 2);
    }

    #[test]
    fn clone_shares_subtrees() {
        let state = AppState::initial();
        let copy = state.clone();
        assert!(Arc::ptr_eq(&state.auth, &copy.auth));
        assert!(Arc::ptr_eq(&state.health, &copy.health));
    }
}
