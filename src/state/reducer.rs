//! The pure transition function.
//!
//! `reduce` never fails and never touches the outside world: storage
//! writes happen in the store's persistence reaction, network calls in
//! the layer that produced the action. An edit or delete whose id
//! matches nothing returns the input tree unchanged (pointer-identical
//! sub-trees), so callers can treat unmatched ids as silent no-ops.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{AlertStatus, Identified};
use crate::state::{
    Action, AlertsState, AppState, AuthState, CategoryUpdate, HealthDataState, ProvidersState,
    RequestsState, UiState,
};

/// Apply one action to the tree, producing the next tree.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        // ── Auth ────────────────────────────────────────────
        Action::SetAuthLoading(loading) => {
            let mut auth = (*state.auth).clone();
            auth.loading = *loading;
            with_auth(state, auth)
        }
        Action::LoginSuccess { token, user } => with_auth(
            state,
            AuthState {
                user: Some(user.clone()),
                token: Some(token.clone()),
                is_authenticated: true,
                loading: false,
            },
        ),
        Action::LoginFailure => with_auth(state, AuthState::signed_out()),
        Action::Logout => AppState {
            auth: Arc::new(AuthState::signed_out()),
            health: Arc::new(HealthDataState::default()),
            providers: Arc::new(ProvidersState::default()),
            requests: Arc::new(RequestsState::default()),
            alerts: Arc::new(AlertsState::default()),
            // UI preferences survive logout.
            ui: Arc::clone(&state.ui),
        },
        Action::SetUser(user) => {
            let mut auth = (*state.auth).clone();
            auth.user = Some(user.clone());
            // A profile alone does not authenticate: the token must
            // already be present for the session to count.
            auth.is_authenticated = auth.token.is_some();
            auth.loading = false;
            with_auth(state, auth)
        }
        Action::UpdateUserAvatar(url) => match &state.auth.user {
            Some(user) => {
                let mut user = user.clone();
                user.avatar_url = Some(url.clone());
                let mut auth = (*state.auth).clone();
                auth.user = Some(user);
                with_auth(state, auth)
            }
            None => state.clone(),
        },

        // ── Health data ─────────────────────────────────────
        Action::SetHealthDataLoading(loading) => {
            let mut health = (*state.health).clone();
            health.loading = *loading;
            with_health(state, health)
        }
        Action::SetHealthData(update) => {
            let mut health = (*state.health).clone();
            if let Some(conditions) = &update.conditions {
                health.conditions = conditions.clone();
            }
            if let Some(diseases) = &update.diseases {
                health.diseases = diseases.clone();
            }
            if let Some(medications) = &update.medications {
                health.medications = medications.clone();
            }
            if let Some(labs) = &update.labs {
                health.labs = labs.clone();
            }
            if let Some(vitals) = &update.vitals {
                health.vitals = vitals.clone();
            }
            if let Some(procedures) = &update.procedures {
                health.procedures = procedures.clone();
            }
            health.loading = false;
            health.last_updated = Some(Utc::now());
            with_health(state, health)
        }
        Action::SetHealthDataCategory(update) => {
            let mut health = (*state.health).clone();
            match update {
                CategoryUpdate::Conditions(data) => health.conditions = data.clone(),
                CategoryUpdate::Diseases(data) => health.diseases = data.clone(),
                CategoryUpdate::Medications(data) => health.medications = data.clone(),
                CategoryUpdate::Labs(data) => health.labs = data.clone(),
                CategoryUpdate::Vitals(data) => health.vitals = data.clone(),
                CategoryUpdate::Procedures(data) => health.procedures = data.clone(),
            }
            with_health(state, health)
        }

        Action::AddCondition(record) => {
            let mut health = (*state.health).clone();
            health.conditions = upsert(&health.conditions, record);
            with_health(state, health)
        }
        Action::EditCondition(record) => {
            match replace_by_id(&state.health.conditions, record) {
                Some(conditions) => {
                    let mut health = (*state.health).clone();
                    health.conditions = conditions;
                    with_health(state, health)
                }
                None => state.clone(),
            }
        }
        Action::DeleteCondition(id) => match remove_by_id(&state.health.conditions, *id) {
            Some(conditions) => {
                let mut health = (*state.health).clone();
                health.conditions = conditions;
                with_health(state, health)
            }
            None => state.clone(),
        },

        Action::AddMedication(record) => {
            let mut health = (*state.health).clone();
            health.medications = upsert(&health.medications, record);
            with_health(state, health)
        }
        Action::EditMedication(record) => {
            match replace_by_id(&state.health.medications, record) {
                Some(medications) => {
                    let mut health = (*state.health).clone();
                    health.medications = medications;
                    with_health(state, health)
                }
                None => state.clone(),
            }
        }
        Action::DeleteMedication(id) => match remove_by_id(&state.health.medications, *id) {
            Some(medications) => {
                let mut health = (*state.health).clone();
                health.medications = medications;
                with_health(state, health)
            }
            None => state.clone(),
        },

        Action::AddLabResult(record) => {
            let mut health = (*state.health).clone();
            health.labs = upsert(&health.labs, record);
            with_health(state, health)
        }
        Action::EditLabResult(record) => match replace_by_id(&state.health.labs, record) {
            Some(labs) => {
                let mut health = (*state.health).clone();
                health.labs = labs;
                with_health(state, health)
            }
            None => state.clone(),
        },
        Action::DeleteLabResult(id) => match remove_by_id(&state.health.labs, *id) {
            Some(labs) => {
                let mut health = (*state.health).clone();
                health.labs = labs;
                with_health(state, health)
            }
            None => state.clone(),
        },

        Action::AddVital(record) => {
            let mut health = (*state.health).clone();
            health.vitals = upsert(&health.vitals, record);
            with_health(state, health)
        }
        Action::EditVital(record) => match replace_by_id(&state.health.vitals, record) {
            Some(vitals) => {
                let mut health = (*state.health).clone();
                health.vitals = vitals;
                with_health(state, health)
            }
            None => state.clone(),
        },
        Action::DeleteVital(id) => match remove_by_id(&state.health.vitals, *id) {
            Some(vitals) => {
                let mut health = (*state.health).clone();
                health.vitals = vitals;
                with_health(state, health)
            }
            None => state.clone(),
        },

        Action::AddProcedure(record) => {
            let mut health = (*state.health).clone();
            health.procedures = upsert(&health.procedures, record);
            with_health(state, health)
        }
        Action::EditProcedure(record) => {
            match replace_by_id(&state.health.procedures, record) {
                Some(procedures) => {
                    let mut health = (*state.health).clone();
                    health.procedures = procedures;
                    with_health(state, health)
                }
                None => state.clone(),
            }
        }
        Action::DeleteProcedure(id) => match remove_by_id(&state.health.procedures, *id) {
            Some(procedures) => {
                let mut health = (*state.health).clone();
                health.procedures = procedures;
                with_health(state, health)
            }
            None => state.clone(),
        },

        Action::ClearHealthData | Action::ClearAllHealthData => {
            with_health(state, HealthDataState::default())
        }

        // ── Providers ───────────────────────────────────────
        Action::SetProvidersLoading(loading) => {
            let mut providers = (*state.providers).clone();
            providers.loading = *loading;
            with_providers(state, providers)
        }
        Action::SetProviders(list) => {
            let mut providers = (*state.providers).clone();
            providers.list = list.clone();
            providers.loading = false;
            with_providers(state, providers)
        }
        Action::SetFacilities(facilities) => {
            let mut providers = (*state.providers).clone();
            providers.facilities = facilities.clone();
            providers.loading = false;
            with_providers(state, providers)
        }

        // ── Requests ────────────────────────────────────────
        Action::SetRequestsLoading(loading) => {
            let mut requests = (*state.requests).clone();
            requests.loading = *loading;
            with_requests(state, requests)
        }
        Action::SetRequestBatches(batches) => {
            let mut requests = (*state.requests).clone();
            requests.batches = batches.clone();
            requests.loading = false;
            with_requests(state, requests)
        }
        Action::SetActiveRequest(batch) => {
            let mut requests = (*state.requests).clone();
            requests.active_request = batch.clone();
            with_requests(state, requests)
        }

        // ── Alerts ──────────────────────────────────────────
        Action::SetAlertsLoading(loading) => {
            let mut alerts = (*state.alerts).clone();
            alerts.loading = *loading;
            with_alerts(state, alerts)
        }
        Action::SetAlerts(list) => {
            with_alerts(state, AlertsState::derived(list.clone(), false))
        }
        Action::MarkAlertRead(id) => set_alert_status(state, *id, AlertStatus::Read),
        Action::MarkAlertUnread(id) => set_alert_status(state, *id, AlertStatus::Unread),
        Action::DeleteAlert(id) => match remove_by_id(&state.alerts.list, *id) {
            Some(list) => {
                with_alerts(state, AlertsState::derived(list, state.alerts.loading))
            }
            None => state.clone(),
        },
        Action::UpdateAlertStatus { id, status } => set_alert_status(state, *id, *status),

        // ── UI ──────────────────────────────────────────────
        Action::ToggleSidebar => with_ui(
            state,
            UiState {
                sidebar_open: !state.ui.sidebar_open,
                theme: state.ui.theme,
            },
        ),
        Action::SetTheme(theme) => with_ui(
            state,
            UiState {
                sidebar_open: state.ui.sidebar_open,
                theme: *theme,
            },
        ),
    }
}

// ═══════════════════════════════════════════════════════════
// Sub-tree replacement helpers
// ═══════════════════════════════════════════════════════════

fn with_auth(state: &AppState, auth: AuthState) -> AppState {
    AppState {
        auth: Arc::new(auth),
        ..state.clone()
    }
}

fn with_health(state: &AppState, health: HealthDataState) -> AppState {
    AppState {
        health: Arc::new(health),
        ..state.clone()
    }
}

fn with_providers(state: &AppState, providers: ProvidersState) -> AppState {
    AppState {
        providers: Arc::new(providers),
        ..state.clone()
    }
}

fn with_requests(state: &AppState, requests: RequestsState) -> AppState {
    AppState {
        requests: Arc::new(requests),
        ..state.clone()
    }
}

fn with_alerts(state: &AppState, alerts: AlertsState) -> AppState {
    AppState {
        alerts: Arc::new(alerts),
        ..state.clone()
    }
}

fn with_ui(state: &AppState, ui: UiState) -> AppState {
    AppState {
        ui: Arc::new(ui),
        ..state.clone()
    }
}

// ═══════════════════════════════════════════════════════════
// By-id collection helpers
// ═══════════════════════════════════════════════════════════

/// Replace the record with a matching id, or append when absent.
/// Appending on duplicate ids would break the no-duplicate invariant,
/// so an add of an existing id behaves as an edit.
fn upsert<T: Identified + Clone>(list: &[T], record: &T) -> Vec<T> {
    let mut next: Vec<T> = list.to_vec();
    match next.iter().position(|r| r.record_id() == record.record_id()) {
        Some(idx) => next[idx] = record.clone(),
        None => next.push(record.clone()),
    }
    next
}

/// Replace the record with a matching id; `None` when the id is absent.
fn replace_by_id<T: Identified + Clone>(list: &[T], record: &T) -> Option<Vec<T>> {
    let idx = list.iter().position(|r| r.record_id() == record.record_id())?;
    let mut next: Vec<T> = list.to_vec();
    next[idx] = record.clone();
    Some(next)
}

/// Remove the record with a matching id; `None` when the id is absent.
fn remove_by_id<T: Identified + Clone>(list: &[T], id: Uuid) -> Option<Vec<T>> {
    if !list.iter().any(|r| r.record_id() == id) {
        return None;
    }
    Some(list.iter().filter(|r| r.record_id() != id).cloned().collect())
}

/// Set one alert's status and re-derive the unread count.
/// Unmatched id is a no-op.
fn set_alert_status(state: &AppState, id: Uuid, status: AlertStatus) -> AppState {
    if !state.alerts.list.iter().any(|a| a.id == id) {
        return state.clone();
    }
    let list = state
        .alerts
        .list
        .iter()
        .cloned()
        .map(|mut alert| {
            if alert.id == id {
                alert.status = status;
            }
            alert
        })
        .collect();
    with_alerts(state, AlertsState::derived(list, state.alerts.loading))
}
