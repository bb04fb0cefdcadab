//! Carelog — client-side core of a patient health-records dashboard.
//!
//! The only source of truth is a single reducer-driven [`store::Store`]:
//! consumers dispatch [`state::Action`]s, the pure reducer produces the
//! next immutable tree, and two side channels react to it — the auth
//! persistence synchronizer ([`storage`]) and subscriber callbacks.
//! [`bootstrap::Bootstrap`] restores a persisted session once at
//! startup and reconciles it against the records API ([`api`]).

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;

pub use state::{Action, AppState};
pub use store::Store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing once at application start.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate-scoped
/// default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
