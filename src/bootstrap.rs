//! Session restore at container creation.
//!
//! Explicit three-state machine: `Cold` reads the two persisted keys
//! synchronously; a valid pair restores the session optimistically
//! (`Restoring`) so the dashboard is usable before any network round
//! trip; an async profile refresh then reconciles against the API and
//! the machine reaches `Resolved`. Corrupt or absent persisted data
//! resolves straight to signed-out — never a user-visible error.

use std::sync::Arc;

use crate::api::ProfileApi;
use crate::config;
use crate::models::UserProfile;
use crate::state::Action;
use crate::store::Store;

/// Where the restore machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// Persisted keys not read yet.
    Cold,
    /// Session restored optimistically; profile refresh outstanding.
    Restoring,
    /// `auth.loading` settled; no further automatic transitions.
    Resolved,
}

/// What the synchronous restore step found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Token and profile restored; refresh pending.
    Restored { token: String },
    /// Nothing persisted; staying signed out.
    NoSession,
    /// Stored profile was unparsable; both keys cleared.
    CorruptUser,
}

/// One-shot session-restore machine. Construct once per store.
pub struct Bootstrap {
    phase: BootstrapPhase,
    restored_token: Option<String>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self {
            phase: BootstrapPhase::Cold,
            restored_token: None,
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// Synchronous restore step. Runs exactly once; calling it again
    /// is a no-op reporting the prior outcome shape as `NoSession`.
    pub fn restore(&mut self, store: &Store) -> RestoreOutcome {
        if self.phase != BootstrapPhase::Cold {
            return RestoreOutcome::NoSession;
        }

        let kv = store.storage();
        let token = kv.get(config::AUTH_TOKEN_KEY);
        let raw_user = kv.get(config::USER_DATA_KEY);

        match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => {
                    store.dispatch(Action::SetAuthLoading(true));
                    store.dispatch(Action::LoginSuccess {
                        token: token.clone(),
                        user,
                    });
                    tracing::info!("Session restored from storage");
                    self.phase = BootstrapPhase::Restoring;
                    self.restored_token = Some(token.clone());
                    RestoreOutcome::Restored { token }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored user profile unparsable, clearing session");
                    kv.remove(config::AUTH_TOKEN_KEY);
                    kv.remove(config::USER_DATA_KEY);
                    store.dispatch(Action::SetAuthLoading(false));
                    self.phase = BootstrapPhase::Resolved;
                    RestoreOutcome::CorruptUser
                }
            },
            _ => {
                store.dispatch(Action::SetAuthLoading(false));
                self.phase = BootstrapPhase::Resolved;
                RestoreOutcome::NoSession
            }
        }
    }

    /// Async reconcile step: refresh the profile from the API.
    ///
    /// A refresh failure keeps the optimistic session — a transient
    /// outage must not log the user out.
    pub async fn reconcile<A: ProfileApi>(&mut self, store: &Store, api: &A) {
        if self.phase != BootstrapPhase::Restoring {
            return;
        }
        let token = match &self.restored_token {
            Some(token) => token.clone(),
            None => {
                self.phase = BootstrapPhase::Resolved;
                return;
            }
        };

        match api.fetch_profile(&token).await {
            Ok(profile) => {
                tracing::debug!("Refreshed profile from API");
                // The store's persistence reaction re-persists it.
                store.dispatch(Action::SetUser(profile));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Profile refresh failed, keeping restored session");
            }
        }
        self.phase = BootstrapPhase::Resolved;
    }

    /// Full restore-then-reconcile sequence.
    pub async fn run<A: ProfileApi>(store: &Store, api: &A) -> RestoreOutcome {
        let mut bootstrap = Bootstrap::new();
        let outcome = bootstrap.restore(store);
        bootstrap.reconcile(store, api).await;
        outcome
    }

    /// Restore synchronously, then reconcile on a background task.
    ///
    /// This is the shape the application root wants at startup: the
    /// dashboard renders from the optimistic session immediately while
    /// the profile refresh settles in the background. The late
    /// `SetUser` dispatch is harmless if the UI has moved on; tearing
    /// the store down before it lands is the caller's concern.
    pub fn restore_and_spawn_reconcile<A>(store: Arc<Store>, api: A) -> RestoreOutcome
    where
        A: ProfileApi + Send + Sync + 'static,
    {
        let mut bootstrap = Bootstrap::new();
        let outcome = bootstrap.restore(&store);
        if bootstrap.phase() == BootstrapPhase::Restoring {
            tokio::spawn(async move {
                bootstrap.reconcile(&store, &api).await;
            });
        }
        outcome
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(first_name: &str) -> UserProfile {
        UserProfile {
            id: Uuid::from_u128(1),
            email: "pat@example.com".into(),
            first_name: first_name.into(),
            last_name: "Doe".into(),
            date_of_birth: None,
            phone: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    fn seeded_store(token: &str, raw_user: &str) -> Store {
        let store = Store::in_memory();
        store.storage().set(config::AUTH_TOKEN_KEY, token);
        store.storage().set(config::USER_DATA_KEY, raw_user);
        store
    }

    struct StubApi {
        result: Result<UserProfile, ()>,
    }

    impl ProfileApi for StubApi {
        async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
            self.result
                .clone()
                .map_err(|_| ApiError::Connection("http://stub".into()))
        }
    }

    #[test]
    fn restore_with_valid_session_is_optimistic() {
        let raw = serde_json::to_string(&user("Pat")).unwrap();
        let store = seeded_store("t1", &raw);
        let mut bootstrap = Bootstrap::new();

        let outcome = bootstrap.restore(&store);

        assert_eq!(outcome, RestoreOutcome::Restored { token: "t1".into() });
        assert_eq!(bootstrap.phase(), BootstrapPhase::Restoring);
        let state = store.snapshot();
        assert!(state.auth.is_authenticated);
        assert!(!state.auth.loading);
        assert_eq!(state.auth.user.as_ref().unwrap().first_name, "Pat");
    }

    #[test]
    fn restore_with_corrupt_user_clears_both_keys() {
        let store = seeded_store("t1", "{not json");
        let mut bootstrap = Bootstrap::new();

        let outcome = bootstrap.restore(&store);

        assert_eq!(outcome, RestoreOutcome::CorruptUser);
        assert_eq!(bootstrap.phase(), BootstrapPhase::Resolved);
        assert!(store.storage().get(config::AUTH_TOKEN_KEY).is_none());
        assert!(store.storage().get(config::USER_DATA_KEY).is_none());
        let state = store.snapshot();
        assert!(!state.auth.is_authenticated);
        assert!(!state.auth.loading);
    }

    #[test]
    fn restore_with_empty_storage_resolves_signed_out() {
        let store = Store::in_memory();
        let mut bootstrap = Bootstrap::new();

        let outcome = bootstrap.restore(&store);

        assert_eq!(outcome, RestoreOutcome::NoSession);
        assert_eq!(bootstrap.phase(), BootstrapPhase::Resolved);
        assert!(!store.snapshot().auth.loading);
    }

    #[test]
    fn restore_with_token_but_no_user_resolves_signed_out() {
        let store = Store::in_memory();
        store.storage().set(config::AUTH_TOKEN_KEY, "t1");
        let mut bootstrap = Bootstrap::new();

        assert_eq!(bootstrap.restore(&store), RestoreOutcome::NoSession);
        assert!(!store.snapshot().auth.is_authenticated);
    }

    #[test]
    fn restore_runs_only_once() {
        let raw = serde_json::to_string(&user("Pat")).unwrap();
        let store = seeded_store("t1", &raw);
        let mut bootstrap = Bootstrap::new();

        bootstrap.restore(&store);
        let again = bootstrap.restore(&store);

        assert_eq!(again, RestoreOutcome::NoSession);
        assert_eq!(bootstrap.phase(), BootstrapPhase::Restoring);
    }

    #[tokio::test]
    async fn reconcile_success_adopts_fresh_profile() {
        let raw = serde_json::to_string(&user("Pat")).unwrap();
        let store = seeded_store("t1", &raw);
        let mut bootstrap = Bootstrap::new();
        bootstrap.restore(&store);

        let api = StubApi {
            result: Ok(user("Patricia")),
        };
        bootstrap.reconcile(&store, &api).await;

        assert_eq!(bootstrap.phase(), BootstrapPhase::Resolved);
        let state = store.snapshot();
        assert_eq!(state.auth.user.as_ref().unwrap().first_name, "Patricia");
        assert!(state.auth.is_authenticated);
        // Fresh profile re-persisted.
        let stored: UserProfile =
            serde_json::from_str(&store.storage().get(config::USER_DATA_KEY).unwrap()).unwrap();
        assert_eq!(stored.first_name, "Patricia");
    }

    #[tokio::test]
    async fn reconcile_failure_keeps_optimistic_session() {
        let raw = serde_json::to_string(&user("Pat")).unwrap();
        let store = seeded_store("t1", &raw);
        let mut bootstrap = Bootstrap::new();
        bootstrap.restore(&store);

        let api = StubApi { result: Err(()) };
        bootstrap.reconcile(&store, &api).await;

        assert_eq!(bootstrap.phase(), BootstrapPhase::Resolved);
        let state = store.snapshot();
        assert!(state.auth.is_authenticated);
        assert_eq!(state.auth.user.as_ref().unwrap().first_name, "Pat");
    }

    #[tokio::test]
    async fn reconcile_without_restore_is_noop() {
        let store = Store::in_memory();
        let mut bootstrap = Bootstrap::new();
        let api = StubApi {
            result: Ok(user("X")),
        };
        bootstrap.reconcile(&store, &api).await;
        assert_eq!(bootstrap.phase(), BootstrapPhase::Cold);
        assert!(store.snapshot().auth.user.is_none());
    }

    #[tokio::test]
    async fn spawned_reconcile_lands_in_background() {
        let raw = serde_json::to_string(&user("Pat")).unwrap();
        let store = Arc::new(seeded_store("t1", &raw));
        let api = StubApi {
            result: Ok(user("Patricia")),
        };

        let outcome = Bootstrap::restore_and_spawn_reconcile(Arc::clone(&store), api);
        assert_eq!(outcome, RestoreOutcome::Restored { token: "t1".into() });
        // Optimistic session is usable before the refresh settles.
        assert!(store.snapshot().auth.is_authenticated);

        // The stub future resolves on the first poll; yield until the
        // spawned task has run.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            store.snapshot().auth.user.as_ref().unwrap().first_name,
            "Patricia"
        );
    }

    #[tokio::test]
    async fn run_covers_restore_and_reconcile() {
        let raw = serde_json::to_string(&user("Pat")).unwrap();
        let store = seeded_store("t1", &raw);
        let api = StubApi {
            result: Ok(user("Patricia")),
        };

        let outcome = Bootstrap::run(&store, &api).await;

        assert_eq!(outcome, RestoreOutcome::Restored { token: "t1".into() });
        assert_eq!(
            store.snapshot().auth.user.as_ref().unwrap().first_name,
            "Patricia"
        );
    }
}
