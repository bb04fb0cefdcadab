//! The state container.
//!
//! `Store` owns the immutable tree behind an `RwLock`, runs the pure
//! reducer on every dispatch, and reacts to auth changes by syncing
//! the two persisted keys. Subscribers are notified synchronously with
//! the adopted snapshot, after the write lock is released — a listener
//! that dispatches again recurses instead of deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::state::{reduce, Action, AppState};
use crate::storage::{self, KeyValueStore, MemoryStore};

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`]; pass to
/// [`Store::unsubscribe`] to stop receiving snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Reducer-driven application store. One per application session;
/// shared via `Arc` between the UI layer and async tasks.
pub struct Store {
    state: RwLock<AppState>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
    kv: Arc<dyn KeyValueStore>,
}

impl Store {
    /// Create a store persisting auth state through `kv`.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(AppState::initial()),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(1),
            kv,
        }
    }

    /// Store backed by in-memory persistence. Used by tests and by
    /// embedders that manage persistence themselves.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The persistence collaborator (the bootstrap reads it directly).
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    // ── Dispatch ────────────────────────────────────────────

    /// Apply one action: reduce under the write lock, adopt the new
    /// tree, sync persistence if `auth` changed, notify subscribers.
    ///
    /// Never fails. A poisoned lock drops the action with an error log
    /// rather than panicking the UI thread.
    pub fn dispatch(&self, action: Action) {
        let (snapshot, auth_changed) = {
            let mut guard = match self.state.write() {
                Ok(guard) => guard,
                Err(_) => {
                    tracing::error!(action = action.name(), "State lock poisoned, action dropped");
                    return;
                }
            };
            let next = reduce(&guard, &action);
            let auth_changed = !Arc::ptr_eq(&guard.auth, &next.auth);
            *guard = next.clone();
            (next, auth_changed)
        };

        tracing::debug!(action = action.name(), auth_changed, "Dispatched");

        if auth_changed {
            storage::sync_auth(self.kv.as_ref(), &snapshot.auth);
        }
        self.notify(&snapshot);
    }

    // ── Reads ───────────────────────────────────────────────

    /// Current tree. Cheap: six `Arc` clones.
    pub fn snapshot(&self) -> AppState {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| AppState::initial())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .map(|guard| guard.auth.is_authenticated)
            .unwrap_or(false)
    }

    pub fn unread_count(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.alerts.unread_count)
            .unwrap_or(0)
    }

    // ── Subscriptions ───────────────────────────────────────

    /// Register a listener called synchronously with each adopted
    /// snapshot. Listeners run on the dispatching thread.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(listener_id, _)| *listener_id != id.0);
        }
    }

    fn notify(&self, snapshot: &AppState) {
        // The registry lock is released before any listener runs, so a
        // listener may subscribe or unsubscribe without deadlocking.
        // Registry changes take effect from the next dispatch on.
        let current: Vec<Listener> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };
        for listener in &current {
            listener(snapshot);
        }
    }
}
