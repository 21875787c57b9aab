use crate::data::PlayerSnapshot;
use crate::helpers::http_client::HttpClient;
use crate::helpers::log_and_ignore;
use log::{debug, trace, warn};
use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

/// Trait for objects that observe canonical snapshot changes
pub trait StateListener: Send + Sync {
    /// Called after a snapshot has been accepted as the new canonical state
    ///
    /// # Arguments
    /// * `snapshot` - The snapshot that just became canonical
    fn on_snapshot(&self, snapshot: &PlayerSnapshot);

    /// Convert to Any for dynamic casting
    fn as_any(&self) -> &dyn Any;
}

/// Owns the single authoritative in-client snapshot of player state.
///
/// The synchronizer is the only writer. It accepts the initial pull result
/// and any number of subsequent push messages, replaces the snapshot
/// wholesale on each accepted update (last-write-wins), and notifies
/// registered listeners after every substitution. Readers obtain a cloned
/// snapshot through [`current`](StateSynchronizer::current), never a
/// reference into the lock.
pub struct StateSynchronizer {
    /// Canonical snapshot; None until the first accepted update
    state: RwLock<Option<PlayerSnapshot>>,

    /// Registered state listeners
    listeners: RwLock<Vec<Weak<dyn StateListener>>>,
}

impl StateSynchronizer {
    /// Create a new synchronizer with no state and no listeners
    pub fn new() -> Self {
        Self {
            state: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Get a clone of the current canonical snapshot, if any
    pub fn current(&self) -> Option<PlayerSnapshot> {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(_) => {
                warn!("Failed to acquire read lock for player state");
                None
            }
        }
    }

    /// Register a listener to be notified of accepted snapshots
    ///
    /// Returns `true` if the listener was added, `false` if it was already
    /// registered or the listener list was unavailable.
    pub fn register_listener(&self, listener: Weak<dyn StateListener>) -> bool {
        let mut listeners = match self.listeners.write() {
            Ok(l) => l,
            Err(_) => {
                warn!("Failed to acquire write lock for listeners");
                return false;
            }
        };

        if let Some(new_listener) = listener.upgrade() {
            for existing in listeners.iter() {
                if let Some(existing) = existing.upgrade() {
                    if Arc::ptr_eq(&existing, &new_listener) {
                        debug!("Listener already registered");
                        return false;
                    }
                }
            }
        }

        listeners.push(listener);
        debug!("Registered state listener, {} total", listeners.len());
        true
    }

    /// Unregister a previously registered listener
    pub fn unregister_listener(&self, listener: &Arc<dyn StateListener>) -> bool {
        let mut listeners = match self.listeners.write() {
            Ok(l) => l,
            Err(_) => {
                warn!("Failed to acquire write lock for listeners");
                return false;
            }
        };

        let before = listeners.len();
        listeners.retain(|weak| match weak.upgrade() {
            Some(existing) => !Arc::ptr_eq(&existing, listener),
            None => false,
        });

        before != listeners.len()
    }

    /// Perform the one-shot pull of the current snapshot at session start.
    ///
    /// The response is reconciled exactly like a push message. On failure the
    /// snapshot stays untouched, the failure is logged and nothing is
    /// rendered until the first push message arrives.
    pub fn initialize(&self, http: &dyn HttpClient, base_url: &str) {
        let url = format!("{}/api/state", base_url.trim_end_matches('/'));
        debug!("Pulling initial state from {}", url);

        match http.get_json(&url) {
            Ok(value) => match serde_json::from_value::<PlayerSnapshot>(value) {
                Ok(snapshot) => {
                    self.apply_snapshot(snapshot);
                }
                Err(e) => log_and_ignore("Initial state pull returned malformed snapshot", &e),
            },
            Err(e) => log_and_ignore("Initial state pull failed", &e),
        }
    }

    /// Handle one inbound push frame.
    ///
    /// Frames that fail to parse are logged and dropped; everything else goes
    /// through [`apply_snapshot`](StateSynchronizer::apply_snapshot).
    pub fn handle_message(&self, text: &str) {
        trace!("Push frame: {}", text);

        match serde_json::from_str::<PlayerSnapshot>(text) {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
            }
            Err(e) => log_and_ignore("Discarding malformed push frame", &e),
        }
    }

    /// Reconcile one snapshot into canonical state.
    ///
    /// Total and idempotent: any syntactically valid snapshot is accepted
    /// without panicking, including semantically inconsistent ones (an
    /// out-of-range position is tolerated by the renderer, not rejected
    /// here). A snapshot with an unrecognized phase produces no transition
    /// and no notification; this keeps the client forward-compatible with
    /// phases added on the backend.
    ///
    /// Returns `true` if the snapshot became canonical state.
    pub fn apply_snapshot(&self, snapshot: PlayerSnapshot) -> bool {
        if !snapshot.has_known_phase() {
            debug!("Ignoring snapshot with unrecognized phase");
            return false;
        }

        {
            let mut state = match self.state.write() {
                Ok(s) => s,
                Err(_) => {
                    warn!("Failed to acquire write lock for player state");
                    return false;
                }
            };
            // Whole-object substitution; each snapshot is complete
            *state = Some(snapshot.clone());
        }

        self.notify_listeners(&snapshot);
        true
    }

    /// Notify all registered listeners of an accepted snapshot
    fn notify_listeners(&self, snapshot: &PlayerSnapshot) {
        self.prune_dead_listeners();

        if let Ok(listeners) = self.listeners.read() {
            debug!("Notifying {} listeners of snapshot {}", listeners.len(), snapshot);
            for weak in listeners.iter() {
                if let Some(listener) = weak.upgrade() {
                    listener.on_snapshot(snapshot);
                }
            }
        }
    }

    /// Remove listeners whose owners have been dropped
    fn prune_dead_listeners(&self) {
        if let Ok(mut listeners) = self.listeners.write() {
            let before = listeners.len();
            listeners.retain(|weak| weak.upgrade().is_some());
            let pruned = before - listeners.len();
            if pruned > 0 {
                debug!("Pruned {} dead listeners", pruned);
            }
        }
    }
}

impl Default for StateSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}
