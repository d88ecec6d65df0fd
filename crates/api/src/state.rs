//! Application state shared across handlers.

use redis_store::{PresenceTracker, SortedSetStore};
use std::sync::Arc;

/// Shared application state.
///
/// Holds the single long-lived presence tracker; the store behind it is
/// injected so tests can substitute an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<PresenceTracker>,
}

impl AppState {
    pub fn new(store: Arc<dyn SortedSetStore>) -> Self {
        Self {
            tracker: Arc::new(PresenceTracker::new(store)),
        }
    }
}
