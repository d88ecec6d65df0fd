//! Presence tracking over the sorted-set store.
//!
//! The tracker holds no state of its own; every seller's presence set
//! lives in the store, keyed by `active_users:<sellerId>`. Expired
//! entries are pruned lazily, as a side effect of each query.

use std::sync::Arc;

use presence_core::{
    epoch_seconds, presence_key, read_range, sweep_range, ActiveSessions, Heartbeat, Result,
};
use telemetry::metrics;
use tracing::debug;

use crate::store::SortedSetStore;

/// Maps (seller, session, timestamp) triples onto store operations.
pub struct PresenceTracker {
    store: Arc<dyn SortedSetStore>,
}

impl PresenceTracker {
    pub fn new(store: Arc<dyn SortedSetStore>) -> Self {
        Self { store }
    }

    /// Record that a session was seen for a seller just now.
    ///
    /// Upserts (sessionId, now) into the seller's presence set, creating
    /// the set on first heartbeat. A repeated heartbeat overwrites the
    /// session's last-seen timestamp rather than adding a duplicate.
    pub async fn record_heartbeat(&self, heartbeat: &Heartbeat) -> Result<()> {
        let now = epoch_seconds();
        let key = presence_key(&heartbeat.seller_id);

        self.store
            .upsert(&key, &heartbeat.session_id, now)
            .await?;

        debug!(
            seller_id = %heartbeat.seller_id,
            session_id = %heartbeat.session_id,
            last_seen = now,
            "Heartbeat recorded"
        );

        Ok(())
    }

    /// Sessions seen for a seller within the active window, ascending by
    /// last-seen timestamp.
    ///
    /// Sweeps expired entries out of the set first, then reads what
    /// remains. The sweep and the read are two separate store commands,
    /// not a transaction; a session expiring between them may be observed
    /// either way. A seller with no presence set yields an empty list.
    pub async fn active_sessions(&self, seller_id: &str) -> Result<ActiveSessions> {
        let now = epoch_seconds();
        let key = presence_key(seller_id);

        let (sweep_min, sweep_max) = sweep_range(now);
        let swept = self.store.remove_range(&key, sweep_min, sweep_max).await?;
        if swept > 0 {
            metrics().sessions_swept.inc_by(swept);
            debug!(seller_id = %seller_id, swept = swept, "Expired sessions removed");
        }

        let (read_min, read_max) = read_range(now);
        let sessions = self.store.range(&key, read_min, read_max).await?;

        Ok(ActiveSessions {
            seller_id: seller_id.to_string(),
            sessions,
        })
    }
}
