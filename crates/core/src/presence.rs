//! Active-window arithmetic and presence set conventions.
//!
//! A session is "active" while its last-seen timestamp survives the
//! expiry sweep. Both the sweep and the read use inclusive score ranges,
//! so a heartbeat recorded at T is still returned at T + 1799 and is
//! removed at T + 1800.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Trailing window defining "active" (30 minutes).
pub const ACTIVE_WINDOW_SECS: i64 = 1800;

/// Key under which a seller's presence set is stored.
pub fn presence_key(seller_id: &str) -> String {
    format!("active_users:{seller_id}")
}

/// Current time truncated to whole seconds since epoch.
pub fn epoch_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Oldest last-seen timestamp still considered active at `now`.
pub fn cutoff(now: i64) -> i64 {
    now - ACTIVE_WINDOW_SECS
}

/// Inclusive score range removed by the expiry sweep.
pub fn sweep_range(now: i64) -> (i64, i64) {
    (0, cutoff(now))
}

/// Inclusive score range returned by the active-session read.
pub fn read_range(now: i64) -> (i64, i64) {
    (cutoff(now), now)
}

/// Sessions active for a seller at query time, ascending by last-seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSessions {
    pub seller_id: String,
    pub sessions: Vec<String>,
}

impl ActiveSessions {
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}
