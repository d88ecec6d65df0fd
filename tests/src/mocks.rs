//! Mock implementations for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use presence_core::Result;
use redis_store::SortedSetStore;
use std::collections::{BTreeMap, HashMap};

/// In-memory sorted-set store.
///
/// Implements the same `SortedSetStore` trait as the Redis client, with
/// matching semantics: upsert-by-member, inclusive score ranges,
/// ascending score order with lexicographic member order on ties, and
/// empty-means-absent (a set whose last member is removed disappears).
#[derive(Default)]
pub struct MemoryStore {
    /// key -> (member -> score)
    sets: Mutex<HashMap<String, BTreeMap<String, i64>>>,
    /// Number of trait operations served.
    ops: Mutex<u64>,
    /// Simulate store failures if set.
    should_fail: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a member directly, bypassing the tracker.
    pub fn seed(&self, key: &str, member: &str, score: i64) {
        self.sets
            .lock()
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string(), score);
    }

    /// All (member, score) pairs at `key`, ascending by (score, member).
    pub fn members(&self, key: &str) -> Vec<(String, i64)> {
        let sets = self.sets.lock();
        let Some(set) = sets.get(key) else {
            return Vec::new();
        };

        let mut members: Vec<(String, i64)> =
            set.iter().map(|(m, &s)| (m.clone(), s)).collect();
        members.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        members
    }

    pub fn contains(&self, key: &str, member: &str) -> bool {
        self.sets
            .lock()
            .get(key)
            .is_some_and(|set| set.contains_key(member))
    }

    /// Whether a set exists at `key` (it exists iff it has >= 1 member).
    pub fn has_set(&self, key: &str) -> bool {
        self.sets.lock().contains_key(key)
    }

    /// Total trait operations served, for asserting "no store call".
    pub fn op_count(&self) -> u64 {
        *self.ops.lock()
    }

    /// Set failure mode for testing error handling.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }

    fn record_op(&self) -> Result<()> {
        *self.ops.lock() += 1;
        if *self.should_fail.lock() {
            return Err(presence_core::Error::store("Mock store failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl SortedSetStore for MemoryStore {
    async fn upsert(&self, key: &str, member: &str, score: i64) -> Result<()> {
        self.record_op()?;
        self.seed(key, member, score);
        Ok(())
    }

    async fn remove_range(&self, key: &str, min: i64, max: i64) -> Result<u64> {
        self.record_op()?;

        let mut sets = self.sets.lock();
        let Some(set) = sets.get_mut(key) else {
            return Ok(0);
        };

        let before = set.len();
        set.retain(|_, &mut score| score < min || score > max);
        let removed = (before - set.len()) as u64;

        if set.is_empty() {
            sets.remove(key);
        }

        Ok(removed)
    }

    async fn range(&self, key: &str, min: i64, max: i64) -> Result<Vec<String>> {
        self.record_op()?;

        let sets = self.sets.lock();
        let Some(set) = sets.get(key) else {
            return Ok(Vec::new());
        };

        let mut matches: Vec<(&String, i64)> = set
            .iter()
            .filter(|(_, &score)| score >= min && score <= max)
            .map(|(m, &s)| (m, s))
            .collect();
        matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        Ok(matches.into_iter().map(|(m, _)| m.clone()).collect())
    }

    async fn ping(&self) -> Result<()> {
        self.record_op()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_overwrites_score() {
        let store = MemoryStore::new();

        store.upsert("k", "a", 100).await.unwrap();
        store.upsert("k", "a", 200).await.unwrap();

        assert_eq!(store.members("k"), vec![("a".to_string(), 200)]);
    }

    #[tokio::test]
    async fn remove_range_is_inclusive_and_drops_empty_sets() {
        let store = MemoryStore::new();
        store.seed("k", "a", 100);
        store.seed("k", "b", 200);

        let removed = store.remove_range("k", 0, 100).await.unwrap();
        assert_eq!(removed, 1);
        assert!(store.has_set("k"));

        let removed = store.remove_range("k", 200, 300).await.unwrap();
        assert_eq!(removed, 1);
        assert!(!store.has_set("k"));

        // Absent set is a no-op, not an error
        let removed = store.remove_range("k", 0, 1000).await.unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn range_orders_by_score_then_member() {
        let store = MemoryStore::new();
        store.seed("k", "late", 300);
        store.seed("k", "b", 100);
        store.seed("k", "a", 100);

        let members = store.range("k", 0, 1000).await.unwrap();
        assert_eq!(members, vec!["a", "b", "late"]);

        let members = store.range("k", 100, 100).await.unwrap();
        assert_eq!(members, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn failure_mode_errors_every_operation() {
        let store = MemoryStore::new();
        store.set_should_fail(true);

        assert!(store.upsert("k", "a", 1).await.is_err());
        assert!(store.remove_range("k", 0, 1).await.is_err());
        assert!(store.range("k", 0, 1).await.is_err());
        assert!(store.ping().await.is_err());
    }
}
