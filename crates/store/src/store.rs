//! Sorted-set operations against the presence store.

use async_trait::async_trait;
use presence_core::{Error, Result};
use redis::AsyncCommands;

use crate::client::RedisClient;

/// The ordered-set primitive the presence tracker runs on.
///
/// The production implementation talks to Redis; tests substitute an
/// in-memory implementation. Scores are integer epoch-seconds and every
/// range is inclusive on both ends.
#[async_trait]
pub trait SortedSetStore: Send + Sync {
    /// Add (member, score) to the set at `key`, overwriting the score if
    /// the member already exists. Creates the set if absent.
    async fn upsert(&self, key: &str, member: &str, score: i64) -> Result<()>;

    /// Remove every member whose score falls in `[min, max]`. Returns the
    /// number removed; removing from an absent set is a no-op.
    async fn remove_range(&self, key: &str, min: i64, max: i64) -> Result<u64>;

    /// Members with score in `[min, max]`, ascending by score (equal
    /// scores in the store's member order).
    async fn range(&self, key: &str, min: i64, max: i64) -> Result<Vec<String>>;

    /// Round-trip connectivity probe.
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
impl SortedSetStore for RedisClient {
    async fn upsert(&self, key: &str, member: &str, score: i64) -> Result<()> {
        let mut conn = self.connection().await?;

        let _: () = conn
            .zadd(key, member, score)
            .await
            .map_err(|e| Error::store(format!("ZADD {} failed: {}", key, e)))?;

        Ok(())
    }

    async fn remove_range(&self, key: &str, min: i64, max: i64) -> Result<u64> {
        let mut conn = self.connection().await?;

        let removed: u64 = conn
            .zrembyscore(key, min, max)
            .await
            .map_err(|e| Error::store(format!("ZREMRANGEBYSCORE {} failed: {}", key, e)))?;

        Ok(removed)
    }

    async fn range(&self, key: &str, min: i64, max: i64) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;

        let members: Vec<String> = conn
            .zrangebyscore(key, min, max)
            .await
            .map_err(|e| Error::store(format!("ZRANGEBYSCORE {} failed: {}", key, e)))?;

        Ok(members)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::store(format!("PING failed: {}", e)))?;

        if pong != "PONG" {
            return Err(Error::store(format!("Unexpected PING reply: {}", pong)));
        }

        Ok(())
    }
}
