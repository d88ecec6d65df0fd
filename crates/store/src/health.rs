//! Redis health checks.

use tracing::{debug, error};

use crate::client::RedisClient;
use crate::store::SortedSetStore;

/// Check Redis connection health.
pub async fn check_connection(client: &RedisClient) -> bool {
    match client.ping().await {
        Ok(()) => {
            debug!("Redis connection healthy");
            true
        }
        Err(e) => {
            error!("Redis health check failed: {}", e);
            false
        }
    }
}
