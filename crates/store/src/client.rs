//! Redis client wrapper.

use presence_core::{Error, Result};
use redis::aio::ConnectionManager;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::RedisConfig;

/// Long-lived Redis handle shared by all request handlers.
///
/// The underlying connection is established lazily on first use: a store
/// that is unreachable at startup leaves the service running degraded,
/// and the connection is attempted again on the next operation.
pub struct RedisClient {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
    config: RedisConfig,
}

impl RedisClient {
    /// Creates a new Redis client. This only parses the connection URL;
    /// no network traffic happens here.
    pub fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url().as_str())
            .map_err(|e| Error::store(format!("Invalid Redis URL: {}", e)))?;

        info!(
            host = %config.host,
            port = config.port,
            db = config.db,
            "Created Redis client"
        );

        Ok(Self {
            client,
            conn: OnceCell::new(),
            config,
        })
    }

    /// Multiplexed connection with the redis crate's own reconnect
    /// behavior, established on first call.
    pub(crate) async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .conn
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await
            .map_err(|e| Error::store(format!("Redis connection failed: {}", e)))?;

        Ok(manager.clone())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }
}
