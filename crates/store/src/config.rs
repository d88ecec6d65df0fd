//! Redis connection configuration.

use serde::{Deserialize, Serialize};

/// Redis client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis host
    #[serde(default = "default_host")]
    pub host: String,
    /// Redis port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Password (optional)
    pub password: Option<String>,
    /// Database index
    #[serde(default)]
    pub db: i64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    6379
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            password: None,
            db: 0,
        }
    }
}

impl RedisConfig {
    /// Connection URL in the `redis://[:password@]host:port/db` form.
    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!(
                "redis://:{}@{}:{}/{}",
                password, self.host, self.port, self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}
