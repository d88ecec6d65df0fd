//! Seller presence tracking service.
//!
//! Tracks session heartbeats per seller in Redis sorted sets and serves
//! the set of sessions active within the last 30 minutes, expiring stale
//! entries lazily at query time.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use api::{router, AppState};
use redis_store::{RedisClient, RedisConfig, SortedSetStore};
use telemetry::{health, init_tracing_from_env};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    store: RedisConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store: RedisConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting presence engine v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    // Create the store client. This only parses the URL; the connection
    // itself is established on first use, so a store that is down right
    // now does not prevent startup.
    let store = Arc::new(
        RedisClient::new(config.store.clone()).context("Failed to create Redis client")?,
    );

    // Check health and update status. A failed check leaves the service
    // running degraded; requests surface store errors as 500s until the
    // store comes back.
    check_health(&store).await;

    // Create application state
    let state = AppState::new(store.clone() as Arc<dyn SortedSetStore>);

    // Create router
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("PRESENCE")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Flat overrides, matching the deployment environment's variable names
    if let Ok(host) = std::env::var("STORE_HOST") {
        config.store.host = host;
    }
    if let Ok(port) = std::env::var("STORE_PORT") {
        config.store.port = port.parse().context("Invalid STORE_PORT")?;
    }
    if let Ok(password) = std::env::var("STORE_PASSWORD") {
        config.store.password = Some(password);
    }
    if let Ok(port) = std::env::var("LISTEN_PORT") {
        config.port = port.parse().context("Invalid LISTEN_PORT")?;
    }

    Ok(config)
}

/// Check store health on startup.
async fn check_health(store: &RedisClient) {
    if redis_store::health::check_connection(store).await {
        health().store.set_healthy();
        info!("Redis connection: healthy");
    } else {
        health().store.set_unhealthy("Connection failed");
        error!("Redis connection: unhealthy");
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
