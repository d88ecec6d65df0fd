//! Redis-backed ordered presence store for the presence engine.

pub mod client;
pub mod config;
pub mod health;
pub mod store;
pub mod tracker;

pub use client::RedisClient;
pub use config::RedisConfig;
pub use store::SortedSetStore;
pub use tracker::PresenceTracker;
