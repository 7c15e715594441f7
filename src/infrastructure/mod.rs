//! Infrastructure layer - Config persistence and the remote API client

pub mod config;
pub mod notion;

pub use config::{Config, StoredConfig};
pub use notion::NotionClient;
