pub mod fetch;
pub mod loaders;
pub mod server;

pub use fetch::FetchConfig;
pub use server::{InvocationMode, ServerConfig};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    MissingVariable(String),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Failed to load value for '{name}': {reason}")]
    Loader { name: String, reason: String },
}

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FunctionConfig {
    pub server_config: ServerConfig,
    pub fetch_config: FetchConfig,
}

#[async_trait::async_trait]
impl Configs for FunctionConfig {
    async fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            server_config: ServerConfig::load().await?,
            fetch_config: FetchConfig::load().await?,
        })
    }
}
