use super::{
    ConfigError, Configs,
    loaders::environment::{env_or, optional_env},
};

const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:3232";
pub const LAMBDA_RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Poll the Lambda Runtime API for invocations.
    Lambda,
    /// Serve `/invoke` and `/health` over plain HTTP.
    Serve,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_address: String,
    pub lambda_runtime_api: Option<String>,
}

impl ServerConfig {
    /// An explicit mode wins; otherwise run under Lambda when its Runtime API is advertised.
    pub fn mode(&self, requested: Option<InvocationMode>) -> InvocationMode {
        match requested {
            Some(mode) => mode,
            None if self.lambda_runtime_api.is_some() => InvocationMode::Lambda,
            None => InvocationMode::Serve,
        }
    }
}

#[async_trait::async_trait]
impl Configs for ServerConfig {
    async fn load() -> Result<Self, ConfigError> {
        let listen_address = env_or("LISTEN_ADDRESS", DEFAULT_LISTEN_ADDRESS);

        let lambda_runtime_api = optional_env(LAMBDA_RUNTIME_API_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(ServerConfig {
            listen_address,
            lambda_runtime_api,
        })
    }
}
