use std::{fmt, time::Duration};

use url::Url;

use super::{
    ConfigError, Configs,
    loaders::{
        environment::{env_or, optional_env},
        resolve_env,
    },
};

pub const DEFAULT_SECRET_PATH: &str = "secret/data/openai";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Where the secret lives and how to authenticate against Vault.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub vault_addr: String,
    pub vault_token: String,
    pub secret_path: String,
    pub timeout: Duration,
    pub namespace: Option<String>,
}

impl FetchConfig {
    pub fn new(vault_addr: impl Into<String>, vault_token: impl Into<String>) -> Self {
        Self {
            vault_addr: vault_addr.into(),
            vault_token: vault_token.into(),
            secret_path: DEFAULT_SECRET_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            namespace: None,
        }
    }

    pub fn with_secret_path(mut self, secret_path: impl Into<String>) -> Self {
        self.secret_path = secret_path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchConfig")
            .field("vault_addr", &self.vault_addr)
            .field("vault_token", &"<redacted>")
            .field("secret_path", &self.secret_path)
            .field("timeout", &self.timeout)
            .field("namespace", &self.namespace)
            .finish()
    }
}

fn validate_vault_addr(vault_addr: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: "VAULT_ADDR".to_string(),
        reason,
    };

    let url = Url::parse(vault_addr).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

fn load_timeout() -> Result<Duration, ConfigError> {
    let Some(raw) = optional_env("VAULT_TIMEOUT_MS") else {
        return Ok(DEFAULT_TIMEOUT);
    };

    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "VAULT_TIMEOUT_MS".to_string(),
            reason: format!("expected a positive number of milliseconds, got '{raw}'"),
        })
}

#[async_trait::async_trait]
impl Configs for FetchConfig {
    async fn load() -> Result<Self, ConfigError> {
        let vault_addr = resolve_env("VAULT_ADDR").await?;
        validate_vault_addr(&vault_addr)?;

        let vault_token = resolve_env("VAULT_TOKEN").await?;

        let secret_path = env_or("VAULT_SECRET_PATH", DEFAULT_SECRET_PATH)
            .trim()
            .trim_matches('/')
            .to_string();
        if secret_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "VAULT_SECRET_PATH".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let namespace = optional_env("VAULT_NAMESPACE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(FetchConfig {
            vault_addr,
            vault_token,
            secret_path,
            timeout: load_timeout()?,
            namespace,
        })
    }
}
