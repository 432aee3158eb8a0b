use std::{sync::Arc, time::Duration};

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{VAULT_NAMESPACE_HEADER, VAULT_TOKEN_HEADER, VaultClient};
use crate::{configs::FetchConfig, error::FetchError};

/// Talks to the Vault HTTP API with a fixed per-request timeout.
#[derive(Clone)]
pub struct HttpVaultClient {
    config: Arc<FetchConfig>,
    client: Client,
}

impl HttpVaultClient {
    pub fn new(config: Arc<FetchConfig>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}",
            self.config.vault_addr.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                after: self.timeout(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl VaultClient for HttpVaultClient {
    async fn read_secret(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.api_url(path);
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(VAULT_TOKEN_HEADER, &self.config.vault_token);
        if let Some(namespace) = &self.config.namespace {
            request = request.header(VAULT_NAMESPACE_HEADER, namespace);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
