//! The secret fetch function: one Vault read per invocation, folded into a
//! status code and a small JSON body.

pub mod model;

pub use model::{
    Event, FetchOutcome, HandlerResult, InvocationContext, LambdaResponse, ResponseBody,
    parse_event,
};

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    configs::FetchConfig,
    error::FetchError,
    vault::{HttpVaultClient, VaultClient, kv_field},
};

pub const API_KEY_FIELD: &str = "api_key";

#[derive(Clone)]
pub struct SecretFetchHandler {
    client: Arc<dyn VaultClient>,
    secret_path: String,
}

impl SecretFetchHandler {
    pub fn new(client: Arc<dyn VaultClient>, secret_path: impl Into<String>) -> Self {
        Self {
            client,
            secret_path: secret_path.into(),
        }
    }

    pub fn from_config(config: FetchConfig) -> Result<Self, FetchError> {
        let secret_path = config.secret_path.clone();
        let client = HttpVaultClient::new(Arc::new(config))?;
        Ok(Self::new(Arc::new(client), secret_path))
    }

    pub fn secret_path(&self) -> &str {
        &self.secret_path
    }

    /// Runs one invocation. Never fails: every error is part of the result.
    pub async fn handle(&self, _event: &Event, context: &InvocationContext) -> HandlerResult {
        let outcome = self.fetch().await;

        match &outcome {
            FetchOutcome::Success { key_length } => info!(
                request_id = %context.request_id,
                key_length,
                "Fetched secret '{}'",
                self.secret_path
            ),
            FetchOutcome::RemoteError { code } => warn!(
                request_id = %context.request_id,
                code,
                "Vault rejected read of '{}'",
                self.secret_path
            ),
            FetchOutcome::OtherError { message } => error!(
                request_id = %context.request_id,
                "Failed to fetch secret '{}': {}",
                self.secret_path,
                message
            ),
        }

        outcome.into()
    }

    pub async fn fetch(&self) -> FetchOutcome {
        match self.fetch_key_length().await {
            Ok(key_length) => FetchOutcome::Success { key_length },
            Err(e) => match e.remote_status() {
                Some(code) => FetchOutcome::RemoteError { code },
                None => FetchOutcome::OtherError {
                    message: e.to_string(),
                },
            },
        }
    }

    async fn fetch_key_length(&self) -> Result<usize, FetchError> {
        let body = self.client.read_secret(&self.secret_path).await?;
        let api_key = kv_field(&body, API_KEY_FIELD)?;
        Ok(api_key.chars().count())
    }
}
