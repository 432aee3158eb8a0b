//! Read-only access to a Vault KV v2 secret.

pub mod client;
pub mod model;

pub use client::HttpVaultClient;
pub use model::kv_field;

use serde_json::Value;

use crate::error::FetchError;

pub const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";
pub const VAULT_NAMESPACE_HEADER: &str = "X-Vault-Namespace";

#[async_trait::async_trait]
pub trait VaultClient: Send + Sync {
    /// Issues one read of `path` (relative to `/v1/`) and returns the decoded body.
    async fn read_secret(&self, path: &str) -> Result<Value, FetchError>;
}
