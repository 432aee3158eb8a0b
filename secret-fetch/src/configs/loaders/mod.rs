//! Resolves configuration values that may point at another source.
//!
//! A raw value is used as is. Prefixed values are read from elsewhere:
//! `string://`, `file://`, `aws_secrets://` and `aws_parameter_store://`.
//! The AWS schemes accept a `#field` suffix to pick one key out of a JSON
//! document, e.g. `aws_secrets://prod/vault#token`.

pub mod aws_parameter_store;
pub mod aws_secrets;
pub mod environment;
pub mod file;

use aws_config::{BehaviorVersion, SdkConfig};
use serde_json::Value;
use tokio::sync::OnceCell;

use super::ConfigError;

static AWS_SDK_CONFIG: OnceCell<SdkConfig> = OnceCell::const_new();

/// Both Vault settings may live in AWS; the credential chain is resolved once.
async fn aws_sdk_config() -> &'static SdkConfig {
    AWS_SDK_CONFIG
        .get_or_init(|| aws_config::load_defaults(BehaviorVersion::latest()))
        .await
}

pub async fn load(input: &str) -> Result<String, String> {
    if let Some(content) = input.strip_prefix("string://") {
        Ok(content.to_string())
    } else if let Some(path) = input.strip_prefix("file://") {
        file::load(path)
    } else if let Some(reference) = input.strip_prefix("aws_secrets://") {
        let (secret_name, field) = split_field(reference);
        let value = aws_secrets::load(aws_sdk_config().await, secret_name).await?;
        select_field(value, field)
    } else if let Some(reference) = input.strip_prefix("aws_parameter_store://") {
        let (param_name, field) = split_field(reference);
        let value = aws_parameter_store::load(aws_sdk_config().await, param_name).await?;
        select_field(value, field)
    } else {
        Ok(input.to_string())
    }
}

/// Reads `env_name` and resolves it through [`load`].
pub async fn resolve_env(env_name: &str) -> Result<String, ConfigError> {
    let raw = environment::required_env(env_name)?;
    load(&raw)
        .await
        .map(|v| v.trim().to_string())
        .map_err(|reason| ConfigError::Loader {
            name: env_name.to_string(),
            reason,
        })
}

fn split_field(reference: &str) -> (&str, Option<&str>) {
    match reference.rsplit_once('#') {
        Some((name, field)) if !field.is_empty() => (name, Some(field)),
        _ => (reference, None),
    }
}

fn select_field(value: String, field: Option<&str>) -> Result<String, String> {
    let Some(field) = field else {
        return Ok(value);
    };

    let document: Value = serde_json::from_str(&value)
        .map_err(|e| format!("Value is not a JSON document, cannot select '{field}': {e}"))?;

    match document.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(format!("Field '{field}' not found in JSON document")),
    }
}
