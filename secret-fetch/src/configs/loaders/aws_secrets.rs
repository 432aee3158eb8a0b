use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client;
use tracing::debug;

/// Reads the string value of a Secrets Manager secret, by name or ARN.
pub async fn load(sdk_config: &SdkConfig, secret_id: &str) -> Result<String, String> {
    debug!("Loading '{secret_id}' from AWS Secrets Manager");

    let output = Client::new(sdk_config)
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| format!("Failed to get secret '{secret_id}': {e}"))?;

    match output.secret_string() {
        Some(value) => Ok(value.to_string()),
        None if output.secret_binary().is_some() => Err(format!(
            "Secret '{secret_id}' is stored as binary, only string secrets are supported"
        )),
        None => Err(format!("Secret '{secret_id}' has no string value")),
    }
}
