use aws_config::SdkConfig;
use aws_sdk_ssm::Client;
use tracing::debug;

/// Reads a parameter, decrypting `SecureString` values.
pub async fn load(sdk_config: &SdkConfig, param_name: &str) -> Result<String, String> {
    debug!("Loading '{param_name}' from AWS Parameter Store");

    let output = Client::new(sdk_config)
        .get_parameter()
        .name(param_name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| format!("Failed to get parameter '{param_name}': {e}"))?;

    output
        .parameter()
        .and_then(|p| p.value())
        .map(str::to_string)
        .ok_or_else(|| format!("Parameter '{param_name}' has no value"))
}
