use std::env;

use crate::configs::ConfigError;

pub fn required_env(env_name: &str) -> Result<String, ConfigError> {
    env::var(env_name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVariable(env_name.to_string()))
}

pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok()
}

pub fn env_or(env_name: &str, default: &str) -> String {
    optional_env(env_name).unwrap_or_else(|| default.to_string())
}
