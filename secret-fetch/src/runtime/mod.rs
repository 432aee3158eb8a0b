//! Custom runtime for AWS Lambda.
//!
//! Polls the Runtime API for the next event, runs the handler and posts the
//! envelope back. Invocations are processed one after another.

pub mod headers;

use anyhow::{Context, bail};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, info};

use crate::handler::{SecretFetchHandler, parse_event};

pub const RUNTIME_API_VERSION: &str = "2018-06-01";
const CONFIG_ERROR_TYPE: &str = "Runtime.ConfigError";

fn runtime_base_url(runtime_api: &str) -> String {
    let api = runtime_api.trim_end_matches('/');
    if api.contains("://") {
        format!("{api}/{RUNTIME_API_VERSION}/runtime")
    } else {
        format!("http://{api}/{RUNTIME_API_VERSION}/runtime")
    }
}

pub struct LambdaRuntime {
    base_url: String,
    client: Client,
    handler: SecretFetchHandler,
}

impl LambdaRuntime {
    pub fn new(runtime_api: &str, handler: SecretFetchHandler) -> Self {
        Self {
            base_url: runtime_base_url(runtime_api),
            client: Client::new(),
            handler,
        }
    }

    /// Serves invocations until the Runtime API becomes unreachable.
    pub async fn run(&self) -> anyhow::Result<()> {
        info!("Lambda runtime loop started against {}", self.base_url);
        loop {
            self.process_next().await?;
        }
    }

    /// Handles exactly one invocation and returns its request id.
    pub async fn process_next(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get(format!("{}/invocation/next", self.base_url))
            .send()
            .await
            .context("Failed to poll next invocation")?;

        if !response.status().is_success() {
            bail!("Runtime API returned {} for next invocation", response.status());
        }

        let context = headers::invocation_context(response.headers())?;
        let body = response
            .bytes()
            .await
            .context("Failed to read invocation event")?;
        let event = parse_event(&body);
        debug!(request_id = %context.request_id, "Received invocation");

        let result = self.handler.handle(&event, &context).await;

        let posted = self
            .client
            .post(format!(
                "{}/invocation/{}/response",
                self.base_url, context.request_id
            ))
            .json(&result.into_lambda_response())
            .send()
            .await
            .context("Failed to post invocation response")?;

        if !posted.status().is_success() {
            error!(
                request_id = %context.request_id,
                "Runtime API rejected response with {}",
                posted.status()
            );
            bail!("Runtime API returned {} for invocation response", posted.status());
        }

        Ok(context.request_id)
    }
}

/// Tells the Runtime API that the function cannot start.
pub async fn report_init_error(runtime_api: &str, message: &str) -> anyhow::Result<()> {
    let response = Client::new()
        .post(format!("{}/init/error", runtime_base_url(runtime_api)))
        .header(headers::FUNCTION_ERROR_TYPE, CONFIG_ERROR_TYPE)
        .json(&json!({ "errorMessage": message, "errorType": CONFIG_ERROR_TYPE }))
        .send()
        .await
        .context("Failed to report init error")?;

    if !response.status().is_success() {
        bail!("Runtime API returned {} for init error", response.status());
    }
    Ok(())
}
