use anyhow::{Context, anyhow};
use chrono::DateTime;
use reqwest::header::HeaderMap;

use crate::handler::InvocationContext;

pub const REQUEST_ID: &str = "lambda-runtime-aws-request-id";
pub const DEADLINE_MS: &str = "lambda-runtime-deadline-ms";
pub const INVOKED_FUNCTION_ARN: &str = "lambda-runtime-invoked-function-arn";
pub const TRACE_ID: &str = "lambda-runtime-trace-id";
pub const FUNCTION_ERROR_TYPE: &str = "lambda-runtime-function-error-type";

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

pub fn invocation_context(headers: &HeaderMap) -> anyhow::Result<InvocationContext> {
    let request_id = header_str(headers, REQUEST_ID)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| anyhow!("Invocation is missing the {REQUEST_ID} header"))?;

    let deadline = match header_str(headers, DEADLINE_MS) {
        Some(raw) => {
            let millis = raw
                .parse::<i64>()
                .with_context(|| format!("Invalid {DEADLINE_MS} header '{raw}'"))?;
            DateTime::from_timestamp_millis(millis)
        }
        None => None,
    };

    Ok(InvocationContext {
        request_id,
        deadline,
        invoked_function_arn: header_str(headers, INVOKED_FUNCTION_ARN),
        trace_id: header_str(headers, TRACE_ID),
    })
}
