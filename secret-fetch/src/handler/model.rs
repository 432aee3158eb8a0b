use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Secret fetched successfully";

/// Trigger payload handed over by the platform. Opaque to the handler.
pub type Event = Value;

/// Decodes a raw invocation payload into an [`Event`].
///
/// Blank bodies become `null` and bodies that are not JSON become a JSON string.
pub fn parse_event(body: &[u8]) -> Event {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Runtime metadata of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub deadline: Option<DateTime<Utc>>,
    pub invoked_function_arn: Option<String>,
    pub trace_id: Option<String>,
}

impl InvocationContext {
    /// Context for invocations that do not come from the Lambda Runtime API.
    pub fn local() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }
}

/// What one fetch ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { key_length: usize },
    RemoteError { code: u16 },
    OtherError { message: String },
}

/// Field order is the wire order of the encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success { message: String, key_length: usize },
    Failure { error: String },
}

impl ResponseBody {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HandlerResult {
    pub fn into_lambda_response(self) -> LambdaResponse {
        LambdaResponse {
            status_code: self.status_code,
            body: self.body.to_json(),
        }
    }
}

impl From<FetchOutcome> for HandlerResult {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Success { key_length } => HandlerResult {
                status_code: 200,
                body: ResponseBody::Success {
                    message: SUCCESS_MESSAGE.to_string(),
                    key_length,
                },
            },
            FetchOutcome::RemoteError { code } => HandlerResult {
                status_code: 500,
                body: ResponseBody::Failure {
                    error: format!("Vault HTTP error: {code}"),
                },
            },
            FetchOutcome::OtherError { message } => HandlerResult {
                status_code: 500,
                body: ResponseBody::Failure { error: message },
            },
        }
    }
}

/// The envelope returned to the platform. `body` holds JSON encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}
