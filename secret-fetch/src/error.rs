use std::time::Duration;

use thiserror::Error;

/// Why a single secret fetch did not produce a key.
///
/// `Http` is the only kind that means the secrets service answered and
/// rejected the request; every other variant is a local or transport failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Vault HTTP error: {status}")]
    Http { status: u16 },

    #[error("vault request timed out after {}ms", .after.as_millis())]
    Timeout { after: Duration },

    #[error("vault request failed: {0}")]
    Transport(String),

    #[error("failed to parse vault response: {0}")]
    Parse(String),

    #[error("key not found in vault response: {0}")]
    MissingField(String),

    #[error("field '{0}' in vault response is not a string")]
    InvalidField(String),
}

impl FetchError {
    /// Status code returned by Vault when it rejected the request.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
