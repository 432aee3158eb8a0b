use serde_json::Value;

use crate::error::FetchError;

/// Looks up `data.data.<field>` in a KV v2 read response.
///
/// KV v2 wraps the stored key/value map in a second `data` object next to
/// the version `metadata`, so the user-visible fields sit two levels down.
pub fn kv_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, FetchError> {
    let path = format!("data.data.{field}");

    let value = body
        .get("data")
        .and_then(|outer| outer.get("data"))
        .and_then(|inner| inner.get(field))
        .ok_or_else(|| FetchError::MissingField(path.clone()))?;

    value.as_str().ok_or(FetchError::InvalidField(path))
}
