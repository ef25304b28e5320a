//! Entity Decoder: unwraps the wrapper key of a congress.gov document and
//! converts its contents into typed entities.
//!
//! Every congress.gov payload nests the useful content under one named key
//! (`"bill"`, `"bills"`, `"houseRollCallVote"`, ...) next to bookkeeping
//! blocks such as `pagination` and `request`. Field-level optionality is
//! carried by the entity types themselves; this module only decides what to
//! do when the wrapper key is missing or has the wrong shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Paging block attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub count: Option<u64>,
    pub next: Option<String>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// Whether the server advertised a following page.
    pub fn has_next(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.next.is_some())
    }
}

/// Decode the single entity under `key`. An absent or `null` key is an
/// error: the caller asked for exactly one resource.
pub fn decode_one<T: DeserializeOwned>(mut value: Value, key: &str, path: &str) -> ApiResult<T> {
    ensure_object(&value, path)?;
    let inner = match value.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => {
            return Err(ApiError::malformed(
                path,
                format!("missing `{key}` in response"),
            ))
        }
        Some(inner) => inner,
    };
    serde_json::from_value(inner)
        .map_err(|e| ApiError::malformed(path, format!("`{key}` has unexpected shape: {e}")))
}

/// Decode the array under `key`. An absent or `null` key means "no items".
pub fn decode_many<T: DeserializeOwned>(
    mut value: Value,
    key: &str,
    path: &str,
) -> ApiResult<Vec<T>> {
    ensure_object(&value, path)?;
    let items = value.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    decode_array(items, key, path)
}

/// Like [`decode_many`], also keeping the `pagination` block.
pub fn decode_page<T: DeserializeOwned>(
    mut value: Value,
    key: &str,
    path: &str,
) -> ApiResult<Page<T>> {
    ensure_object(&value, path)?;
    let pagination = match value.get_mut("pagination").map(Value::take) {
        None | Some(Value::Null) => None,
        Some(raw) => Some(serde_json::from_value(raw).map_err(|e| {
            ApiError::malformed(path, format!("`pagination` has unexpected shape: {e}"))
        })?),
    };
    let items = value.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    Ok(Page {
        items: decode_array(items, key, path)?,
        pagination,
    })
}

/// Wrapper keys only exist on an object. Any other document is malformed,
/// never "key absent".
fn ensure_object(value: &Value, path: &str) -> ApiResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ApiError::malformed(
            path,
            format!("document is not an object (found {})", kind(value)),
        ))
    }
}

fn decode_array<T: DeserializeOwned>(items: Value, key: &str, path: &str) -> ApiResult<Vec<T>> {
    match items {
        Value::Null => Ok(Vec::new()),
        Value::Array(elements) => elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| {
                serde_json::from_value(element).map_err(|e| {
                    ApiError::malformed(path, format!("`{key}[{i}]` has unexpected shape: {e}"))
                })
            })
            .collect(),
        other => Err(ApiError::malformed(
            path,
            format!("`{key}` is not an array (found {})", kind(&other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
