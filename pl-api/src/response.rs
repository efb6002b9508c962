//! Server response types.
//!
//! REST responses from the listings server are wrapped in a common
//! envelope with status, message, and optional data/error fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use pl_core::constants::STATUS_OK;
use pl_core::error::{PlError, PlResult};

/// Standard server response envelope.
///
/// ```json
/// { "status": 200, "message": "Success", "data": { ... } }
/// ```
///
/// Not every endpoint fills in `status`; list and update responses often
/// carry only `data`. `status`, `message` and `error` are informational:
/// a null or oddly typed value reads as absent instead of failing the
/// whole envelope. Only `data` must have the endpoint's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse<T = Value> {
    /// HTTP-like status code echoed by the server.
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<u16>,
    /// Human-readable message.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload data (type varies by endpoint).
    pub data: Option<T>,
    /// Error details (present only on error responses).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub error: Option<ServerError>,
}

/// Server error detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    /// Error type identifier.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Read an optional field, treating null or a mistyped value as absent.
fn lenient<'de, D, F>(deserializer: D) -> Result<Option<F>, D::Error>
where
    D: Deserializer<'de>,
    F: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

impl<T: DeserializeOwned> ServerResponse<T> {
    /// Deserialize an envelope from a parsed JSON body.
    pub fn from_value(value: Value) -> PlResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| PlError::Serialization(format!("failed to parse response: {e}")))
    }
}

impl<T> ServerResponse<T> {
    /// Whether the envelope reports success (status 200).
    pub fn is_success(&self) -> bool {
        self.status == Some(STATUS_OK)
    }

    /// Borrow the payload, failing if the server omitted it.
    pub fn data_ref(&self) -> PlResult<&T> {
        self.data
            .as_ref()
            .ok_or_else(|| PlError::Serialization("response has no data".into()))
    }

    /// Take the payload, failing if the server omitted it.
    pub fn into_data(self) -> PlResult<T> {
        self.data
            .ok_or_else(|| PlError::Serialization("response has no data".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_response_success() {
        let resp: ServerResponse =
            ServerResponse::from_value(json!({"status": 200, "message": "Success", "data": {"total": 2}}))
                .unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message.as_deref(), Some("Success"));
        assert_eq!(resp.into_data().unwrap()["total"], 2);
    }

    #[test]
    fn test_data_only_envelope() {
        let resp: ServerResponse<Vec<u32>> =
            ServerResponse::from_value(json!({"data": [1, 2, 3]})).unwrap();
        assert_eq!(resp.status, None);
        assert!(!resp.is_success());
        assert_eq!(resp.data_ref().unwrap(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_server_response_error_detail() {
        let resp: ServerResponse = ServerResponse::from_value(
            json!({"status": 401, "message": "Unauthorized", "error": {"type": "auth", "message": "Bad token"}}),
        )
        .unwrap();
        let error = resp.error.unwrap();
        assert_eq!(error.error_type.as_deref(), Some("auth"));
        assert_eq!(error.message.as_deref(), Some("Bad token"));
    }

    #[test]
    fn test_null_message_is_absent() {
        let resp: ServerResponse<Vec<u32>> =
            ServerResponse::from_value(json!({"status": 200, "message": null, "data": [7]})).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, None);
        assert_eq!(resp.into_data().unwrap(), vec![7]);
    }

    #[test]
    fn test_mistyped_informational_fields_are_absent() {
        let resp: ServerResponse = ServerResponse::from_value(
            json!({"status": "200", "message": 5, "error": "nope", "data": null}),
        )
        .unwrap();
        assert_eq!(resp.status, None);
        assert!(!resp.is_success());
        assert_eq!(resp.message, None);
        assert_eq!(resp.error, None);
    }

    #[test]
    fn test_missing_data_is_error() {
        let resp: ServerResponse = ServerResponse::from_value(json!({"status": 200})).unwrap();
        assert!(matches!(resp.into_data(), Err(PlError::Serialization(_))));
    }

    #[test]
    fn test_wrong_data_shape_is_serialization_error() {
        let parsed = ServerResponse::<Vec<u32>>::from_value(json!({"data": "nope"}));
        assert!(matches!(parsed, Err(PlError::Serialization(_))));
    }
}
