use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Body returned when the response body itself cannot be serialized.
pub const SERIALIZATION_ERROR_BODY: &str = r#"{"error": "serialization error"}"#;

/// Transport-level response: status, headers and a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    fn with_json_body(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: HashMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]),
            body,
        }
    }

    /// Parses the body back into a JSON value.
    pub fn json_body(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

/// Serializes `body` into a JSON envelope with the given status.
///
/// Falls back to a fixed 500 envelope when serialization fails.
pub fn json<T: Serialize + ?Sized>(status_code: u16, body: &T) -> ApiResponse {
    match serde_json::to_string(body) {
        Ok(body) => ApiResponse::with_json_body(status_code, body),
        Err(_) => ApiResponse::with_json_body(500, SERIALIZATION_ERROR_BODY.to_string()),
    }
}

/// Wraps `message` as `{"error": message}`.
pub fn error(status_code: u16, message: impl AsRef<str>) -> ApiResponse {
    json(status_code, &json!({ "error": message.as_ref() }))
}

/// Wraps `message` as `{"message": message}` with status 200.
pub fn success_message(message: impl AsRef<str>) -> ApiResponse {
    json(200, &json!({ "message": message.as_ref() }))
}
