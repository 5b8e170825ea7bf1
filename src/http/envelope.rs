//! The response envelope — the normalized result of one transport attempt.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status code, message, and opaque payload for one request attempt.
///
/// Exactly one envelope is produced per attempt: either parsed from the
/// backend's reply or synthesized by the pipeline from a transport failure.
/// The `code` field is required on the wire; `message` and `data` default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl HttpResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(code: u16, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }
}
