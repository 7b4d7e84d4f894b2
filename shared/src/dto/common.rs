use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgement returned by mutating endpoints.
///
/// The payload shape varies between endpoints (and may be an empty body, decoded as
/// `null`), so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ack(pub Value);

impl Ack {
    /// Server-supplied `message` field, if any.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }
}
