//! Organization records returned by `/organization/list`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loyalty platform tenant.
///
/// Only `organizationId` and `name` are read; all other fields are kept
/// in server order so the record can be printed back in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Organization(Map<String, Value>);

impl Organization {
    /// Stable organization identifier, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get("organizationId").and_then(Value::as_str)
    }

    /// Display name, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Text of a field for display: strings as-is, anything else as JSON.
    ///
    /// Returns `None` only when the key is absent.
    pub fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.0.get(key).map(|value| match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    /// Returns all fields as received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Pretty-prints the full record with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}
