//! Device response classification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object returned by the device for a configuration call.
///
/// FortiOS replies with fields such as `status`, `http_status`,
/// `http_method`, `revision`, `revision_changed`, `serial` and `version`.
/// The object is kept verbatim so it can be reported back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceResponse(Map<String, Value>);

impl DeviceResponse {
    /// Wraps a raw response object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the raw response fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the response and returns the raw fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Returns the `status` field, if it is a string.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Returns the `http_status` field as a number.
    ///
    /// Accepts both numeric values and numeric strings such as `"200"`.
    #[must_use]
    pub fn http_status(&self) -> Option<u64> {
        match self.0.get("http_status")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the `http_method` field, if it is a string.
    #[must_use]
    pub fn http_method(&self) -> Option<&str> {
        self.0.get("http_method").and_then(Value::as_str)
    }

    /// Returns the `revision_changed` flag, if present.
    #[must_use]
    pub fn revision_changed(&self) -> Option<bool> {
        self.0.get("revision_changed").and_then(Value::as_bool)
    }

    /// Returns true if the device accepted the call.
    ///
    /// A response counts as successful when any of these hold:
    /// - `status` is `"success"`
    /// - `http_status` is 200
    /// - `http_method` is `DELETE` and `http_status` is 404 (already absent)
    #[must_use]
    pub fn is_successful(&self) -> bool {
        let http_status = self.http_status();

        self.status() == Some("success")
            || http_status == Some(200)
            || (self.http_method() == Some("DELETE") && http_status == Some(404))
    }

    /// Returns true if a successful call changed the device configuration.
    ///
    /// Devices that do not report `revision_changed` are assumed to have changed.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.is_successful() && self.revision_changed().unwrap_or(true)
    }
}

impl From<Map<String, Value>> for DeviceResponse {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Free-function form of [`DeviceResponse::is_successful`].
#[must_use]
pub fn is_successful(response: &DeviceResponse) -> bool {
    response.is_successful()
}
