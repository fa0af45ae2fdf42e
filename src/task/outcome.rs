//! Task result types.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::device::DeviceResponse;
use crate::schema::VersionCheck;

/// Message attached to device-reported failures.
pub const FAILURE_MESSAGE: &str = "Error in repo";

/// Warning logged when the revision check did not match.
pub const VERSION_MISMATCH_WARNING: &str = "Detected version mismatch between FortiOS system and \
     requested options, see version_check_warning for details";

/// Result of a task the device accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskOutcome {
    /// Whether the device configuration changed
    pub changed: bool,
    /// Raw device response
    pub meta: DeviceResponse,
    /// Configuration difference (not computed; always empty)
    pub diff: Map<String, Value>,
    /// Revision check result when it did not match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_check_warning: Option<VersionCheck>,
}

/// Machine-readable form of a device-reported failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    /// Always true
    pub failed: bool,
    /// Fixed failure message
    pub msg: &'static str,
    /// Raw device response
    pub meta: DeviceResponse,
    /// Revision check result when it did not match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_check_warning: Option<VersionCheck>,
}

impl FailureReport {
    /// Creates a failure report for a device response.
    #[must_use]
    pub const fn new(meta: DeviceResponse, version_check_warning: Option<VersionCheck>) -> Self {
        Self {
            failed: true,
            msg: FAILURE_MESSAGE,
            meta,
            version_check_warning,
        }
    }
}
