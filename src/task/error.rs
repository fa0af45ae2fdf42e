//! Error types for task execution.

use thiserror::Error;

use crate::device::{DeviceError, DeviceResponse};
use crate::schema::VersionCheck;

use super::FailureReport;

/// Error type for a failed configuration task.
#[derive(Debug, Error)]
pub enum TaskError {
    /// No management connection is configured.
    #[error("No management connection available: set --host or device.host in the config file")]
    TransportUnavailable,

    /// The task body (`router_setting`) was not supplied.
    #[error("missing task body: {0}")]
    MissingTaskBody(&'static str),

    /// The device could not be reached or the request could not be built.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// The device answered with a failure status.
    #[error("Device rejected the configuration (status: {})", .meta.status().unwrap_or("unknown"))]
    DeviceFailure {
        /// Raw device response
        meta: DeviceResponse,
        /// Revision check result when it did not match
        version_check_warning: Option<VersionCheck>,
    },
}

impl TaskError {
    /// Returns the machine-readable report for device-reported failures.
    #[must_use]
    pub fn report(&self) -> Option<FailureReport> {
        match self {
            Self::DeviceFailure {
                meta,
                version_check_warning,
            } => Some(FailureReport::new(meta.clone(), version_check_warning.clone())),
            _ => None,
        }
    }
}
