//! The `router setting` configuration task.
//!
//! This module provides:
//! - The dispatcher that shapes a payload and hands it to a device ([`dispatch`])
//! - The full request pipeline ([`RouterSettingTask`])
//! - Result types reported back to the caller ([`TaskOutcome`], [`FailureReport`])
//!
//! # Pipeline
//!
//! 1. Fail fast when no task body was given (no network traffic)
//! 2. Check the requested options against the device revision (warning only)
//! 3. Run the member operation if one was configured, otherwise replace the object
//! 4. Classify the device response into changed / failed

mod error;
mod outcome;
mod router;


pub use error::TaskError;
pub use outcome::{FAILURE_MESSAGE, FailureReport, TaskOutcome, VERSION_MISMATCH_WARNING};
pub use router::{RouterSettingTask, dispatch};
