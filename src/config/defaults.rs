//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default virtual domain.
pub const VDOM: &str = "root";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// TLS certificates are verified unless explicitly disabled.
pub const VERIFY_TLS: bool = true;

/// Default output path of the `init` subcommand.
pub const CONFIG_FILE: &str = "fortios-router-setting.toml";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
