//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, result printing and
//! error hints that support the main entry point.

use std::process::ExitCode;

use fortios_router_setting::config::ConfigError;
use fortios_router_setting::task::TaskError;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing connection or task body.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, device rejected the request.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Maps a task error to the process exit code.
pub fn task_exit_code(error: &TaskError) -> ExitCode {
    match error {
        TaskError::TransportUnavailable | TaskError::MissingTaskBody(_) => exit_code::CONFIG_ERROR,
        TaskError::Device(_) | TaskError::DeviceFailure { .. } => exit_code::runtime_error(),
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::MissingRequired { .. } => {
            eprintln!("\nRun 'fortios-router-setting init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints a result object as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to serialize result: {e}"),
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries only the JSON result.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
