//! Application execution logic.
//!
//! This module wires the validated configuration into a device handler
//! and runs the `router setting` task once.

use fortios_router_setting::config::ValidatedConfig;
use fortios_router_setting::device::{DeviceError, FortiOsHandler, ReqwestClient};
use fortios_router_setting::schema::ROUTER_SETTING;
use fortios_router_setting::task::{RouterSettingTask, TaskError, TaskOutcome};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Executes the configuration task.
///
/// This function:
/// 1. Requires a management connection
/// 2. Creates the HTTP client and the FortiOS handler
/// 3. Runs the `router setting` task and returns its outcome
///
/// # Errors
///
/// Returns an error if:
/// - No host is configured
/// - The HTTP client or the authorization header cannot be built
/// - The task fails (missing body, unreachable device, rejected request)
pub async fn execute(config: ValidatedConfig) -> Result<TaskOutcome, TaskError> {
    let handler = create_handler(&config)?;
    tracing::debug!("Using {handler:?}");

    RouterSettingTask::new(config.vdom, config.router_setting)
        .run(&handler)
        .await
}

/// Creates the FortiOS handler from configuration.
fn create_handler(config: &ValidatedConfig) -> Result<FortiOsHandler<ReqwestClient>, TaskError> {
    let Some(host) = config.host.clone() else {
        return Err(TaskError::TransportUnavailable);
    };

    let client = ReqwestClient::with_options(config.timeout, config.verify_tls)
        .map_err(DeviceError::from)?;

    let mut handler = FortiOsHandler::new(client, host, &ROUTER_SETTING)
        .with_member_operation(config.member.clone())
        .with_enable_log(config.enable_log);

    if let Some(ref token) = config.access_token {
        handler = handler.with_access_token(token)?;
    }

    Ok(handler)
}
