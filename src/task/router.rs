//! Filter, dispatch and classify for the `router setting` object.

use serde_json::Map;

use crate::device::{DeviceError, DeviceHandler, DeviceResponse};
use crate::payload::{Payload, filter_payload, rewrite_map};
use crate::schema::{ROUTER_SETTING, VersionCheck, version_gate};

use super::{TaskError, TaskOutcome, VERSION_MISMATCH_WARNING};

/// Name of the task body, used in error messages.
const TASK_BODY: &str = "router_setting";

/// Writes `payload` to `router setting` in `vdom`.
///
/// The payload is restricted to known, non-null options and its keys are
/// converted to wire names before the call. The device response is returned
/// as-is.
///
/// # Errors
///
/// Returns [`DeviceError`] if the device cannot be reached.
pub async fn dispatch<D: DeviceHandler>(
    vdom: &str,
    payload: &Payload,
    device: &D,
) -> Result<DeviceResponse, DeviceError> {
    let data = rewrite_map(filter_payload(payload, &ROUTER_SETTING));
    tracing::debug!("Dispatching {} option(s) to router setting", data.len());

    device
        .set(ROUTER_SETTING.table, ROUTER_SETTING.object, data, vdom)
        .await
}

/// One configuration request against `router setting`.
///
/// # Example
///
/// ```no_run
/// use fortios_router_setting::device::{FortiOsHandler, ReqwestClient};
/// use fortios_router_setting::schema::ROUTER_SETTING;
/// use fortios_router_setting::task::RouterSettingTask;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let handler = FortiOsHandler::new(
///     ReqwestClient::new(),
///     url::Url::parse("https://192.0.2.1")?,
///     &ROUTER_SETTING,
/// );
/// let body = json!({"hostname": "fw01"}).as_object().cloned();
///
/// let outcome = RouterSettingTask::new("root", body).run(&handler).await?;
/// println!("changed: {}", outcome.changed);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouterSettingTask {
    vdom: String,
    router_setting: Option<Payload>,
}

impl RouterSettingTask {
    /// Creates a task for `vdom` with the given option mapping.
    #[must_use]
    pub fn new(vdom: impl Into<String>, router_setting: Option<Payload>) -> Self {
        Self {
            vdom: vdom.into(),
            router_setting,
        }
    }

    /// Returns the target virtual domain.
    #[must_use]
    pub fn vdom(&self) -> &str {
        &self.vdom
    }

    /// Runs the task against `device`.
    ///
    /// A revision mismatch never stops the write; it is logged and attached
    /// to the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No task body was supplied ([`TaskError::MissingTaskBody`]), before any request
    /// - The device cannot be reached ([`TaskError::Device`])
    /// - The device reports a failure ([`TaskError::DeviceFailure`])
    pub async fn run<D: DeviceHandler>(&self, device: &D) -> Result<TaskOutcome, TaskError> {
        let payload = self
            .router_setting
            .as_ref()
            .filter(|body| !body.is_empty())
            .ok_or(TaskError::MissingTaskBody(TASK_BODY))?;

        let version_check = check_versions(device, payload).await;

        let response = match device
            .do_member_operation(
                ROUTER_SETTING.table,
                ROUTER_SETTING.object,
                payload,
                &self.vdom,
            )
            .await?
        {
            Some(response) => response,
            None => dispatch(&self.vdom, payload, device).await?,
        };

        if !response.is_successful() {
            tracing::error!(
                "router setting update failed in vdom {}: {}",
                self.vdom,
                serde_json::to_string(&response).unwrap_or_default()
            );
            return Err(TaskError::DeviceFailure {
                meta: response,
                version_check_warning: version_check,
            });
        }

        let changed = response.has_changed();
        tracing::info!("router setting applied in vdom {} (changed: {changed})", self.vdom);

        Ok(TaskOutcome {
            changed,
            meta: response,
            diff: Map::new(),
            version_check_warning: version_check,
        })
    }
}

/// Runs the revision check, returning the result only when it did not match.
async fn check_versions<D: DeviceHandler>(device: &D, payload: &Payload) -> Option<VersionCheck> {
    let system_version = match device.system_version().await {
        Ok(version) => version,
        Err(e) => {
            tracing::warn!("Skipping revision check, system version unavailable: {e}");
            return None;
        }
    };

    let check = version_gate(&ROUTER_SETTING, &system_version, payload);
    if check.matched {
        tracing::debug!("All requested options are supported on {system_version}");
        return None;
    }

    tracing::warn!("{VERSION_MISMATCH_WARNING}");
    Some(check)
}
