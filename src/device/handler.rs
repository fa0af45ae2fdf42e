//! Device handler trait and the FortiOS REST implementation.

use std::fmt;

use http::header::AUTHORIZATION;
use http::{HeaderValue, Method};
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use url::Url;

use super::{
    DeviceError, DeviceResponse, HttpClient, HttpRequest, HttpResponse, MemberOperation,
    MemberState,
};
use crate::payload::{Payload, rewrite_map};
use crate::schema::ObjectSchema;

/// Operations the configuration pipeline needs from a managed device.
///
/// The pipeline only talks to this trait, so tests can substitute a
/// recording mock and other transports can be added without touching it.
pub trait DeviceHandler: Send + Sync {
    /// Writes `data` to `table`/`object` inside `vdom`.
    ///
    /// `data` is already in wire form (hyphenated keys).
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the request cannot be built or sent.
    /// A device that answers with a failure status is *not* an error here;
    /// classify the returned [`DeviceResponse`] instead.
    fn set(
        &self,
        table: &str,
        object: &str,
        data: Payload,
        vdom: &str,
    ) -> impl std::future::Future<Output = Result<DeviceResponse, DeviceError>> + Send;

    /// Performs the configured member operation, if any.
    ///
    /// Returns `Ok(None)` when no member operation was requested; the caller
    /// then replaces the whole object instead.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] for an invalid member path, a missing member
    /// value or a failed request.
    fn do_member_operation(
        &self,
        table: &str,
        object: &str,
        data: &Payload,
        vdom: &str,
    ) -> impl std::future::Future<Output = Result<Option<DeviceResponse>, DeviceError>> + Send;

    /// Returns the firmware revision reported by the device, e.g. `v7.2.4`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the status request fails or carries no version.
    fn system_version(
        &self,
    ) -> impl std::future::Future<Output = Result<String, DeviceError>> + Send;
}

/// [`DeviceHandler`] speaking the FortiOS REST API over an [`HttpClient`].
///
/// - Configuration writes go to `PUT /api/v2/cmdb/{table}/{object}?vdom=...`
/// - The firmware revision comes from `GET /api/v2/monitor/system/status`
///   and is fetched at most once per handler
///
/// # Example
///
/// ```
/// use fortios_router_setting::device::{FortiOsHandler, ReqwestClient};
/// use fortios_router_setting::schema::ROUTER_SETTING;
/// use url::Url;
///
/// let handler = FortiOsHandler::new(
///     ReqwestClient::new(),
///     Url::parse("https://192.0.2.1").unwrap(),
///     &ROUTER_SETTING,
/// )
/// .with_access_token("secret")
/// .unwrap();
/// ```
pub struct FortiOsHandler<H> {
    client: H,
    base_url: Url,
    authorization: Option<HeaderValue>,
    member: Option<MemberOperation>,
    schema: &'static ObjectSchema,
    enable_log: bool,
    system_version: OnceCell<String>,
}

impl<H> FortiOsHandler<H> {
    /// Creates a handler for the appliance at `base_url`.
    #[must_use]
    pub fn new(client: H, base_url: Url, schema: &'static ObjectSchema) -> Self {
        Self {
            client,
            base_url,
            authorization: None,
            member: None,
            schema,
            enable_log: false,
            system_version: OnceCell::new(),
        }
    }

    /// Authenticates every request with an API token (`Bearer` scheme).
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidAccessToken`] if the token cannot be
    /// carried in an HTTP header.
    pub fn with_access_token(mut self, token: &str) -> Result<Self, DeviceError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| DeviceError::InvalidAccessToken)?;
        value.set_sensitive(true);
        self.authorization = Some(value);
        Ok(self)
    }

    /// Switches the handler to member-operation mode.
    #[must_use]
    pub fn with_member_operation(mut self, member: Option<MemberOperation>) -> Self {
        self.member = member;
        self
    }

    /// Logs request and response bodies at `info` instead of `debug`.
    #[must_use]
    pub const fn with_enable_log(mut self, enable_log: bool) -> Self {
        self.enable_log = enable_log;
        self
    }

    #[cfg(test)]
    pub(super) const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the management base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str], vdom: Option<&str>) -> Result<Url, DeviceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DeviceError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if let Some(vdom) = vdom {
            url.query_pairs_mut().append_pair("vdom", vdom);
        }

        Ok(url)
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match &self.authorization {
            Some(value) => request.with_header(AUTHORIZATION, value.clone()),
            None => request,
        }
    }

    fn log_body(&self, direction: &str, method: &Method, url: &Url, text: &str) {
        if self.enable_log {
            tracing::info!("{direction} {method} {url}: {text}");
        } else {
            tracing::debug!("{direction} {method} {url}: {text}");
        }
    }

    fn member_body(&self, member: &MemberOperation, data: &Payload) -> Result<Payload, DeviceError> {
        let invalid = |reason: String| DeviceError::InvalidMemberPath {
            path: member.path().to_string(),
            reason,
        };

        let segments: Vec<&str> = member.segments().collect();
        let attribute = match segments.as_slice() {
            [] => return Err(invalid("path is empty".to_string())),
            [attribute] => *attribute,
            [attribute, ..] => {
                return Err(invalid(format!("'{attribute}' has no member attributes")));
            }
        };

        if !self.schema.contains(attribute) {
            return Err(invalid(format!(
                "'{attribute}' is not an option of {} {}",
                self.schema.table, self.schema.object
            )));
        }

        let value = match member.state() {
            MemberState::Present => data
                .get(attribute)
                .filter(|v| !v.is_null())
                .cloned()
                .ok_or_else(|| DeviceError::MissingMemberValue {
                    attribute: attribute.to_string(),
                })?,
            MemberState::Absent => Value::String(String::new()),
        };

        let mut body = Payload::new();
        body.insert(attribute.to_string(), value);
        Ok(rewrite_map(body))
    }
}

impl<H: HttpClient> FortiOsHandler<H> {
    async fn fetch_system_version(&self) -> Result<String, DeviceError> {
        let url = self.endpoint(&["api", "v2", "monitor", "system", "status"], None)?;
        let response = self.client.request(self.authorize(HttpRequest::get(url))).await?;

        response
            .json_object()
            .and_then(|body| body.get("version").and_then(Value::as_str).map(str::to_string))
            .ok_or(DeviceError::MissingVersion {
                status: response.status,
            })
    }
}

impl<H: HttpClient> DeviceHandler for FortiOsHandler<H> {
    async fn set(
        &self,
        table: &str,
        object: &str,
        data: Payload,
        vdom: &str,
    ) -> Result<DeviceResponse, DeviceError> {
        let url = self.endpoint(&["api", "v2", "cmdb", table, object], Some(vdom))?;
        let request = self.authorize(HttpRequest::put_json(url, &data)?);
        self.log_body("Request", &request.method, &request.url, &request.body_text());

        let (method, url) = (request.method.clone(), request.url.clone());
        let response = self.client.request(request).await?;
        self.log_body("Response", &method, &url, &response.text());

        Ok(device_response(&method, &response))
    }

    async fn do_member_operation(
        &self,
        table: &str,
        object: &str,
        data: &Payload,
        vdom: &str,
    ) -> Result<Option<DeviceResponse>, DeviceError> {
        let Some(member) = &self.member else {
            return Ok(None);
        };

        let body = self.member_body(member, data)?;
        tracing::info!(
            "Member operation on {table} {object}: {} {}",
            member.path(),
            member.state()
        );

        self.set(table, object, body, vdom).await.map(Some)
    }

    async fn system_version(&self) -> Result<String, DeviceError> {
        self.system_version
            .get_or_try_init(|| self.fetch_system_version())
            .await
            .cloned()
    }
}

impl<H: fmt::Debug> fmt::Debug for FortiOsHandler<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FortiOsHandler")
            .field("client", &self.client)
            .field("base_url", &self.base_url.as_str())
            .field("authorized", &self.authorization.is_some())
            .field("member", &self.member)
            .field("enable_log", &self.enable_log)
            .finish_non_exhaustive()
    }
}

/// Builds the response object for an HTTP exchange.
///
/// A JSON object body is kept as-is. Anything else (HTML error pages,
/// empty bodies) is wrapped so callers always get `status`, `http_status`
/// and `http_method`.
fn device_response(method: &Method, response: &HttpResponse) -> DeviceResponse {
    let mut fields = response.json_object().unwrap_or_else(|| {
        let mut fields = Payload::new();
        fields.insert("status".to_string(), json!("error"));
        fields.insert("body".to_string(), json!(response.text()));
        fields
    });

    fields
        .entry("http_status")
        .or_insert_with(|| json!(response.status.as_u16()));
    fields
        .entry("http_method")
        .or_insert_with(|| json!(method.as_str()));

    DeviceResponse::new(fields)
}
