//! Wire exchange with the management interface and the client seam.
//!
//! FortiOS speaks JSON in both directions. A request is either a query
//! (`GET`, no body) or a configuration write (`PUT` with a JSON object);
//! responses are buffered whole because they are small and always parsed.

use std::borrow::Cow;

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;
use crate::payload::Payload;

fn json_media_type() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// One call to the FortiOS REST API.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// `GET` for queries, `PUT` for configuration writes
    pub method: Method,
    /// Endpoint including the `vdom` query parameter
    pub url: Url,
    /// Always carries `Accept: application/json`
    pub headers: HeaderMap,
    /// Serialized JSON object for writes
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    fn json_exchange(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, json_media_type());
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    /// Creates a query such as the system status lookup.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::json_exchange(Method::GET, url)
    }

    /// Creates a configuration write carrying `data` as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized.
    pub fn put_json(url: Url, data: &Payload) -> Result<Self, serde_json::Error> {
        let mut request = Self::json_exchange(Method::PUT, url);
        request.body = Some(serde_json::to_vec(data)?);
        request.headers.insert(CONTENT_TYPE, json_media_type());
        Ok(request)
    }

    /// Sets a header, replacing any previous value of the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the body as text for logging (empty for queries).
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.body.as_deref().unwrap_or_default())
    }
}

/// A buffered reply from the management interface.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status and a buffered body.
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Parses the body as a JSON object.
    ///
    /// Returns `None` for empty bodies, HTML error pages and non-object JSON.
    #[must_use]
    pub fn json_object(&self) -> Option<Payload> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Sends requests to the management interface.
///
/// [`FortiOsHandler`](super::FortiOsHandler) is generic over this trait so
/// tests can drive it with a recording mock; production uses
/// [`ReqwestClient`](super::ReqwestClient).
pub trait HttpClient: Send + Sync {
    /// Sends a request and buffers the reply.
    ///
    /// Any HTTP status is a response, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
