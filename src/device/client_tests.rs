//! Tests for `ReqwestClient`.
//!
//! These cover construction only; request behaviour against a device is
//! exercised through `FortiOsHandler` with a mock client.

use std::time::Duration;

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn new_creates_client() {
        let client = ReqwestClient::new();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn default_creates_same_as_new() {
        let client = ReqwestClient::default();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn with_options_accepts_verified_tls() {
        let client = ReqwestClient::with_options(Duration::from_secs(30), true);
        assert!(client.is_ok());
    }

    #[test]
    fn with_options_accepts_unverified_tls() {
        let client = ReqwestClient::with_options(Duration::from_secs(5), false);
        assert!(client.is_ok());
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::get(url)).await;

        // Behind a proxy the failure surfaces as an error response instead.
        match result {
            Err(HttpError::Connection(_)) => {}
            Ok(resp) if !resp.status.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
