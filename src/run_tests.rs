//! Tests for the run module.

use super::*;
use fortios_router_setting::config::Cli;
use fortios_router_setting::device::DeviceError;

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full = vec!["fortios-router-setting"];
    full.extend_from_slice(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full), None).unwrap()
}

mod handler_creation {
    use super::*;

    #[test]
    fn no_host_is_transport_unavailable() {
        let result = create_handler(&config(&["--set", "hostname=fw01"]));

        assert!(matches!(result, Err(TaskError::TransportUnavailable)));
    }

    #[test]
    fn handler_targets_configured_host() {
        let handler = create_handler(&config(&["--host", "https://192.0.2.1"])).unwrap();

        assert_eq!(handler.base_url().as_str(), "https://192.0.2.1/");
    }

    #[test]
    fn token_is_hidden_in_debug_output() {
        let handler = create_handler(&config(&[
            "--host",
            "https://192.0.2.1",
            "--access-token",
            "s3cr3t",
        ]))
        .unwrap();

        let debug = format!("{handler:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("authorized: true"));
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let result = create_handler(&config(&[
            "--host",
            "https://192.0.2.1",
            "--access-token",
            "bad\ntoken",
        ]));

        assert!(matches!(
            result,
            Err(TaskError::Device(DeviceError::InvalidAccessToken))
        ));
    }
}

mod execution {
    use super::*;

    #[tokio::test]
    async fn no_host_fails_before_anything_else() {
        let result = execute(config(&[])).await;

        assert!(matches!(result, Err(TaskError::TransportUnavailable)));
    }

    #[tokio::test]
    async fn missing_body_fails_without_contacting_device() {
        // TEST-NET-1 is unroutable; reaching the network would time out instead
        let result = execute(config(&["--host", "https://192.0.2.1", "--timeout", "1"])).await;

        assert!(matches!(result, Err(TaskError::MissingTaskBody(_))));
    }
}
