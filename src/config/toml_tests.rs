//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.device.host.is_none());
        assert!(config.task.vdom.is_none());
        assert!(!config.task.enable_log);
        assert!(config.router_setting.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            [device]
            host = "https://192.0.2.1"
            access_token = "tok"
            verify_tls = false
            timeout = 15

            [task]
            vdom = "vd1"
            member_path = "hostname"
            member_state = "present"
            enable_log = true

            [router_setting]
            hostname = "fw01"
            bgp_debug_flags = "all"
        "#,
        )
        .unwrap();

        assert_eq!(config.device.host.as_deref(), Some("https://192.0.2.1"));
        assert_eq!(config.device.access_token.as_deref(), Some("tok"));
        assert_eq!(config.device.verify_tls, Some(false));
        assert_eq!(config.device.timeout, Some(15));
        assert_eq!(config.task.vdom.as_deref(), Some("vd1"));
        assert_eq!(config.task.member_path.as_deref(), Some("hostname"));
        assert_eq!(config.task.member_state.as_deref(), Some("present"));
        assert!(config.task.enable_log);

        let body = config.router_setting.unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body["hostname"].as_str(), Some("fw01"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[proxy]\nurl = \"x\"").is_err());
    }

    #[test]
    fn unknown_device_key_is_rejected() {
        assert!(TomlConfig::parse("[device]\nport = 443").is_err());
    }

    #[test]
    fn router_setting_accepts_unknown_options() {
        let config = TomlConfig::parse("[router_setting]\nfuture_option = \"x\"").unwrap();

        assert!(config.router_setting.unwrap().contains_key("future_option"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(TomlConfig::parse("[device\nhost = ").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.device.host.is_none());
        assert!(config.router_setting.unwrap().is_empty());
    }

    #[test]
    fn template_documents_sections() {
        let template = default_config_template();

        assert!(template.contains("[device]"));
        assert!(template.contains("[task]"));
        assert!(template.contains("[router_setting]"));
    }
}
