//! Tests for configuration merging and validation.

use std::io::Write;
use std::time::Duration;

use serde_json::json;
use tempfile::NamedTempFile;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use crate::device::MemberState;

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["fortios-router-setting"];
    full.extend_from_slice(args);
    Cli::parse_from_iter(full)
}

fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod defaults {
    use super::*;

    #[test]
    fn empty_sources_use_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert!(config.host.is_none());
        assert!(config.access_token.is_none());
        assert_eq!(config.vdom, "root");
        assert!(config.member.is_none());
        assert!(!config.enable_log);
        assert!(config.verify_tls);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.router_setting.is_none());
    }
}

mod precedence {
    use super::*;

    const FILE: &str = r#"
        [device]
        host = "https://198.51.100.1"
        access_token = "file-token"
        timeout = 10

        [task]
        vdom = "file-vdom"
    "#;

    #[test]
    fn file_values_apply_without_cli() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml(FILE))).unwrap();

        assert_eq!(config.host.unwrap().as_str(), "https://198.51.100.1/");
        assert_eq!(config.access_token.as_deref(), Some("file-token"));
        assert_eq!(config.vdom, "file-vdom");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn cli_overrides_file() {
        let args = cli(&[
            "--host",
            "https://192.0.2.1",
            "--access-token",
            "cli-token",
            "--vdom",
            "cli-vdom",
            "--timeout",
            "5",
        ]);

        let config = ValidatedConfig::from_raw(&args, Some(&toml(FILE))).unwrap();

        assert_eq!(config.host.unwrap().as_str(), "https://192.0.2.1/");
        assert_eq!(config.access_token.as_deref(), Some("cli-token"));
        assert_eq!(config.vdom, "cli-vdom");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn insecure_flag_disables_verification() {
        let file = toml("[device]\nverify_tls = true");

        let config = ValidatedConfig::from_raw(&cli(&["--insecure"]), Some(&file)).unwrap();

        assert!(!config.verify_tls);
    }

    #[test]
    fn file_can_disable_verification() {
        let file = toml("[device]\nverify_tls = false");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file)).unwrap();

        assert!(!config.verify_tls);
    }

    #[test]
    fn enable_log_from_either_source() {
        let from_file =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[task]\nenable_log = true"))).unwrap();
        let from_cli = ValidatedConfig::from_raw(&cli(&["--enable-log"]), None).unwrap();

        assert!(from_file.enable_log);
        assert!(from_cli.enable_log);
    }
}

mod host {
    use super::*;

    #[test]
    fn invalid_url_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--host", "not a url"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--host", "ftp://192.0.2.1"]), None);

        match result {
            Err(ConfigError::InvalidUrl { reason, .. }) => assert!(reason.contains("ftp")),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn plain_http_is_accepted() {
        let config = ValidatedConfig::from_raw(&cli(&["--host", "http://192.0.2.1:8080"]), None)
            .unwrap();

        assert_eq!(config.host.unwrap().port(), Some(8080));
    }
}

mod timeout {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--timeout", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration { field: "timeout", .. })
        ));
    }

    #[test]
    fn zero_timeout_in_file_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[device]\ntimeout = 0")));

        assert!(result.is_err());
    }
}

mod member {
    use super::*;

    #[test]
    fn path_and_state_from_cli() {
        let args = cli(&["--member-path", "hostname", "--member-state", "present"]);

        let config = ValidatedConfig::from_raw(&args, None).unwrap();

        let member = config.member.unwrap();
        assert_eq!(member.path(), "hostname");
        assert_eq!(member.state(), MemberState::Present);
    }

    #[test]
    fn state_from_file_is_case_insensitive() {
        let file = toml("[task]\nmember_path = \"hostname\"\nmember_state = \"Absent\"");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file)).unwrap();

        assert_eq!(config.member.unwrap().state(), MemberState::Absent);
    }

    #[test]
    fn invalid_state_in_file_is_rejected() {
        let file = toml("[task]\nmember_path = \"hostname\"\nmember_state = \"gone\"");

        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&file));

        assert!(matches!(result, Err(ConfigError::InvalidMemberState { .. })));
    }

    #[test]
    fn path_without_state_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--member-path", "hostname"]), None);

        match result {
            Err(ConfigError::MissingRequired { field: name, .. }) => {
                assert_eq!(name, field::MEMBER_STATE);
            }
            other => panic!("expected MissingRequired, got {other:?}"),
        }
    }

    #[test]
    fn state_without_path_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--member-state", "absent"]), None);

        match result {
            Err(ConfigError::MissingRequired { field: name, .. }) => {
                assert_eq!(name, field::MEMBER_PATH);
            }
            other => panic!("expected MissingRequired, got {other:?}"),
        }
    }
}

mod router_setting {
    use super::*;

    #[test]
    fn file_table_becomes_payload() {
        let file = toml("[router_setting]\nhostname = \"fw01\"\nshow_filter = \"pl\"");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&file)).unwrap();

        let body = config.router_setting.unwrap();
        assert_eq!(body.get("hostname"), Some(&json!("fw01")));
        assert_eq!(body.get("show_filter"), Some(&json!("pl")));
    }

    #[test]
    fn set_options_create_payload() {
        let config = ValidatedConfig::from_raw(&cli(&["--set", "hostname=fw02"]), None).unwrap();

        assert_eq!(
            config.router_setting.unwrap().get("hostname"),
            Some(&json!("fw02"))
        );
    }

    #[test]
    fn set_options_override_file_values() {
        let file = toml("[router_setting]\nhostname = \"fw01\"\nshow_filter = \"pl\"");
        let args = cli(&["--set", "hostname=fw02"]);

        let config = ValidatedConfig::from_raw(&args, Some(&file)).unwrap();

        let body = config.router_setting.unwrap();
        assert_eq!(body.get("hostname"), Some(&json!("fw02")));
        assert_eq!(body.get("show_filter"), Some(&json!("pl")));
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--set", "show_filter=a=b"]), None).unwrap();

        assert_eq!(
            config.router_setting.unwrap().get("show_filter"),
            Some(&json!("a=b"))
        );
    }

    #[test]
    fn empty_value_is_kept() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--set", "bgp_debug_flags="]), None).unwrap();

        assert_eq!(
            config.router_setting.unwrap().get("bgp_debug_flags"),
            Some(&json!(""))
        );
    }

    #[test]
    fn malformed_set_is_rejected() {
        for bad in ["hostname", "=fw01"] {
            let result = ValidatedConfig::from_raw(&cli(&["--set", bad]), None);

            assert!(
                matches!(result, Err(ConfigError::InvalidSetting { .. })),
                "{bad} should be rejected"
            );
        }
    }
}

mod display {
    use super::*;

    #[test]
    fn token_is_not_displayed() {
        let args = cli(&["--host", "https://192.0.2.1", "--access-token", "s3cr3t"]);

        let config = ValidatedConfig::from_raw(&args, None).unwrap();
        let shown = config.to_string();

        assert!(!shown.contains("s3cr3t"));
        assert!(shown.contains("token: set"));
    }
}

mod files {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[task]\nvdom = \"from-file\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ValidatedConfig::load(&cli(&["-c", &path])).unwrap();

        assert_eq!(config.vdom, "from-file");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = ValidatedConfig::load(&cli(&["-c", path.to_str().unwrap()]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.toml");

        write_default_config(&path).unwrap();

        let loaded = TomlConfig::load(&path).unwrap();
        assert!(loaded.device.host.is_none());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("generated.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
