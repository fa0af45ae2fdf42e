//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::device::{MemberOperation, MemberState};
use crate::payload::Payload;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Management URL; `None` when no connection was configured
    pub host: Option<Url>,

    /// API token
    pub access_token: Option<String>,

    /// Virtual domain
    pub vdom: String,

    /// Member operation, mutually exclusive with whole-object replace
    pub member: Option<MemberOperation>,

    /// Log request and response bodies
    pub enable_log: bool,

    /// Verify the appliance TLS certificate
    pub verify_tls: bool,

    /// Request timeout
    pub timeout: Duration,

    /// Task body; `None` when neither source supplied options
    pub router_setting: Option<Payload>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self
            .host
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let member = self.member.as_ref().map_or_else(
            || "none".to_string(),
            |m| format!("{} {}", m.path(), m.state()),
        );

        write!(
            f,
            "Config {{ host: {}, vdom: {}, token: {}, member: {}, verify_tls: {}, timeout: {}s, \
             options: {}, enable_log: {} }}",
            host,
            self.vdom,
            if self.access_token.is_some() { "set" } else { "none" },
            member,
            self.verify_tls,
            self.timeout.as_secs(),
            self.router_setting.as_ref().map_or(0, serde_json::Map::len),
            self.enable_log,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The host URL is invalid or not http(s)
    /// - The timeout is zero
    /// - Only one of member path / member state is given, or the state is invalid
    /// - A `--set` option is not in `name=value` form
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let host = Self::resolve_host(cli, toml)?;

        let access_token = cli
            .access_token
            .clone()
            .or_else(|| toml.and_then(|t| t.device.access_token.clone()));

        let vdom = cli
            .vdom
            .clone()
            .or_else(|| toml.and_then(|t| t.task.vdom.clone()))
            .unwrap_or_else(|| defaults::VDOM.to_string());

        let member = Self::resolve_member(cli, toml)?;

        // Flags only enable
        let enable_log = cli.enable_log || toml.is_some_and(|t| t.task.enable_log);

        // --insecure wins over the file
        let verify_tls = !cli.insecure
            && toml
                .and_then(|t| t.device.verify_tls)
                .unwrap_or(defaults::VERIFY_TLS);

        let timeout = Self::resolve_timeout(cli, toml)?;

        let router_setting = Self::resolve_router_setting(cli, toml)?;

        Ok(Self {
            host,
            access_token,
            vdom,
            member,
            enable_log,
            verify_tls,
            timeout,
            router_setting,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_host(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        let Some(host) = cli
            .host
            .as_deref()
            .or_else(|| toml.and_then(|t| t.device.host.as_deref()))
        else {
            return Ok(None);
        };

        let url = Url::parse(host).map_err(|e| ConfigError::InvalidUrl {
            url: host.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: host.to_string(),
                reason: format!("unsupported scheme '{}', expected http or https", url.scheme()),
            });
        }

        Ok(Some(url))
    }

    fn resolve_member(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<MemberOperation>, ConfigError> {
        let path = cli
            .member_path
            .clone()
            .or_else(|| toml.and_then(|t| t.task.member_path.clone()));

        let state = match cli.member_state {
            Some(arg) => Some(MemberState::from(arg)),
            None => toml
                .and_then(|t| t.task.member_state.as_deref())
                .map(parse_member_state)
                .transpose()?,
        };

        match (path, state) {
            (None, None) => Ok(None),
            (Some(path), Some(state)) => Ok(Some(MemberOperation::new(path, state))),
            (Some(_), None) => Err(ConfigError::missing(
                field::MEMBER_STATE,
                "Use --member-state or set task.member_state together with the member path",
            )),
            (None, Some(_)) => Err(ConfigError::missing(
                field::MEMBER_PATH,
                "Use --member-path or set task.member_path together with the member state",
            )),
        }
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.device.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_router_setting(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Payload>, ConfigError> {
        let mut payload = match toml.and_then(|t| t.router_setting.as_ref()) {
            Some(table) => Some(table_to_payload(table)?),
            None => None,
        };

        // CLI options override file options one by one
        for setting in &cli.settings {
            let (name, value) = parse_setting(setting)?;
            payload
                .get_or_insert_with(Payload::new)
                .insert(name, Value::String(value));
        }

        Ok(payload)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_member_state(s: &str) -> Result<MemberState, ConfigError> {
    match s.to_lowercase().as_str() {
        "present" => Ok(MemberState::Present),
        "absent" => Ok(MemberState::Absent),
        _ => Err(ConfigError::InvalidMemberState {
            value: s.to_string(),
        }),
    }
}

fn parse_setting(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidSetting {
            value: s.to_string(),
        }),
    }
}

fn table_to_payload(table: &toml::Table) -> Result<Payload, ConfigError> {
    match serde_json::to_value(table)? {
        Value::Object(map) => Ok(map),
        // A TOML table always serializes to an object
        _ => Ok(Payload::new()),
    }
}
