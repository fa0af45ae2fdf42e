//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Management connection section
    #[serde(default)]
    pub device: DeviceSection,

    /// Task options section
    #[serde(default)]
    pub task: TaskSection,

    /// Router setting options (the task body)
    pub router_setting: Option<toml::Table>,
}

/// Management connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSection {
    /// Management URL
    pub host: Option<String>,

    /// API token
    pub access_token: Option<String>,

    /// Verify the appliance TLS certificate (default: true)
    pub verify_tls: Option<bool>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Task options section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSection {
    /// Virtual domain
    pub vdom: Option<String>,

    /// Attribute path for a member operation
    pub member_path: Option<String>,

    /// Member state: "present" or "absent"
    pub member_state: Option<String>,

    /// Log request and response bodies
    #[serde(default)]
    pub enable_log: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# fortios-router-setting configuration file

[device]
# Management URL of the appliance (required to run)
# host = "https://192.0.2.1"

# API token generated on the appliance (System > Administrators > REST API Admin)
# access_token = "your-token-here"

# Verify the appliance TLS certificate (default: true)
# verify_tls = true

# Request timeout in seconds (default: 30)
# timeout = 30

[task]
# Virtual domain (default: root)
# vdom = "root"

# Member operation: edit a single attribute instead of the whole object
# member_path = "hostname"
# member_state = "present"

# Log request and response bodies
# enable_log = false

[router_setting]
# Options are written in snake_case; they are sent with hyphens.
# Options not supported by this object are ignored.
# hostname = "fw01"
# show_filter = "prefix-list-name"
# bgp_debug_flags = ""
# ospf_debug_events_flags = ""
"#
    .to_string()
}
