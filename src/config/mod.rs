//! Configuration layer for fortios-router-setting.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Router setting options merge per option: `--set name=value` overrides the
//! same option from `[router_setting]` and keeps the others.
//!
//! # Boolean Flag Semantics
//!
//! `--enable-log` uses OR semantics with `task.enable_log`. `--insecure`
//! disables certificate verification even if the file sets `verify_tls = true`.
//!
//! # Member Operations
//!
//! `member_path` and `member_state` must be given together. Each may come
//! from either source.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, MemberStateArg};
pub use error::{ConfigError, field};
pub use toml::{DeviceSection, TaskSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
