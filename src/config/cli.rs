//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::device::MemberState;

/// Configure router settings on a FortiGate appliance.
///
/// Filters the given options against the known `router setting` schema,
/// checks them against the firmware revision of the device and writes
/// them through the FortiOS REST API. The result is printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "fortios-router-setting")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Management URL of the appliance, e.g. `https://192.0.2.1`
    #[arg(long)]
    pub host: Option<String>,

    /// API token generated on the appliance
    #[arg(long = "access-token")]
    pub access_token: Option<String>,

    /// Virtual domain to configure
    #[arg(long)]
    pub vdom: Option<String>,

    /// Attribute path for a member operation (slash-delimited)
    #[arg(long = "member-path")]
    pub member_path: Option<String>,

    /// Add or remove the member at `--member-path`
    #[arg(long = "member-state", value_enum)]
    pub member_state: Option<MemberStateArg>,

    /// Log request and response bodies
    #[arg(long = "enable-log")]
    pub enable_log: bool,

    /// Router setting option in 'name=value' form (can be specified multiple times)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub settings: Vec<String>,

    /// Accept self-signed or otherwise invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for fortios-router-setting
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Member state argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MemberStateArg {
    /// Set the member from the task body
    Present,
    /// Clear the member
    Absent,
}

impl From<MemberStateArg> for MemberState {
    fn from(arg: MemberStateArg) -> Self {
        match arg {
            MemberStateArg::Present => Self::Present,
            MemberStateArg::Absent => Self::Absent,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
