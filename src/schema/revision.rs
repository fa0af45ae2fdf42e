//! FortiOS firmware revision strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A FortiOS firmware revision such as `v7.2.4`.
///
/// Ordering is numeric per component, so `v6.0.11` sorts after `v6.0.5`.
/// The leading `v` is optional when parsing and always present when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

/// Error returned when a revision string is not of the form `vX.Y.Z`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid revision '{0}': expected vMAJOR.MINOR.PATCH")]
pub struct RevisionParseError(pub String);

impl Revision {
    /// Creates a revision from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Revision {
    type Err = RevisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RevisionParseError(s.to_string());

        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let mut parts = digits.split('.');
        let mut next = || -> Result<u32, RevisionParseError> {
            parts
                .next()
                .and_then(|p| p.parse::<u32>().ok())
                .ok_or_else(invalid)
        };

        let revision = Self::new(next()?, next()?, next()?);

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(revision)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
