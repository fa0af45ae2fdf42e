//! Member operations: editing a single attribute instead of the whole object.

use std::fmt;

/// Whether the addressed member should exist after the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberState {
    /// Set the member from the task body
    Present,
    /// Clear the member
    Absent,
}

impl fmt::Display for MemberState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// A member operation addressed by a `/`-delimited attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOperation {
    path: String,
    state: MemberState,
}

impl MemberOperation {
    /// Creates a member operation.
    ///
    /// Leading and trailing slashes in `path` are ignored.
    #[must_use]
    pub fn new(path: impl Into<String>, state: MemberState) -> Self {
        Self {
            path: path.into(),
            state,
        }
    }

    /// Returns the path as given.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Returns the requested state.
    #[must_use]
    pub const fn state(&self) -> MemberState {
        self.state
    }
}
