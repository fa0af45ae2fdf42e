//! Versioned option schema for FortiOS configuration objects.
//!
//! This module provides:
//! - The static schema of the `router setting` object ([`ROUTER_SETTING`])
//! - Firmware revision parsing and ordering ([`Revision`])
//! - The per-revision compatibility check ([`version_gate`], [`VersionCheck`])
//!
//! # Support Tables
//!
//! Every object and every option carries a table of `(revision, supported)`
//! pairs. A revision that does not appear in a table is treated as
//! unsupported: the table only vouches for firmware it was generated from.

mod gate;
mod revision;
mod router_setting;


pub use gate::{FieldCheck, VersionCheck, version_gate};
pub use revision::{Revision, RevisionParseError};
pub use router_setting::ROUTER_SETTING;

/// Value type of a schema option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string value
    String,
}

/// Per-revision support table: `(revision, supported)` pairs.
pub type RevisionTable = &'static [(&'static str, bool)];

/// Schema entry for a single option of a configuration object.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Option name in the user-facing (underscore) convention
    pub name: &'static str,
    /// Value type
    pub kind: FieldKind,
    /// Firmware revisions this option is known for
    pub revisions: RevisionTable,
}

/// Schema of a FortiOS configuration object such as `router setting`.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    /// CMDB table (path) the object lives in
    pub table: &'static str,
    /// Object name inside the table
    pub object: &'static str,
    /// Firmware revisions the object itself is known for
    pub revisions: RevisionTable,
    /// Options accepted by the object
    pub children: &'static [FieldSchema],
}

impl ObjectSchema {
    /// Looks up an option by its user-facing name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.children.iter().find(|f| f.name == name)
    }

    /// Returns true if `name` is a known option of this object.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterates over the option names in declaration order.
    pub fn option_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.children.iter().map(|f| f.name)
    }
}

/// Looks up whether `revision` is marked supported in `table`.
///
/// Returns `None` when the revision is not listed (or the table contains
/// no parseable entry equal to it).
#[must_use]
pub fn lookup(table: RevisionTable, revision: &Revision) -> Option<bool> {
    table
        .iter()
        .find(|(listed, _)| listed.parse::<Revision>().ok().as_ref() == Some(revision))
        .map(|&(_, supported)| supported)
}

/// Returns the oldest and newest revisions listed in `table`.
#[must_use]
pub fn known_range(table: RevisionTable) -> Option<(Revision, Revision)> {
    let mut parsed = table.iter().filter_map(|(r, _)| r.parse::<Revision>().ok());
    let first = parsed.next()?;
    Some(parsed.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r))))
}
