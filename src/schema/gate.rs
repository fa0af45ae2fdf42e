//! Firmware revision compatibility check.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{ObjectSchema, Revision, RevisionTable, known_range, lookup};

/// Result of checking requested options against the device revision.
///
/// A check that did not match is a warning, never an error: the write
/// is still attempted and this value is attached to the task result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// True when the object and every requested option are supported
    pub matched: bool,
    /// Revision reported by the device
    pub system_version: String,
    /// Object-level mismatch reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Per-option mismatches
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checking: Vec<FieldCheck>,
}

/// A requested option that the device revision does not support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    /// Option name
    pub field: String,
    /// Always false for recorded entries
    pub supported: bool,
    /// Why the option is considered unsupported
    pub reason: String,
}

impl VersionCheck {
    fn matched(system_version: &str) -> Self {
        Self {
            matched: true,
            system_version: system_version.to_string(),
            reason: None,
            checking: Vec::new(),
        }
    }
}

/// Checks the object and the requested options against `system_version`.
///
/// Options that are null or not part of the schema are ignored here; the
/// payload filter drops them before anything is sent.
#[must_use]
pub fn version_gate(
    schema: &ObjectSchema,
    system_version: &str,
    requested: &Map<String, Value>,
) -> VersionCheck {
    let revision = system_version.parse::<Revision>().ok();
    let mut check = VersionCheck::matched(system_version);

    if let Err(reason) = support(schema.revisions, revision.as_ref(), system_version) {
        tracing::debug!(
            "{} {} not supported on {system_version}: {reason}",
            schema.table,
            schema.object
        );
        check.matched = false;
        check.reason = Some(reason);
        return check;
    }

    for (name, value) in requested {
        if value.is_null() {
            continue;
        }
        let Some(field) = schema.field(name) else {
            continue;
        };

        if let Err(reason) = support(field.revisions, revision.as_ref(), system_version) {
            check.checking.push(FieldCheck {
                field: name.clone(),
                supported: false,
                reason,
            });
        }
    }

    check.matched = check.checking.is_empty();
    check
}

fn support(
    table: RevisionTable,
    revision: Option<&Revision>,
    system_version: &str,
) -> Result<(), String> {
    let listed = revision.and_then(|r| lookup(table, r));

    match listed {
        Some(true) => Ok(()),
        Some(false) => Err(format!("not supported in {system_version}")),
        None => Err(known_range(table).map_or_else(
            || format!("{system_version} is not a known revision"),
            |(lo, hi)| {
                format!("{system_version} is not a known revision (known revisions: {lo} to {hi})")
            },
        )),
    }
}
