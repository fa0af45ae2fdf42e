//! Request payload shaping.
//!
//! Turns the user-supplied option mapping into the body FortiOS expects:
//! - [`filter_payload`] keeps only known, non-null options
//! - [`rewrite_keys`] converts `snake_case` keys to the hyphenated wire names

mod filter;
mod rewrite;


pub use filter::{filter_payload, remove_invalid_fields};
pub use rewrite::{rewrite_keys, rewrite_map};

/// Flat option mapping as supplied by the caller or sent on the wire.
pub type Payload = serde_json::Map<String, serde_json::Value>;
