//! fortios-router-setting: FortiGate `router setting` configuration
//!
//! A library for writing the `router setting` object of a FortiGate
//! appliance through the FortiOS REST API. Requested options are filtered
//! against a static schema, checked against the firmware revision of the
//! device and converted to wire names before they are sent.

pub mod config;
pub mod device;
pub mod payload;
pub mod schema;
pub mod task;
