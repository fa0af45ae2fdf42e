//! Schema of the `router setting` object.

use super::{FieldKind, FieldSchema, ObjectSchema, RevisionTable};

/// Revisions on which the object, `hostname` and `show_filter` are available.
const ALL_REVISIONS: RevisionTable = &[
    ("v7.4.0", true),
    ("v7.2.4", true),
    ("v7.2.2", true),
    ("v7.2.1", true),
    ("v7.2.0", true),
    ("v7.0.8", true),
    ("v7.0.7", true),
    ("v7.0.6", true),
    ("v7.0.5", true),
    ("v7.0.4", true),
    ("v7.0.3", true),
    ("v7.0.2", true),
    ("v7.0.1", true),
    ("v7.0.0", true),
    ("v6.4.4", true),
    ("v6.4.1", true),
    ("v6.4.0", true),
    ("v6.2.7", true),
    ("v6.2.5", true),
    ("v6.2.3", true),
    ("v6.2.0", true),
    ("v6.0.5", true),
    ("v6.0.11", true),
    ("v6.0.0", true),
];

/// Routing daemon debug flags, known only for the v6.0 and v6.2 trains.
const DEBUG_FLAG_REVISIONS: RevisionTable = &[
    ("v6.2.3", true),
    ("v6.2.0", false),
    ("v6.0.5", false),
    ("v6.0.11", false),
    ("v6.0.0", false),
];

const fn string_field(name: &'static str, revisions: RevisionTable) -> FieldSchema {
    FieldSchema {
        name,
        kind: FieldKind::String,
        revisions,
    }
}

/// `router setting`: hostname, prefix-list route filter and routing daemon debug flags.
pub static ROUTER_SETTING: ObjectSchema = ObjectSchema {
    table: "router",
    object: "setting",
    revisions: ALL_REVISIONS,
    children: &[
        string_field("show_filter", ALL_REVISIONS),
        string_field("hostname", ALL_REVISIONS),
        string_field("ospf_debug_lsa_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf_debug_nfsm_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf_debug_packet_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf_debug_events_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf_debug_route_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf_debug_ifsm_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf_debug_nsm_flags", DEBUG_FLAG_REVISIONS),
        string_field("rip_debug_flags", DEBUG_FLAG_REVISIONS),
        string_field("bgp_debug_flags", DEBUG_FLAG_REVISIONS),
        string_field("igmp_debug_flags", DEBUG_FLAG_REVISIONS),
        string_field("pimdm_debug_flags", DEBUG_FLAG_REVISIONS),
        string_field("pimsm_debug_simple_flags", DEBUG_FLAG_REVISIONS),
        string_field("pimsm_debug_timer_flags", DEBUG_FLAG_REVISIONS),
        string_field("pimsm_debug_joinprune_flags", DEBUG_FLAG_REVISIONS),
        string_field("imi_debug_flags", DEBUG_FLAG_REVISIONS),
        string_field("isis_debug_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_lsa_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_nfsm_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_packet_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_events_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_route_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_ifsm_flags", DEBUG_FLAG_REVISIONS),
        string_field("ospf6_debug_nsm_flags", DEBUG_FLAG_REVISIONS),
        string_field("ripng_debug_flags", DEBUG_FLAG_REVISIONS),
    ],
};
