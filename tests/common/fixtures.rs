//! Common test fixtures and constants.

use agentx_oidlist::{ListHandler, Oid, Value, oid};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}
pub fn sys_contact() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 4, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}
pub fn sys_or_descr(index: u32) -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 9, 1, 3, index)
}

// =============================================================================
// Subtree roots and bounds
// =============================================================================

/// System subtree root: 1.3.6.1.2.1.1
pub fn system_subtree() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1)
}

/// First OID after the system subtree: 1.3.6.1.2.1.2
pub fn system_subtree_end() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2)
}

/// Nonexistent OID inside the system subtree
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 99, 0)
}

// =============================================================================
// Lists
// =============================================================================

/// A system group list registered out of order, with sysORDescr rows 1, 2 and 10.
pub fn system_list() -> ListHandler {
    let mut list = ListHandler::new();
    list.insert(sys_or_descr(10)).set("row ten");
    list.insert(sys_name()).set("lab-router");
    list.insert(sys_or_descr(2)).set("row two");
    list.insert(sys_descr()).set("agentx-oidlist test agent");
    list.insert(sys_uptime()).set(Value::TimeTicks(4200));
    list.insert(sys_object_id())
        .set(Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 8072)));
    list.insert(sys_contact()).set("ops@example.net");
    list.insert(sys_or_descr(1)).set("row one");
    list
}

/// The OIDs of [`system_list`] in walk order.
pub fn system_walk_order() -> Vec<Oid> {
    vec![
        sys_descr(),
        sys_object_id(),
        sys_uptime(),
        sys_contact(),
        sys_name(),
        sys_or_descr(1),
        sys_or_descr(2),
        sys_or_descr(10),
    ]
}
