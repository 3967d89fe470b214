// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Proptest strategies for the state model, shared by this crate's own
//! property tests and by `psw-daemon`'s runner property tests.

use proptest::prelude::*;

use crate::component::WorkerKind;
use crate::ids::{ComponentName, CoreId, MacAddr, MAX_LCORE};
use crate::port::{PortKind, PortRef};

pub fn arb_component_name() -> impl Strategy<Value = ComponentName> {
    "[a-z][a-z0-9_]{0,15}".prop_map(|s| ComponentName::new(s).expect("generated name fits budget"))
}

pub fn arb_core_id() -> impl Strategy<Value = CoreId> {
    (0..MAX_LCORE as u16).prop_map(|raw| CoreId::new(raw).expect("raw < MAX_LCORE"))
}

pub fn arb_worker_kind() -> impl Strategy<Value = WorkerKind> {
    prop_oneof![
        Just(WorkerKind::ClassifierMac),
        Just(WorkerKind::Merge),
        Just(WorkerKind::Forward),
        Just(WorkerKind::Mirror),
    ]
}

pub fn arb_port_kind() -> impl Strategy<Value = PortKind> {
    prop_oneof![
        Just(PortKind::Phy),
        Just(PortKind::Vhost),
        Just(PortKind::Ring),
    ]
}

pub fn arb_port_ref(max_index: u16) -> impl Strategy<Value = PortRef> {
    (arb_port_kind(), 0..max_index).prop_map(|(kind, index)| PortRef::new(kind, index))
}

pub fn arb_mac_addr() -> impl Strategy<Value = MacAddr> {
    any::<u64>().prop_map(|raw| MacAddr::parse(&format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        (raw >> 40) & 0xff,
        (raw >> 32) & 0xff,
        (raw >> 24) & 0xff,
        (raw >> 16) & 0xff,
        (raw >> 8) & 0xff,
        raw & 0xff,
    )).expect("well-formed hex text"))
}
