// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `classifier_table add|del`: semantic validation and staging against
//! the port inventory. Grounded on `vf_cmd_runner.c`'s `update_cls_table`.

use psw_core::{
    ClassifierAttrs, ComponentId, MacAddr, PortRef, ProcessState, StateError, WorkerKind,
    ETH_VLAN_ID_MAX,
};
use psw_wire::ClsKind;

fn requested_attrs(kind: ClsKind, vid: u16, mac: MacAddr) -> ClassifierAttrs {
    match kind {
        ClsKind::Mac => ClassifierAttrs { vid: ETH_VLAN_ID_MAX, mac },
        ClsKind::Vlan => ClassifierAttrs { vid, mac: MacAddr::ZERO },
    }
}

fn find_classifier_owner(state: &ProcessState, target: PortRef) -> Option<ComponentId> {
    state
        .components()
        .find(|c| c.kind == WorkerKind::ClassifierMac && c.tx_ports.contains(&target))
        .map(|c| c.id)
}

#[allow(clippy::expect_used)]
fn mark_owner_dirty(state: &mut ProcessState, owner: ComponentId) {
    let lcore_id = state.component(owner).expect("owner came from this state").lcore_id;
    state.mark_component_dirty(owner);
    state.mark_core_dirty(lcore_id);
}

#[allow(clippy::expect_used)]
pub fn add(
    state: &mut ProcessState,
    kind: ClsKind,
    vid: u16,
    mac: MacAddr,
    target: PortRef,
    is_default: bool,
) -> Result<(), StateError> {
    if !state.ports().any(|p| p.port_ref == target) {
        return Err(StateError::UnknownPort(target));
    }

    if is_default {
        let owner = find_classifier_owner(state, target).ok_or(StateError::NoClassifierOwner(target))?;
        state
            .component_mut(owner)
            .expect("owner came from this state")
            .default_target = Some(target);
        mark_owner_dirty(state, owner);
        return Ok(());
    }

    let port = state.port_mut(target).expect("existence checked above");
    if !port.classifier.is_unclassified() {
        return Err(StateError::PortAlreadyUsed(target));
    }
    port.classifier = requested_attrs(kind, vid, mac);

    if let Some(owner) = find_classifier_owner(state, target) {
        mark_owner_dirty(state, owner);
    }
    Ok(())
}

#[allow(clippy::expect_used)]
pub fn del(
    state: &mut ProcessState,
    kind: ClsKind,
    vid: u16,
    mac: MacAddr,
    target: PortRef,
    is_default: bool,
) -> Result<(), StateError> {
    if !state.ports().any(|p| p.port_ref == target) {
        return Err(StateError::UnknownPort(target));
    }

    if is_default {
        let owner = find_classifier_owner(state, target).ok_or(StateError::NoClassifierOwner(target))?;
        state
            .component_mut(owner)
            .expect("owner came from this state")
            .default_target = None;
        mark_owner_dirty(state, owner);
        return Ok(());
    }

    let requested = requested_attrs(kind, vid, mac);
    let port = state.port_mut(target).expect("existence checked above");
    if !port.classifier.is_unclassified() && port.classifier != requested {
        return Err(StateError::ClassifierMismatch(target));
    }
    port.classifier = ClassifierAttrs::unclassified();

    if let Some(owner) = find_classifier_owner(state, target) {
        mark_owner_dirty(state, owner);
    }
    Ok(())
}

#[cfg(test)]
#[path = "cls_table_tests.rs"]
mod tests;
