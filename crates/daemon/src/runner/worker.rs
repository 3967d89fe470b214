// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `component start|stop`: semantic validation and staging against the
//! core/component tables. Grounded on `vf_cmd_runner.c`'s `update_comp`.

use psw_collab::Collaborator;
use psw_core::{Component, ComponentName, CoreId, CoreStatus, ProcessState, StateError, WorkerKind};

pub fn start(
    state: &mut ProcessState,
    name: ComponentName,
    lcore_id: CoreId,
    kind: WorkerKind,
) -> Result<(), StateError> {
    if state.core(lcore_id).status() == CoreStatus::Unused {
        return Err(StateError::CoreNotUnused(lcore_id));
    }
    if state.find_component_by_name(name.as_str()).is_some() {
        return Err(StateError::NameInUse(name));
    }

    let id = state.allocate_component_id()?;
    state.insert_component(Component::new(id, name, kind, lcore_id));

    state.core(lcore_id).sync_shadow_from_live();
    state.core(lcore_id).with_shadow_mut(|ids| ids.push(id));

    state.mark_core_dirty(lcore_id);
    state.mark_component_dirty(id);
    Ok(())
}

/// Idempotent (P4): a name that doesn't resolve is `success`, state
/// unchanged.
pub fn stop(
    state: &mut ProcessState,
    name: ComponentName,
    collaborator: &dyn Collaborator,
) -> Result<(), StateError> {
    let Some(component) = state.find_component_by_name(name.as_str()) else {
        return Ok(());
    };
    let id = component.id;
    let lcore_id = component.lcore_id;
    let kind = component.kind;

    state.remove_component(id);

    state.core(lcore_id).sync_shadow_from_live();
    state
        .core(lcore_id)
        .with_shadow_mut(|ids| ids.retain(|&existing| existing != id));

    state.mark_core_dirty(lcore_id);
    state.mark_component_dirty(id);

    if kind == WorkerKind::ClassifierMac {
        collaborator.init_classifier_info(id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
