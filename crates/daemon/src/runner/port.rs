// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `port add|del`: semantic validation and staging against a named
//! component's rx/tx port lists. Grounded on `vf_cmd_runner.c`'s
//! `update_port` and `check_vf_port_count`.

use psw_core::{AbilityOp, ComponentName, PortAbility, PortDirection, PortRef, ProcessState, StateError};
use psw_wire::AbilityRequest;

fn resolve(state: &ProcessState, name: &ComponentName) -> Result<psw_core::ComponentId, StateError> {
    state
        .find_component_by_name(name.as_str())
        .map(|c| c.id)
        .ok_or_else(|| StateError::UnknownComponentName(name.clone()))
}

#[allow(clippy::expect_used)]
pub fn add(
    state: &mut ProcessState,
    target: PortRef,
    direction: PortDirection,
    name: ComponentName,
    ability: Option<AbilityRequest>,
) -> Result<(), StateError> {
    if !state.ports().any(|p| p.port_ref == target) {
        return Err(StateError::UnknownPort(target));
    }
    let component_id = resolve(state, &name)?;
    let component = state.component(component_id).expect("resolved above").clone();

    let already_present = component.ports(direction).contains(&target);
    if already_present {
        match &ability {
            Some(req) if req.op == AbilityOp::AddVlanTag => {
                let port = state.port_mut(target).expect("existence checked above");
                port.abilities.push(PortAbility {
                    op: req.op,
                    direction: req.direction,
                    tag: psw_core::VlanTag { vid: req.vid, pcp: req.pcp, tci: req.tci },
                })?;
            }
            _ => {
                return Err(StateError::DuplicatePortRef {
                    port: target,
                    direction,
                    name: component.name.clone(),
                })
            }
        }
    } else {
        if let Some(cap) = component.kind.cap(direction) {
            if component.ports(direction).len() >= cap {
                return Err(StateError::FanLimitExceeded { direction, name: component.name.clone() });
            }
        }
        if let Some(req) = &ability {
            let port = state.port_mut(target).expect("existence checked above");
            port.abilities.push(PortAbility {
                op: req.op,
                direction: req.direction,
                tag: psw_core::VlanTag { vid: req.vid, pcp: req.pcp, tci: req.tci },
            })?;
        }
        state
            .component_mut(component_id)
            .expect("resolved above")
            .ports_mut(direction)
            .push(target);
    }

    state.mark_component_dirty(component_id);
    let lcore_id = state.component(component_id).expect("resolved above").lcore_id;
    state.mark_core_dirty(lcore_id);
    Ok(())
}

#[allow(clippy::expect_used)]
pub fn del(
    state: &mut ProcessState,
    target: PortRef,
    direction: PortDirection,
    name: ComponentName,
) -> Result<(), StateError> {
    let component_id = resolve(state, &name)?;

    if let Some(port) = state.port_mut(target) {
        let ability_direction = match direction {
            PortDirection::Rx => psw_core::AbilityDirection::Rx,
            PortDirection::Tx => psw_core::AbilityDirection::Tx,
        };
        port.abilities.remove_matching_direction(ability_direction);
        port.abilities.remove_matching_direction(psw_core::AbilityDirection::Both);
    }

    let component = state.component_mut(component_id).expect("resolved above");
    let ports = component.ports_mut(direction);
    let before = ports.len();
    ports.retain(|&p| p != target);
    let removed = ports.len() != before;

    if removed {
        state.mark_component_dirty(component_id);
        let lcore_id = state.component(component_id).expect("resolved above").lcore_id;
        state.mark_core_dirty(lcore_id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;
