// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Purely derived `status` read: walk every assigned core, emit one
//! status element per live component or a single `unuse` element for an
//! empty core. Grounded on `vf_cmd_runner.c`'s `spp_iterate_core_info`.

use psw_collab::Collaborator;
use psw_core::{CoreStatus, ProcessState, WorkerKind};
use psw_wire::{StatusBody, StatusElement};

pub fn collect(state: &ProcessState, collaborator: &dyn Collaborator) -> Vec<StatusElement> {
    let mut elements = Vec::new();

    for (index, core) in state.cores().iter().enumerate() {
        if core.status() == CoreStatus::Unused {
            continue;
        }
        let live = core.live_components();
        if live.is_empty() {
            elements.push(StatusElement { core: index as u16, body: StatusBody::Unuse });
            continue;
        }
        for component_id in live {
            let Some(component) = state.component(component_id) else { continue };
            let core_id = component.lcore_id;
            let name = component.name.to_string();
            let rx_ports = component.rx_ports.iter().map(ToString::to_string).collect();
            let tx_ports = component.tx_ports.iter().map(ToString::to_string).collect();
            let body = match component.kind {
                WorkerKind::ClassifierMac => StatusBody::Classifier {
                    name,
                    rx_ports,
                    tx_ports,
                    classifier_table: collaborator.get_classifier_status(core_id, component_id),
                },
                WorkerKind::Merge => StatusBody::Merge {
                    name,
                    rx_ports,
                    tx_ports,
                    details: collaborator.get_forwarder_status(core_id, component_id),
                },
                WorkerKind::Forward => StatusBody::Forward {
                    name,
                    rx_ports,
                    tx_ports,
                    details: collaborator.get_forwarder_status(core_id, component_id),
                },
                WorkerKind::Mirror => StatusBody::Mirror {
                    name,
                    rx_ports,
                    tx_ports,
                    details: collaborator.get_forwarder_status(core_id, component_id),
                },
            };
            elements.push(StatusElement { core: index as u16, body });
        }
    }

    elements
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
