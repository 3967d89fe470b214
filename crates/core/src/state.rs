// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ProcessState`: the single owning value passed to every runner
//! operation (design note: fold the source's wired-together global
//! singletons into one explicit value).

use std::collections::{BTreeMap, BTreeSet};

use crate::component::Component;
use crate::core_slot::{CoreSlot, CoreStatus};
use crate::error::StateError;
use crate::ids::{ComponentId, ComponentName, CoreId, MAX_LCORE};
use crate::port::{Port, PortRef};

/// Process-wide startup parameters, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct StartupParams {
    pub client_id: u32,
    pub controller_ip: String,
    pub controller_port: u16,
    pub vhost_client: bool,
    pub secondary_type: String,
}

#[derive(Clone)]
struct Backup {
    ports: BTreeMap<PortRef, Port>,
    components: BTreeMap<ComponentId, Component>,
    names: BTreeMap<ComponentName, ComponentId>,
}

/// Singleton process state: port inventory, component table, core table,
/// dirty bitmaps, and the backup snapshot used to roll back a failed
/// flush. Owned exclusively by the single control task (§5 of the spec
/// this implements); never shared behind a lock.
pub struct ProcessState {
    pub startup: StartupParams,
    ports: BTreeMap<PortRef, Port>,
    components: BTreeMap<ComponentId, Component>,
    names: BTreeMap<ComponentName, ComponentId>,
    cores: Vec<CoreSlot>,
    changed_cores: BTreeSet<CoreId>,
    changed_components: BTreeSet<ComponentId>,
    backup: Option<Backup>,
}

impl ProcessState {
    /// `assigned_lcores` marks which logical cores this process owns;
    /// every other id in `[0, MAX_LCORE)` stays `Unused` and can never
    /// host a component.
    pub fn new(startup: StartupParams, initial_ports: Vec<Port>, assigned_lcores: &[CoreId]) -> Self {
        let mut cores = Vec::with_capacity(MAX_LCORE);
        cores.resize_with(MAX_LCORE, CoreSlot::new);
        for lcore in assigned_lcores {
            cores[lcore.get() as usize].set_status(CoreStatus::Idle);
        }
        let ports = initial_ports
            .into_iter()
            .map(|p| (p.port_ref, p))
            .collect();
        Self {
            startup,
            ports,
            components: BTreeMap::new(),
            names: BTreeMap::new(),
            cores,
            changed_cores: BTreeSet::new(),
            changed_components: BTreeSet::new(),
            backup: None,
        }
    }

    // -- ports --------------------------------------------------------

    pub fn port(&self, port_ref: PortRef) -> Option<&Port> {
        self.ports.get(&port_ref)
    }

    pub fn port_mut(&mut self, port_ref: PortRef) -> Option<&mut Port> {
        self.ports.get_mut(&port_ref)
    }

    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    // -- components -----------------------------------------------------

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(&id)
    }

    pub fn find_component_by_name(&self, name: &str) -> Option<&Component> {
        self.names.get(name).and_then(|id| self.components.get(id))
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Linear scan for a free component id in `[0, MAX_LCORE)`, mirroring
    /// the original's free-slot scan.
    #[allow(clippy::expect_used)]
    pub fn allocate_component_id(&self) -> Result<ComponentId, StateError> {
        (0..MAX_LCORE as u16)
            .map(|raw| ComponentId::new(raw).expect("raw < MAX_LCORE by construction"))
            .find(|id| !self.components.contains_key(id))
            .ok_or(StateError::ComponentSpaceExhausted)
    }

    pub fn insert_component(&mut self, component: Component) {
        self.names.insert(component.name.clone(), component.id);
        self.components.insert(component.id, component);
    }

    pub fn remove_component(&mut self, id: ComponentId) -> Option<Component> {
        let component = self.components.remove(&id)?;
        self.names.remove(component.name.as_str());
        Some(component)
    }

    // -- cores ----------------------------------------------------------

    pub fn core(&self, id: CoreId) -> &CoreSlot {
        &self.cores[id.get() as usize]
    }

    pub fn cores(&self) -> &[CoreSlot] {
        &self.cores
    }

    // -- dirty tracking --------------------------------------------------

    pub fn mark_core_dirty(&mut self, id: CoreId) {
        self.changed_cores.insert(id);
    }

    pub fn mark_component_dirty(&mut self, id: ComponentId) {
        self.changed_components.insert(id);
    }

    pub fn changed_cores(&self) -> impl Iterator<Item = CoreId> + '_ {
        self.changed_cores.iter().copied()
    }

    pub fn changed_components(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.changed_components.iter().copied()
    }

    /// Flusher-only: clears both dirty bitmaps at the end of a committed
    /// flush (step 5 of the publish protocol).
    pub fn clear_dirty(&mut self) {
        self.changed_cores.clear();
        self.changed_components.clear();
    }

    // -- backup / rollback ------------------------------------------------

    /// Flusher-only: step 1 of the publish protocol, a plain value copy
    /// since ports/components hold indices rather than pointers.
    pub fn snapshot_backup(&mut self) {
        self.backup = Some(Backup {
            ports: self.ports.clone(),
            components: self.components.clone(),
            names: self.names.clone(),
        });
    }

    /// Flusher-only: restores shadow (not yet flipped) state from the
    /// backup after a collaborator failure aborts the flush.
    pub fn restore_from_backup(&mut self) {
        if let Some(backup) = self.backup.take() {
            self.ports = backup.ports;
            self.components = backup.components;
            self.names = backup.names;
        }
        self.changed_cores.clear();
        self.changed_components.clear();
    }

    pub fn clear_backup(&mut self) {
        self.backup = None;
    }

    // -- invariant checking (property P1) --------------------------------

    /// Verifies invariants 1, 2, 4 and 5 of §3. Invariant 3 (at most one
    /// classifying tx-component per port) and invariant 6 (ability
    /// dedup) are enforced structurally by the runner and
    /// [`crate::port::PortAbilities::push`] respectively, and so cannot
    /// be violated by construction; this check still re-derives
    /// invariant 3 as a defense against future runner bugs.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        for (core_index, core) in self.cores.iter().enumerate() {
            for component_id in core.live_components() {
                let component = self
                    .components
                    .get(&component_id)
                    .ok_or(StateError::InvariantViolated(
                        "core references a component missing from the component table",
                    ))?;
                if component.lcore_id.get() as usize != core_index {
                    return Err(StateError::InvariantViolated(
                        "component's lcore_id does not match the core referencing it",
                    ));
                }
            }
        }

        let mut classifying_tx: BTreeMap<PortRef, ComponentId> = BTreeMap::new();
        for component in self.components.values() {
            for port_ref in component.rx_ports.iter().chain(component.tx_ports.iter()) {
                let port = self
                    .ports
                    .get(port_ref)
                    .ok_or(StateError::InvariantViolated(
                        "component references a port missing from the inventory",
                    ))?;
                if port.port_ref.kind != port_ref.kind {
                    return Err(StateError::InvariantViolated(
                        "port reference kind does not match the inventory entry",
                    ));
                }
            }
            if component.kind == crate::component::WorkerKind::ClassifierMac {
                for port_ref in &component.tx_ports {
                    if let Some(port) = self.ports.get(port_ref) {
                        if !port.classifier.is_unclassified()
                            && classifying_tx.insert(*port_ref, component.id).is_some()
                        {
                            return Err(StateError::InvariantViolated(
                                "more than one classifier component targets the same port",
                            ));
                        }
                    }
                }
            }
            if let Some(cap) = component.kind.rx_cap() {
                if component.rx_ports.len() > cap {
                    return Err(StateError::InvariantViolated(
                        "rx fan-in cap exceeded for this worker kind",
                    ));
                }
            }
            if let Some(cap) = component.kind.tx_cap() {
                if component.tx_ports.len() > cap {
                    return Err(StateError::InvariantViolated(
                        "tx fan-out cap exceeded for this worker kind",
                    ));
                }
            }
        }

        if self.names.len() != self.components.len() {
            return Err(StateError::InvariantViolated(
                "component name index is out of sync with the component table",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
