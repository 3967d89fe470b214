// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory collaborator recording calls made to it, for tests.

use parking_lot::Mutex;
use serde_json::json;

use psw_core::{ComponentId, CoreId};

use crate::{CollabError, Collaborator, ComponentSnapshot, DriverOps};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollabCall {
    UpdateClassifier(ComponentId),
    UpdateForwarder(ComponentId),
    InitClassifierInfo(ComponentId),
}

/// Records every call it receives; `fail_updates` makes
/// `update_classifier`/`update_forwarder` return an error for the listed
/// component ids, for exercising the flusher's rollback path.
#[derive(Default)]
pub struct FakeCollaborator {
    calls: Mutex<Vec<CollabCall>>,
    fail_updates: Mutex<Vec<ComponentId>>,
}

impl FakeCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_update_for(&self, id: ComponentId) {
        self.fail_updates.lock().push(id);
    }

    pub fn calls(&self) -> Vec<CollabCall> {
        self.calls.lock().clone()
    }

    fn should_fail(&self, id: ComponentId) -> bool {
        self.fail_updates.lock().contains(&id)
    }
}

impl Collaborator for FakeCollaborator {
    fn update_classifier(&self, component: &ComponentSnapshot) -> Result<(), CollabError> {
        self.calls.lock().push(CollabCall::UpdateClassifier(component.id));
        if self.should_fail(component.id) {
            return Err(CollabError::UpdateRejected(component.id));
        }
        Ok(())
    }

    fn update_forwarder(&self, component: &ComponentSnapshot) -> Result<(), CollabError> {
        self.calls.lock().push(CollabCall::UpdateForwarder(component.id));
        if self.should_fail(component.id) {
            return Err(CollabError::UpdateRejected(component.id));
        }
        Ok(())
    }

    fn init_classifier_info(&self, component_id: ComponentId) {
        self.calls.lock().push(CollabCall::InitClassifierInfo(component_id));
    }

    fn get_classifier_status(&self, _lcore: CoreId, component_id: ComponentId) -> serde_json::Value {
        json!({ "classifier_table": [], "component_id": component_id.get() })
    }

    fn get_forwarder_status(&self, _lcore: CoreId, component_id: ComponentId) -> serde_json::Value {
        json!({ "component_id": component_id.get() })
    }
}

/// Driver stub that hands out sequentially increasing port ids.
#[derive(Default)]
pub struct FakeDriver {
    next_port_id: Mutex<u16>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DriverOps for FakeDriver {
    fn add_ring_pmd(&self, _ring_id: u16) -> Result<u16, CollabError> {
        let mut next = self.next_port_id.lock();
        let id = *next;
        *next += 1;
        Ok(id)
    }

    fn add_vhost_pmd(&self, _index: u16, _client: bool) -> Result<u16, CollabError> {
        let mut next = self.next_port_id.lock();
        let id = *next;
        *next += 1;
        Ok(id)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
