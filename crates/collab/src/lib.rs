// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psw-collab: the seam between the command engine and the data-plane
//! modules this repository treats as external collaborators (§6 of the
//! control-plane spec this implements): the classifier/forwarder packet
//! path lookup tables, and the poll-mode driver that hands out port ids.
//!
//! None of these are implemented here — only their contracts. Production
//! wiring supplies a real implementation; tests use [`fake::FakeCollaborator`].

use thiserror::Error;

use psw_core::{ComponentId, CoreId, PortRef};

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

/// The subset of a component's shadow record a collaborator needs to
/// regenerate its packet-path lookup tables. Deliberately not
/// `psw_core::Component` itself: collaborators should not be able to
/// reach back into process state.
#[derive(Debug, Clone)]
pub struct ComponentSnapshot {
    pub id: ComponentId,
    pub name: String,
    pub lcore_id: CoreId,
    pub rx_ports: Vec<PortRef>,
    pub tx_ports: Vec<PortRef>,
}

#[derive(Debug, Error)]
pub enum CollabError {
    #[error("collaborator rejected update for component {0}")]
    UpdateRejected(ComponentId),
    #[error("driver failed to bring up port: {0}")]
    DriverFailure(String),
}

/// Per-kind packet-path update and status hooks (§6: `update_classifier`,
/// `update_forwarder`, `init_classifier_info`, `get_classifier_status`,
/// `get_forwarder_status`). One implementation is expected to dispatch
/// internally on `WorkerKind`, matching the design note's "capability
/// vtable keyed by kind" (§9).
pub trait Collaborator: Send + Sync {
    /// Regenerate the classifier's packet-path lookup table from the
    /// shadow record. Called during flush, step 2, for every dirty
    /// classifier component. Failure aborts the flush.
    fn update_classifier(&self, component: &ComponentSnapshot) -> Result<(), CollabError>;

    /// Regenerate a forwarder/merger/mirror's packet-path table. Same
    /// contract as [`Collaborator::update_classifier`].
    fn update_forwarder(&self, component: &ComponentSnapshot) -> Result<(), CollabError>;

    /// Discard a component's classifier table. Called when a
    /// `classifier_mac` component is stopped.
    fn init_classifier_info(&self, component_id: ComponentId);

    /// Status fragment appended to a `status` reply element for a
    /// classifier component (e.g. its `(vid, mac) -> port` table).
    fn get_classifier_status(&self, lcore: CoreId, component_id: ComponentId) -> serde_json::Value;

    /// Status fragment for a forwarder/merger/mirror component.
    fn get_forwarder_status(&self, lcore: CoreId, component_id: ComponentId) -> serde_json::Value;
}

/// Poll-mode driver adapters that hand out opaque numeric port ids for
/// newly attached ring/vhost ports.
pub trait DriverOps: Send + Sync {
    fn add_ring_pmd(&self, ring_id: u16) -> Result<u16, CollabError>;
    fn add_vhost_pmd(&self, index: u16, client: bool) -> Result<u16, CollabError>;
}
