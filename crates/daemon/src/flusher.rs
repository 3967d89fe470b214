// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic publish protocol (§4.4): snapshot, per-dirty-component
//! collaborator update, index flip, bounded acknowledgement wait, dirty
//! clear. Grounded on `vf_cmd_runner.c`'s `update_comp_info`.

use thiserror::Error;
use tokio::time::sleep;

use psw_collab::{CollabError, Collaborator, ComponentSnapshot};
use psw_core::{Component, ComponentId, ProcessState, WorkerKind};

use crate::env;

#[derive(Debug, Error)]
pub enum FlushError {
    #[error("collaborator rejected flush: {0}")]
    Collaborator(#[from] CollabError),
}

fn snapshot_of(component: &Component) -> ComponentSnapshot {
    ComponentSnapshot {
        id: component.id,
        name: component.name.to_string(),
        lcore_id: component.lcore_id,
        rx_ports: component.rx_ports.clone(),
        tx_ports: component.tx_ports.clone(),
    }
}

fn update_one(
    collaborator: &dyn Collaborator,
    component_id: ComponentId,
    component: &Component,
) -> Result<(), CollabError> {
    let snapshot = snapshot_of(component);
    match component.kind {
        WorkerKind::ClassifierMac => collaborator.update_classifier(&snapshot),
        WorkerKind::Merge | WorkerKind::Forward | WorkerKind::Mirror => {
            collaborator.update_forwarder(&snapshot)
        }
    }
    .map_err(|err| {
        tracing::warn!(component = component_id.get(), "collaborator rejected flush: {err}");
        err
    })
}

/// Runs one flush cycle: stage every dirty component into the
/// collaborator, then flip every dirty core's index. On collaborator
/// failure the shadow state is rolled back and no index is flipped.
pub async fn flush(state: &mut ProcessState, collaborator: &dyn Collaborator) -> Result<(), FlushError> {
    state.snapshot_backup();

    let dirty_components: Vec<ComponentId> = state.changed_components().collect();
    for component_id in dirty_components {
        let Some(component) = state.component(component_id) else {
            continue;
        };
        if let Err(err) = update_one(collaborator, component_id, component) {
            state.restore_from_backup();
            return Err(err.into());
        }
    }

    let dirty_cores: Vec<_> = state.changed_cores().collect();
    for core_id in &dirty_cores {
        state.core(*core_id).flip();
    }

    for core_id in &dirty_cores {
        await_flip_ack(state, *core_id).await;
    }

    state.clear_dirty();
    state.clear_backup();
    tracing::debug!(cores = dirty_cores.len(), "flush committed");
    Ok(())
}

/// Bounded spin-with-sleep for the data plane to observe an index flip.
/// In this process the flip is visible the instant [`psw_core::CoreSlot::flip`]
/// returns (§5's acquire/release discipline), so this loop exits on its
/// first check; it exists to preserve the retry budget as a seam for a
/// future real executor.
async fn await_flip_ack(state: &ProcessState, core_id: psw_core::CoreId) {
    let expected = state.core(core_id).live_components();
    for _ in 0..env::flush_retry_max() {
        if state.core(core_id).live_components() == expected {
            return;
        }
        sleep(env::flush_retry_interval()).await;
    }
}

#[cfg(test)]
#[path = "flusher_tests.rs"]
mod tests;
