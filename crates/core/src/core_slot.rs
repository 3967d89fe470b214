// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-logical-core status and the double-buffered component list.
//!
//! Two `Vec<ComponentId>` slots back each core, selected by an
//! acquire/release-ordered `ref_index`. The control thread only ever
//! writes the slot `ref_index` does *not* currently select; the flusher
//! is the sole writer of `ref_index` itself. Data-plane executors read
//! `status` and the live slot without ever taking a lock that the control
//! thread could be holding, since the two slots are independent
//! `parking_lot::RwLock`s and control never touches the live one.

use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::ids::ComponentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreStatus {
    Unused,
    Stopped,
    Idle,
    Forwarding,
    StopRequested,
    IdleRequested,
}

impl CoreStatus {
    fn from_u32(raw: u32) -> Self {
        match raw {
            1 => CoreStatus::Stopped,
            2 => CoreStatus::Idle,
            3 => CoreStatus::Forwarding,
            4 => CoreStatus::StopRequested,
            5 => CoreStatus::IdleRequested,
            _ => CoreStatus::Unused,
        }
    }

    fn as_u32(self) -> u32 {
        match self {
            CoreStatus::Unused => 0,
            CoreStatus::Stopped => 1,
            CoreStatus::Idle => 2,
            CoreStatus::Forwarding => 3,
            CoreStatus::StopRequested => 4,
            CoreStatus::IdleRequested => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoreStatus::Unused => "unused",
            CoreStatus::Stopped => "stopped",
            CoreStatus::Idle => "idle",
            CoreStatus::Forwarding => "forwarding",
            CoreStatus::StopRequested => "stop_requested",
            CoreStatus::IdleRequested => "idle_requested",
        }
    }
}

impl fmt::Display for CoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct AtomicCoreStatus(AtomicU32);

impl AtomicCoreStatus {
    fn new(status: CoreStatus) -> Self {
        Self(AtomicU32::new(status.as_u32()))
    }

    fn load(&self) -> CoreStatus {
        CoreStatus::from_u32(self.0.load(Ordering::Acquire))
    }

    fn store(&self, status: CoreStatus) {
        self.0.store(status.as_u32(), Ordering::Release)
    }
}

/// A logical core's status word plus its double-buffered component list.
pub struct CoreSlot {
    status: AtomicCoreStatus,
    ref_index: AtomicUsize,
    buffers: [RwLock<Vec<ComponentId>>; 2],
}

impl CoreSlot {
    pub fn new() -> Self {
        Self {
            status: AtomicCoreStatus::new(CoreStatus::Unused),
            ref_index: AtomicUsize::new(0),
            buffers: [RwLock::new(Vec::new()), RwLock::new(Vec::new())],
        }
    }

    pub fn status(&self) -> CoreStatus {
        self.status.load()
    }

    pub fn set_status(&self, status: CoreStatus) {
        self.status.store(status)
    }

    /// Data-plane read path: an acquire load of the index followed by a
    /// snapshot of the slot it names.
    pub fn live_components(&self) -> Vec<ComponentId> {
        let i = self.ref_index.load(Ordering::Acquire);
        self.buffers[i].read().clone()
    }

    fn upd_index(&self) -> usize {
        1 - self.ref_index.load(Ordering::Acquire)
    }

    /// Control-only: mutate the shadow (non-live) slot.
    pub fn with_shadow_mut<R>(&self, f: impl FnOnce(&mut Vec<ComponentId>) -> R) -> R {
        let i = self.upd_index();
        let mut guard = self.buffers[i].write();
        f(&mut guard)
    }

    /// Control-only: bring the shadow slot up to date with the currently
    /// live one. Must run before incremental edits to a core that was not
    /// already dirty, since a prior flip leaves the new shadow one
    /// generation stale.
    pub fn sync_shadow_from_live(&self) {
        let live = self.live_components();
        self.with_shadow_mut(|shadow| *shadow = live);
    }

    /// Flusher-only: the only place `ref_index` is written. Release-ordered
    /// so every write the control thread made to the shadow slot is
    /// visible to a data-plane reader that acquire-loads the new index.
    pub fn flip(&self) {
        let next = self.upd_index();
        self.ref_index.store(next, Ordering::Release);
    }
}

impl Default for CoreSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "core_slot_tests.rs"]
mod tests;
