// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Component entities (worker role instances).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ids::{ComponentId, ComponentName, CoreId};
use crate::port::{PortDirection, PortRef};

/// Worker role. Display/FromStr use the wire spellings (`merge`/`forward`,
/// not `merger`/`forwarder`) since the status reply and command parser
/// both round-trip through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    ClassifierMac,
    Merge,
    Forward,
    Mirror,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown worker kind")]
pub struct WorkerKindError;

impl WorkerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkerKind::ClassifierMac => "classifier_mac",
            WorkerKind::Merge => "merge",
            WorkerKind::Forward => "forward",
            WorkerKind::Mirror => "mirror",
        }
    }

    /// Upper bound on rx-port count, or `None` if unbounded (invariant 4).
    pub fn rx_cap(self) -> Option<usize> {
        match self {
            WorkerKind::Forward | WorkerKind::ClassifierMac => Some(1),
            WorkerKind::Merge | WorkerKind::Mirror => None,
        }
    }

    /// Upper bound on tx-port count, or `None` if unbounded (invariant 4).
    pub fn tx_cap(self) -> Option<usize> {
        match self {
            WorkerKind::Forward | WorkerKind::Merge => Some(1),
            WorkerKind::ClassifierMac | WorkerKind::Mirror => None,
        }
    }

    pub fn cap(self, direction: PortDirection) -> Option<usize> {
        match direction {
            PortDirection::Rx => self.rx_cap(),
            PortDirection::Tx => self.tx_cap(),
        }
    }
}

impl FromStr for WorkerKind {
    type Err = WorkerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classifier_mac" => Ok(WorkerKind::ClassifierMac),
            "merge" => Ok(WorkerKind::Merge),
            "forward" => Ok(WorkerKind::Forward),
            "mirror" => Ok(WorkerKind::Mirror),
            _ => Err(WorkerKindError),
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A running instance of one worker role, bound to one logical core.
#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub name: ComponentName,
    pub kind: WorkerKind,
    pub lcore_id: CoreId,
    pub rx_ports: Vec<PortRef>,
    pub tx_ports: Vec<PortRef>,
    /// Classifier-only: the default route for traffic matching no
    /// configured `(vid, mac)` entry. Unused by non-classifier kinds.
    pub default_target: Option<PortRef>,
}

impl Component {
    pub fn new(id: ComponentId, name: ComponentName, kind: WorkerKind, lcore_id: CoreId) -> Self {
        Self {
            id,
            name,
            kind,
            lcore_id,
            rx_ports: Vec::new(),
            tx_ports: Vec::new(),
            default_target: None,
        }
    }

    pub fn ports(&self, direction: PortDirection) -> &[PortRef] {
        match direction {
            PortDirection::Rx => &self.rx_ports,
            PortDirection::Tx => &self.tx_ports,
        }
    }

    pub fn ports_mut(&mut self, direction: PortDirection) -> &mut Vec<PortRef> {
        match direction {
            PortDirection::Rx => &mut self.rx_ports,
            PortDirection::Tx => &mut self.tx_ports,
        }
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
