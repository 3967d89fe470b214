// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Port entities: the flat `(iface_kind, iface_index)`-keyed inventory.
//!
//! Ports are created at process init from the driver inventory and never
//! destroyed until process exit. Components reference them by [`PortRef`]
//! rather than by pointer, which is what lets [`crate::state::ProcessState`]
//! take a plain value-copy backup snapshot.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ids::{MacAddr, ETH_VLAN_ID_MAX, SPP_PORT_ABILITY_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PortKind {
    Phy,
    Vhost,
    Ring,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown port kind, expected phy|vhost|ring")]
pub struct PortKindError;

impl PortKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PortKind::Phy => "phy",
            PortKind::Vhost => "vhost",
            PortKind::Ring => "ring",
        }
    }
}

impl FromStr for PortKind {
    type Err = PortKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phy" => Ok(PortKind::Phy),
            "vhost" => Ok(PortKind::Vhost),
            "ring" => Ok(PortKind::Ring),
            _ => Err(PortKindError),
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(iface_kind, iface_index)` reference, the only way components point
/// at ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    pub kind: PortKind,
    pub index: u16,
}

impl PortRef {
    pub fn new(kind: PortKind, index: u16) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.index)
    }
}

/// Direction of a port reference held by a component (`rx` or `tx`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    Rx,
    Tx,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PortDirection::Rx => "rx",
            PortDirection::Tx => "tx",
        })
    }
}

/// Direction an ability applies to. Distinct from [`PortDirection`]: an
/// ability may apply to both directions at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityDirection {
    Rx,
    Tx,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityOp {
    AddVlanTag,
    DelVlanTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlanTag {
    pub vid: u16,
    pub pcp: u8,
    pub tci: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortAbility {
    pub op: AbilityOp,
    pub direction: AbilityDirection,
    pub tag: VlanTag,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AbilityError {
    #[error("no free ability slot on this port")]
    SlotsExhausted,
    #[error("duplicate ability for this (op, direction) pair")]
    Duplicate,
}

/// A bounded (≤ [`SPP_PORT_ABILITY_MAX`]) set of per-port abilities, at
/// most one per `(op, direction)` pair (invariant 6).
#[derive(Debug, Clone, Default)]
pub struct PortAbilities(Vec<PortAbility>);

impl PortAbilities {
    pub fn iter(&self) -> impl Iterator<Item = &PortAbility> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, ability: PortAbility) -> Result<(), AbilityError> {
        if self
            .0
            .iter()
            .any(|a| a.op == ability.op && a.direction == ability.direction)
        {
            return Err(AbilityError::Duplicate);
        }
        if self.0.len() >= SPP_PORT_ABILITY_MAX {
            return Err(AbilityError::SlotsExhausted);
        }
        self.0.push(ability);
        Ok(())
    }

    /// Drops abilities that apply to `direction`, used when a port
    /// reference in that direction is removed from a component.
    pub fn remove_matching_direction(&mut self, direction: AbilityDirection) {
        self.0.retain(|a| a.direction != direction);
    }
}

/// VLAN/MAC classifier attributes carried by a port. A port may hold
/// non-sentinel attributes only while it is the tx-port of exactly one
/// classifier component (invariant 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierAttrs {
    pub vid: u16,
    pub mac: MacAddr,
}

impl ClassifierAttrs {
    pub fn unclassified() -> Self {
        Self {
            vid: ETH_VLAN_ID_MAX,
            mac: MacAddr::ZERO,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        self.vid == ETH_VLAN_ID_MAX && self.mac.is_zero()
    }
}

impl Default for ClassifierAttrs {
    fn default() -> Self {
        Self::unclassified()
    }
}

#[derive(Debug, Clone)]
pub struct Port {
    pub port_ref: PortRef,
    pub driver_port_id: u16,
    pub classifier: ClassifierAttrs,
    pub abilities: PortAbilities,
}

impl Port {
    pub fn new(port_ref: PortRef, driver_port_id: u16) -> Self {
        Self {
            port_ref,
            driver_port_id,
            classifier: ClassifierAttrs::unclassified(),
            abilities: PortAbilities::default(),
        }
    }
}

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;
