// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psw-core: the packet-switch worker's state model.
//!
//! Entities (port, component, core, process state), their invariants, and
//! the double-buffered publish primitive data-plane executors read
//! through. No dependency on any other crate in this workspace — the
//! runner, wire, and collaborator layers all build on top of this one.

pub mod component;
pub mod core_slot;
pub mod error;
pub mod ids;
pub mod port;
pub mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use component::{Component, WorkerKind, WorkerKindError};
pub use core_slot::{CoreSlot, CoreStatus};
pub use error::StateError;
pub use ids::{
    ComponentId, ComponentName, CoreId, IdRangeError, MacAddr, MacAddrError, NameError,
    ETH_VLAN_ID_MAX, MAX_LCORE, MAX_PORTS_PER_KIND, SPP_CHANGE_UPDATE_INTERVAL_US,
    SPP_CORE_STATUS_CHECK_MAX, SPP_PORT_ABILITY_MAX, SPP_VLAN_PCP_MAX, STR_LEN_NAME,
};
pub use port::{
    AbilityDirection, AbilityError, AbilityOp, ClassifierAttrs, Port, PortAbilities, PortAbility,
    PortDirection, PortKind, PortKindError, PortRef, VlanTag,
};
pub use state::{ProcessState, StartupParams};
