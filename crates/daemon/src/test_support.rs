// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for runner/flusher/formatter unit tests.

use psw_core::{CoreId, Port, PortKind, PortRef, ProcessState, StartupParams};

pub fn startup() -> StartupParams {
    StartupParams {
        client_id: 1,
        controller_ip: "127.0.0.1".to_string(),
        controller_port: 6666,
        vhost_client: false,
        secondary_type: "vf".to_string(),
    }
}

/// Ports `phy:0`, `vhost:0..=2`, `ring:0..=1`; lcores 2..=5 assigned `idle`.
pub fn fresh_state() -> ProcessState {
    let ports = vec![
        Port::new(PortRef::new(PortKind::Phy, 0), 0),
        Port::new(PortRef::new(PortKind::Vhost, 0), 10),
        Port::new(PortRef::new(PortKind::Vhost, 1), 11),
        Port::new(PortRef::new(PortKind::Vhost, 2), 12),
        Port::new(PortRef::new(PortKind::Ring, 0), 20),
        Port::new(PortRef::new(PortKind::Ring, 1), 21),
    ];
    let lcores = [2u16, 3, 4, 5].map(|raw| CoreId::new(raw).expect("in range"));
    ProcessState::new(startup(), ports, &lcores)
}
