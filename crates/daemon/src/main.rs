// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pswd`: the packet-switch worker's control-plane binary. Parses
//! arguments, builds the initial process state, and drives the
//! controller session until shutdown.

use clap::Parser;
use tokio_util::sync::CancellationToken;

use psw_collab::{Collaborator, ComponentSnapshot};
use psw_core::{Port, PortKind, PortRef, ProcessState, StartupParams};
use psw_daemon::{lifecycle, session, Cli};

/// Ports attached at startup, one flag per `iface_kind`, mirroring
/// `cmd_utils.h`'s `nof_phys`/`nof_vhosts`/`nof_rings` counts. Real NIC
/// probing and vhost/ring PMD attachment are out of scope here; each
/// port's driver id is synthesized as its index within its kind.
#[derive(Debug, Parser)]
struct PortCounts {
    #[arg(long, default_value_t = 0)]
    nof_phy: u16,
    #[arg(long, default_value_t = 0)]
    nof_vhost: u16,
    #[arg(long, default_value_t = 0)]
    nof_ring: u16,
}

fn initial_ports(counts: &PortCounts) -> Vec<Port> {
    let mut ports = Vec::new();
    for (kind, count) in [
        (PortKind::Phy, counts.nof_phy),
        (PortKind::Vhost, counts.nof_vhost),
        (PortKind::Ring, counts.nof_ring),
    ] {
        for index in 0..count {
            ports.push(Port::new(PortRef::new(kind, index), index));
        }
    }
    ports
}

/// Stand-in collaborator for a process run without a real classifier or
/// forwarder packet-path implementation wired in. Every update succeeds
/// immediately since there is no lookup table here to regenerate; status
/// fragments report an empty table. A production deployment replaces this
/// with an implementation backed by the actual data-plane modules.
struct ExternalCollaborator;

impl Collaborator for ExternalCollaborator {
    fn update_classifier(&self, component: &ComponentSnapshot) -> Result<(), psw_collab::CollabError> {
        tracing::debug!(component = %component.name, "update_classifier (no-op collaborator)");
        Ok(())
    }

    fn update_forwarder(&self, component: &ComponentSnapshot) -> Result<(), psw_collab::CollabError> {
        tracing::debug!(component = %component.name, "update_forwarder (no-op collaborator)");
        Ok(())
    }

    fn init_classifier_info(&self, component_id: psw_core::ComponentId) {
        tracing::debug!(%component_id, "init_classifier_info (no-op collaborator)");
    }

    fn get_classifier_status(&self, _lcore: psw_core::CoreId, _component_id: psw_core::ComponentId) -> serde_json::Value {
        serde_json::json!({})
    }

    fn get_forwarder_status(&self, _lcore: psw_core::CoreId, _component_id: psw_core::ComponentId) -> serde_json::Value {
        serde_json::json!({})
    }
}

#[derive(Debug, Parser)]
#[command(name = "pswd")]
struct Args {
    #[command(flatten)]
    cli: Cli,
    #[command(flatten)]
    ports: PortCounts,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let assigned_lcores = match args.cli.assigned_lcores() {
        Ok(lcores) => lcores,
        Err(err) => {
            tracing::error!(%err, "invalid --lcore-ids");
            std::process::exit(1);
        }
    };

    let startup = StartupParams {
        client_id: args.cli.client_id,
        controller_ip: args.cli.controller_ip.clone(),
        controller_port: args.cli.controller_port,
        vhost_client: args.cli.vhost_client,
        secondary_type: "vf".to_string(),
    };
    let mut state = ProcessState::new(startup, initial_ports(&args.ports), &assigned_lcores);
    let collaborator = ExternalCollaborator;
    let shutdown = CancellationToken::new();

    // Races the signal wait against the session loop. Whichever finishes
    // first drops the other future, releasing `state`'s exclusive borrow
    // before `request_stop`/`await_drain` below need a shared one.
    tokio::select! {
        result = lifecycle::wait_for_shutdown_signal() => {
            if let Err(err) = result {
                tracing::error!(%err, "failed to install shutdown signal handler");
            }
        }
        () = session::run(
            &args.cli.controller_ip,
            args.cli.controller_port,
            &mut state,
            &collaborator,
            &shutdown,
        ) => {}
    }

    shutdown.cancel();
    lifecycle::request_stop(&state);
    if lifecycle::await_drain(&state).await {
        tracing::info!("all assigned cores drained, exiting");
    } else {
        tracing::warn!("shutdown drain timed out, exiting anyway");
    }
}
