// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal-driven shutdown (§4.6): `SIGTERM`/`SIGINT` request every
//! assigned core to stop, then the process waits (bounded) for all of
//! them to report `stopped` before exiting.

use thiserror::Error;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{sleep, Instant};

use psw_core::{CoreStatus, ProcessState};

use crate::env;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to install signal handler: {0}")]
    SignalInstall(#[source] std::io::Error),
}

/// Waits for `SIGTERM` or `SIGINT`. Takes no process state: the caller
/// races this against whatever future currently holds the exclusive
/// state borrow, then calls [`request_stop`] once that borrow has
/// ended.
pub async fn wait_for_shutdown_signal() -> Result<(), LifecycleError> {
    let mut sigterm = signal(SignalKind::terminate()).map_err(LifecycleError::SignalInstall)?;
    let mut sigint = signal(SignalKind::interrupt()).map_err(LifecycleError::SignalInstall)?;

    tokio::select! {
        _ = sigterm.recv() => tracing::info!("received SIGTERM"),
        _ = sigint.recv() => tracing::info!("received SIGINT"),
    }
    Ok(())
}

/// Sets every assigned core's status to `stop_requested`. Only touches
/// the atomic status word per core (§4.6: reentrancy-safe, no other
/// side effects here).
pub fn request_stop(state: &ProcessState) {
    for core in state.cores() {
        if core.status() != CoreStatus::Unused {
            core.set_status(CoreStatus::StopRequested);
        }
    }
}

/// Bounded wait for every assigned core to reach `stopped`. Returns
/// `true` if all cores drained in time, `false` if the timeout elapsed
/// first (the caller logs and exits regardless — there is no real
/// data-plane loop in this process to keep waiting for).
pub async fn await_drain(state: &ProcessState) -> bool {
    let deadline = Instant::now() + env::shutdown_drain_timeout();
    loop {
        let all_drained = state
            .cores()
            .iter()
            .all(|core| matches!(core.status(), CoreStatus::Unused | CoreStatus::Stopped));
        if all_drained {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        sleep(env::flush_retry_interval()).await;
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
