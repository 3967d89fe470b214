// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process arguments (§6): `--client-id`, `--vhost-client`, the
//! controller's IP and port, plus `--lcore-ids` (the supplemented
//! assigned-lcore-set flag, see `DESIGN.md`'s open-question decision).

use clap::Parser;
use thiserror::Error;

use psw_core::{CoreId, IdRangeError};

#[derive(Debug, Parser)]
#[command(name = "pswd", about = "Packet-switch worker control-plane daemon")]
pub struct Cli {
    /// Identifier this worker reports to the controller.
    #[arg(long)]
    pub client_id: u32,

    /// Attach vhost ports as the vhost-user client rather than server.
    #[arg(long)]
    pub vhost_client: bool,

    /// Comma-separated logical core ids this process owns (e.g. "2,3,4,5").
    /// Every other id in `[0, MAX_LCORE)` stays `unused` and can never host
    /// a component.
    #[arg(long, value_delimiter = ',')]
    pub lcore_ids: Vec<u16>,

    /// Controller's IP address.
    pub controller_ip: String,

    /// Controller's TCP port.
    pub controller_port: u16,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--lcore-ids entry out of range: {0}")]
    InvalidLcoreId(#[from] IdRangeError),
}

impl Cli {
    pub fn assigned_lcores(&self) -> Result<Vec<CoreId>, CliError> {
        self.lcore_ids
            .iter()
            .map(|&raw| CoreId::new(raw).map_err(CliError::InvalidLcoreId))
            .collect()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
