// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.
//!
//! The session protocol (controller IP/port, client id, vhost-client) is a
//! process argument per §6 and lives in [`crate::cli::Cli`]; the knobs here
//! are the ones the wire format leaves as tunables (reconnect cadence,
//! flush acknowledgement timeout, shutdown drain timeout) per spec §9's
//! open questions.

use std::time::Duration;

/// Delay between reconnect attempts while the session is `Disconnected`.
pub fn reconnect_interval() -> Duration {
    std::env::var("PSWD_RECONNECT_INTERVAL_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(1000))
}

/// Number of bounded retries the flusher spends waiting for a core to
/// acknowledge an index flip.
pub fn flush_retry_max() -> u32 {
    std::env::var("PSWD_FLUSH_RETRY_MAX")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(5)
}

/// Spacing between flush acknowledgement polls.
pub fn flush_retry_interval() -> Duration {
    std::env::var("PSWD_FLUSH_RETRY_INTERVAL_US")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_micros)
        .unwrap_or(Duration::from_micros(10))
}

/// Bounded wait for all cores to reach `stopped` during shutdown.
pub fn shutdown_drain_timeout() -> Duration {
    std::env::var("PSWD_SHUTDOWN_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(5))
}
