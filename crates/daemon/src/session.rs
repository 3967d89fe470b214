// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controller session: long-lived, auto-reconnecting TCP channel driving
//! one command at a time through the parser, runner, and flusher.
//! Grounded on `command_conn.c`'s `spp_connect_to_controller` /
//! `spp_receive_message` / `spp_send_message` state machine.

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use psw_collab::Collaborator;
use psw_core::ProcessState;
use psw_wire::{parse_line, MessageReader};

use crate::{env, flusher, formatter, runner};

/// Why one connection attempt ended. The caller decides whether to
/// reconnect or stop based on this.
pub enum ConnectionOutcome {
    /// The controller sent `exit`; the whole process should shut down.
    Exit,
    /// The socket closed or a framing error occurred; reconnect.
    Disconnected,
}

/// Drives one accepted/connected socket until it closes or the controller
/// sends `exit`. Generic over the stream type so tests can exercise it
/// over an in-memory duplex instead of a real socket.
pub async fn drive_connection<S>(
    stream: S,
    state: &mut ProcessState,
    collaborator: &dyn Collaborator,
) -> ConnectionOutcome
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (read_half, mut write_half) = tokio::io::split(stream);
    let mut reader = MessageReader::new(read_half);

    loop {
        let message = match reader.read_message().await {
            Ok(message) => message,
            Err(err) => {
                tracing::info!("session closed: {err}");
                return ConnectionOutcome::Disconnected;
            }
        };

        let line = String::from_utf8_lossy(&message);
        tracing::debug!(line = %line, "received command");

        let mut exit_requested = false;
        let reply = match parse_line(&line) {
            Ok(command) => {
                let label = runner::command_label(&command);
                exit_requested = matches!(command, psw_wire::Command::Exit);
                match runner::execute(state, collaborator, command) {
                    Ok(outcome) => {
                        let flush_result = if matches!(outcome, runner::Outcome::Mutated) {
                            flusher::flush(state, collaborator).await
                        } else {
                            Ok(())
                        };
                        match flush_result {
                            Ok(()) => formatter::success(label, &outcome),
                            Err(err) => {
                                tracing::warn!("flush failed: {err}");
                                psw_wire::Reply::error(label, err.to_string())
                            }
                        }
                    }
                    Err(err) => formatter::error(label, &err),
                }
            }
            Err(err) => psw_wire::Reply::error("unknown", err.to_string()),
        };

        let body = match reply.to_json_bytes() {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("failed to encode reply: {err}");
                continue;
            }
        };
        if let Err(err) = psw_wire::write_message(&mut write_half, &body).await {
            tracing::info!("session closed while writing reply: {err}");
            return ConnectionOutcome::Disconnected;
        }

        if exit_requested {
            return ConnectionOutcome::Exit;
        }
    }
}

/// Reconnect loop: connects to the controller, drives the session until
/// it drops, then sleeps [`env::reconnect_interval`] and retries. Returns
/// once the controller sends `exit`, or the cancellation token fires.
pub async fn run(
    controller_ip: &str,
    controller_port: u16,
    state: &mut ProcessState,
    collaborator: &dyn Collaborator,
    shutdown: &CancellationToken,
) {
    loop {
        if shutdown.is_cancelled() {
            return;
        }

        tracing::info!(ip = controller_ip, port = controller_port, "connecting to controller");
        let stream = tokio::select! {
            result = TcpStream::connect((controller_ip, controller_port)) => result,
            _ = shutdown.cancelled() => return,
        };

        let stream = match stream {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!("connect failed: {err}");
                tokio::select! {
                    _ = sleep(env::reconnect_interval()) => continue,
                    _ = shutdown.cancelled() => return,
                }
            }
        };

        tracing::info!("connected");
        match drive_connection(stream, state, collaborator).await {
            ConnectionOutcome::Exit => return,
            ConnectionOutcome::Disconnected => {
                tokio::select! {
                    _ = sleep(env::reconnect_interval()) => {}
                    _ = shutdown.cancelled() => return,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
