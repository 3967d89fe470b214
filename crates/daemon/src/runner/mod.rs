// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution engine: semantic validation against current state
//! plus staged mutation, one submodule per command verb. Grounded on
//! `vf_cmd_runner.c`'s `exec_one_cmd` dispatch.

pub mod cls_table;
pub mod port;
pub mod status;
pub mod worker;

use psw_collab::Collaborator;
use psw_core::{ProcessState, StateError};
use psw_wire::{Command, StatusElement};

/// What the session loop does after a command returns successfully:
/// whether a flush is owed, and (for `status`) the payload to reply with.
pub enum Outcome {
    Mutated,
    Status(Vec<StatusElement>),
    Exit,
}

/// Runs one parsed command against `state`. A syntactic `Command` is
/// already guaranteed well-formed (§4.2); this is where semantic
/// validation against current state happens (§4.3). Returning `Err`
/// leaves `state` exactly as it was before the call — every submodule
/// function only mutates after its validation has fully passed.
pub fn execute(
    state: &mut ProcessState,
    collaborator: &dyn Collaborator,
    command: Command,
) -> Result<Outcome, StateError> {
    match command {
        Command::ClsTable { action, kind, vid, mac, target, is_default } => {
            match action {
                psw_wire::ClsAction::Add => cls_table::add(state, kind, vid, mac, target, is_default)?,
                psw_wire::ClsAction::Del => cls_table::del(state, kind, vid, mac, target, is_default)?,
            }
            Ok(Outcome::Mutated)
        }
        Command::Worker { action, name, lcore_id, kind } => {
            match action {
                psw_wire::WorkerAction::Start => worker::start(state, name, lcore_id, kind)?,
                psw_wire::WorkerAction::Stop => worker::stop(state, name, collaborator)?,
            }
            Ok(Outcome::Mutated)
        }
        Command::Port { action, port_ref, direction, component_name, ability } => {
            match action {
                psw_wire::PortAction::Add => port::add(state, port_ref, direction, component_name, ability)?,
                psw_wire::PortAction::Del => port::del(state, port_ref, direction, component_name)?,
            }
            Ok(Outcome::Mutated)
        }
        Command::Status => Ok(Outcome::Status(status::collect(state, collaborator))),
        Command::Exit => Ok(Outcome::Exit),
    }
}

/// Wire verb label a [`Command`] carries in its reply, independent of
/// whether execution succeeded.
pub fn command_label(command: &Command) -> &'static str {
    match command {
        Command::ClsTable { .. } => "classifier_table",
        Command::Worker { .. } => "component",
        Command::Port { .. } => "port",
        Command::Status => "status",
        Command::Exit => "exit",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
