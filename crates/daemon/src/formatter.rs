// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON reply construction (§4.5): turns a runner [`Outcome`] or
//! [`StateError`] into the wire-facing [`Reply`], keyed by the command's
//! verb label.

use psw_core::StateError;
use psw_wire::Reply;

use crate::runner::Outcome;

/// Builds the success reply for a completed command. `status` elements
/// (if any) are already collected by the runner.
pub fn success(command_label: &'static str, outcome: &Outcome) -> Reply {
    match outcome {
        Outcome::Status(elements) => Reply::success_with_status(command_label, elements.clone()),
        Outcome::Mutated | Outcome::Exit => Reply::success(command_label),
    }
}

pub fn error(command_label: &'static str, err: &StateError) -> Reply {
    Reply::error(command_label, err.to_string())
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
