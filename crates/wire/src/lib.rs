// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psw-wire: the controller session's text/JSON wire format.
//!
//! Parses incoming command lines into [`command::Command`], serializes
//! [`response::Reply`] back out, and frames both directions on the
//! NUL-delimited transport in [`framing`]. Builds on `psw-core` for the
//! domain types commands and replies carry; has no knowledge of process
//! state itself.

pub mod command;
pub mod framing;
pub mod response;

pub use command::{
    AbilityRequest, ClsAction, ClsKind, Command, ParseError, PortAction, WorkerAction, parse_line,
};
pub use framing::{FramingError, MessageReader, MAX_MESSAGE_BYTES, READ_BLOCK_SIZE, write_message};
pub use response::{ErrorDetails, Reply, StatusBody, StatusElement};
