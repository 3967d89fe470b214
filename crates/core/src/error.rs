// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic errors raised by state-model mutations.
//!
//! These are the errors the command runner (in `psw-daemon`) maps onto the
//! wire protocol's `error` replies; they carry no formatting concerns of
//! their own.

use thiserror::Error;

use crate::component::WorkerKindError;
use crate::ids::{ComponentName, CoreId, MacAddrError, NameError};
use crate::port::{AbilityError, PortDirection, PortKindError, PortRef};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("unknown port {0}")]
    UnknownPort(PortRef),
    #[error("unknown component name {0:?}")]
    UnknownComponentName(ComponentName),
    #[error("component name already in use: {0}")]
    NameInUse(ComponentName),
    #[error("core {0} is not unused")]
    CoreNotUnused(CoreId),
    #[error("no free component id available")]
    ComponentSpaceExhausted,
    #[error("port {0} already used")]
    PortAlreadyUsed(PortRef),
    #[error("classifier attributes on port {0} do not match")]
    ClassifierMismatch(PortRef),
    #[error("port {0} is not the tx-port of any classifier component")]
    NoClassifierOwner(PortRef),
    #[error("{direction} fan limit exceeded on component {name}")]
    FanLimitExceeded {
        direction: PortDirection,
        name: ComponentName,
    },
    #[error("port {port} is already a {direction} reference of component {name}")]
    DuplicatePortRef {
        port: PortRef,
        direction: PortDirection,
        name: ComponentName,
    },
    #[error(transparent)]
    Ability(#[from] AbilityError),
    #[error(transparent)]
    InvalidName(#[from] NameError),
    #[error(transparent)]
    InvalidMac(#[from] MacAddrError),
    #[error(transparent)]
    InvalidPortKind(#[from] PortKindError),
    #[error(transparent)]
    InvalidWorkerKind(#[from] WorkerKindError),
    #[error("invariant violated: {0}")]
    InvariantViolated(&'static str),
}
