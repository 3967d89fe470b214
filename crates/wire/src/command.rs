// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text command line → typed [`Command`]. Purely syntactic: a `Command`
//! here is guaranteed well-formed, never that it is valid against current
//! state (that is the runner's job, in `psw-daemon`).

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use psw_core::{
    ComponentName, CoreId, MacAddr, PortDirection, PortKind, PortRef, WorkerKind,
    ETH_VLAN_ID_MAX, SPP_VLAN_PCP_MAX,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown verb {0:?}")]
    UnknownVerb(String),
    #[error("unknown action {0:?}")]
    UnknownAction(String),
    #[error("missing required field {0:?}")]
    MissingField(&'static str),
    #[error("malformed field {field:?}: {reason}")]
    MalformedField { field: &'static str, reason: String },
    #[error("malformed key=value token {0:?}")]
    MalformedToken(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClsAction {
    Add,
    Del,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClsKind {
    Mac,
    Vlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerAction {
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortAction {
    Add,
    Del,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRequest {
    pub op: psw_core::AbilityOp,
    pub direction: psw_core::AbilityDirection,
    pub vid: u16,
    pub pcp: u8,
    pub tci: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ClsTable {
        action: ClsAction,
        kind: ClsKind,
        vid: u16,
        mac: MacAddr,
        target: PortRef,
        /// `default=true`: register `target` as the classifier's
        /// catch-all route instead of a `(vid, mac)`-keyed entry
        /// (§3 of `SPEC_FULL.md`'s supplemented features, grounded on
        /// `cmd_utils.h`'s `SPPWK_TERM_DEFAULT`). Resolved against
        /// whichever classifier component already owns `target` as a
        /// tx-port, per invariant 3 — no separate component name is
        /// needed on the wire.
        is_default: bool,
    },
    Worker {
        action: WorkerAction,
        name: ComponentName,
        /// Only meaningful for `action == Start`; `stop` looks the
        /// component up by name alone.
        lcore_id: CoreId,
        /// Only meaningful for `action == Start`.
        kind: WorkerKind,
    },
    Port {
        action: PortAction,
        port_ref: PortRef,
        direction: PortDirection,
        component_name: ComponentName,
        ability: Option<AbilityRequest>,
    },
    Status,
    Exit,
}

fn tokenize(line: &str) -> Result<(Vec<&str>, HashMap<&str, &str>), ParseError> {
    let mut positional = Vec::new();
    let mut fields = HashMap::new();
    for token in line.split_whitespace() {
        match token.split_once('=') {
            Some((key, value)) => {
                fields.insert(key, value);
            }
            None => positional.push(token),
        }
    }
    if positional.is_empty() && fields.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok((positional, fields))
}

fn require<'a>(fields: &HashMap<&str, &'a str>, key: &'static str) -> Result<&'a str, ParseError> {
    fields.get(key).copied().ok_or(ParseError::MissingField(key))
}

fn parse_port_ref(text: &str) -> Result<PortRef, ParseError> {
    let (kind, index) = text
        .split_once(':')
        .ok_or_else(|| malformed("port", "expected kind:index"))?;
    let kind = PortKind::from_str(kind).map_err(|_| malformed("port", "unknown iface_kind"))?;
    let index: u16 = index
        .parse()
        .map_err(|_| malformed("port", "index is not a number"))?;
    Ok(PortRef::new(kind, index))
}

fn parse_vid(text: &str) -> Result<u16, ParseError> {
    let vid: u16 = text.parse().map_err(|_| malformed("vid", "not a number"))?;
    if vid > ETH_VLAN_ID_MAX - 1 {
        return Err(malformed("vid", "out of range [0, 4094]"));
    }
    Ok(vid)
}

fn parse_pcp(text: &str) -> Result<u8, ParseError> {
    let pcp: u8 = text.parse().map_err(|_| malformed("pcp", "not a number"))?;
    if pcp > SPP_VLAN_PCP_MAX {
        return Err(malformed("pcp", "out of range [0, 7]"));
    }
    Ok(pcp)
}

fn malformed(field: &'static str, reason: &str) -> ParseError {
    ParseError::MalformedField {
        field,
        reason: reason.to_string(),
    }
}

/// Parses one framed message body into a [`Command`].
#[allow(clippy::expect_used)]
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let (positional, fields) = tokenize(line)?;
    let verb = positional.first().ok_or(ParseError::Empty)?;
    let action_tok = positional.get(1).copied();

    match *verb {
        "classifier_table" => {
            let action = match action_tok {
                Some("add") => ClsAction::Add,
                Some("del") => ClsAction::Del,
                Some(other) => return Err(ParseError::UnknownAction(other.to_string())),
                None => return Err(ParseError::MissingField("action")),
            };
            let kind = match require(&fields, "type")? {
                "mac" => ClsKind::Mac,
                "vlan" => ClsKind::Vlan,
                _ => return Err(malformed("type", "expected mac|vlan")),
            };
            let vid = match fields.get("vid") {
                Some(text) => parse_vid(text)?,
                None => ETH_VLAN_ID_MAX,
            };
            let mac = match fields.get("mac") {
                Some(text) => MacAddr::parse(text).map_err(|_| malformed("mac", "expected XX:XX:XX:XX:XX:XX"))?,
                None => MacAddr::ZERO,
            };
            if kind == ClsKind::Mac && fields.get("mac").is_none() {
                return Err(ParseError::MissingField("mac"));
            }
            if kind == ClsKind::Vlan && fields.get("vid").is_none() {
                return Err(ParseError::MissingField("vid"));
            }
            let target = parse_port_ref(require(&fields, "port")?)?;
            let is_default = matches!(fields.get("default").copied(), Some("true") | Some("1"));
            Ok(Command::ClsTable { action, kind, vid, mac, target, is_default })
        }
        "component" => {
            let action = match action_tok {
                Some("start") => WorkerAction::Start,
                Some("stop") => WorkerAction::Stop,
                Some(other) => return Err(ParseError::UnknownAction(other.to_string())),
                None => return Err(ParseError::MissingField("action")),
            };
            let name = ComponentName::new(require(&fields, "name")?)
                .map_err(|e| malformed("name", &e.to_string()))?;
            let lcore_id = match action {
                WorkerAction::Start => {
                    let raw: u16 = require(&fields, "core")?
                        .parse()
                        .map_err(|_| malformed("core", "not a number"))?;
                    CoreId::new(raw).map_err(|e| malformed("core", &e.to_string()))?
                }
                WorkerAction::Stop => CoreId::new(0).expect("0 is always in range"),
            };
            let kind = match action {
                WorkerAction::Start => WorkerKind::from_str(require(&fields, "type")?)
                    .map_err(|_| malformed("type", "unknown worker kind"))?,
                WorkerAction::Stop => WorkerKind::Mirror,
            };
            Ok(Command::Worker { action, name, lcore_id, kind })
        }
        "port" => {
            let action = match action_tok {
                Some("add") => PortAction::Add,
                Some("del") => PortAction::Del,
                Some(other) => return Err(ParseError::UnknownAction(other.to_string())),
                None => return Err(ParseError::MissingField("action")),
            };
            let port_ref = parse_port_ref(require(&fields, "port")?)?;
            let direction = match require(&fields, "dir")? {
                "rx" => PortDirection::Rx,
                "tx" => PortDirection::Tx,
                _ => return Err(malformed("dir", "expected rx|tx")),
            };
            let component_name = ComponentName::new(require(&fields, "name")?)
                .map_err(|e| malformed("name", &e.to_string()))?;
            let ability = match fields.get("ability") {
                Some(op_text) => {
                    let op = match *op_text {
                        "add_vlan_tag" => psw_core::AbilityOp::AddVlanTag,
                        "del_vlan_tag" => psw_core::AbilityOp::DelVlanTag,
                        _ => return Err(malformed("ability", "expected add_vlan_tag|del_vlan_tag")),
                    };
                    let direction = match fields.get("ability_dir").copied().unwrap_or("both") {
                        "rx" => psw_core::AbilityDirection::Rx,
                        "tx" => psw_core::AbilityDirection::Tx,
                        "both" => psw_core::AbilityDirection::Both,
                        _ => return Err(malformed("ability_dir", "expected rx|tx|both")),
                    };
                    let vid = match fields.get("vid") {
                        Some(text) => parse_vid(text)?,
                        None => 0,
                    };
                    let pcp = match fields.get("pcp") {
                        Some(text) => parse_pcp(text)?,
                        None => 0,
                    };
                    let tci = match fields.get("tci") {
                        Some(text) => text.parse().map_err(|_| malformed("tci", "not a number"))?,
                        None => 0,
                    };
                    Some(AbilityRequest { op, direction, vid, pcp, tci })
                }
                None => None,
            };
            Ok(Command::Port { action, port_ref, direction, component_name, ability })
        }
        "status" => Ok(Command::Status),
        "exit" => Ok(Command::Exit),
        other => Err(ParseError::UnknownVerb(other.to_string())),
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
