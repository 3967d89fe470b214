// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply DTOs (§4.5): the JSON object written back over the session for
//! every command, plus the `status` command's structured payload.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    pub reason: String,
}

/// One element of a `status` reply: either a core with no live
/// components (`unuse`) or one per component currently assigned to that
/// core.
#[derive(Debug, Clone, Serialize)]
pub struct StatusElement {
    pub core: u16,
    #[serde(flatten)]
    pub body: StatusBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum StatusBody {
    #[serde(rename = "unuse")]
    Unuse,
    #[serde(rename = "classifier_mac")]
    Classifier {
        name: String,
        rx_ports: Vec<String>,
        tx_ports: Vec<String>,
        classifier_table: serde_json::Value,
    },
    #[serde(rename = "merge")]
    Merge {
        name: String,
        rx_ports: Vec<String>,
        tx_ports: Vec<String>,
        details: serde_json::Value,
    },
    #[serde(rename = "forward")]
    Forward {
        name: String,
        rx_ports: Vec<String>,
        tx_ports: Vec<String>,
        details: serde_json::Value,
    },
    #[serde(rename = "mirror")]
    Mirror {
        name: String,
        rx_ports: Vec<String>,
        tx_ports: Vec<String>,
        details: serde_json::Value,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result")]
pub enum Reply {
    #[serde(rename = "success")]
    Success {
        command: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<Vec<StatusElement>>,
    },
    #[serde(rename = "error")]
    Error {
        command: &'static str,
        error_details: ErrorDetails,
    },
}

impl Reply {
    pub fn success(command: &'static str) -> Self {
        Self::Success { command, status: None }
    }

    pub fn success_with_status(command: &'static str, status: Vec<StatusElement>) -> Self {
        Self::Success { command, status: Some(status) }
    }

    pub fn error(command: &'static str, reason: impl Into<String>) -> Self {
        Self::Error {
            command,
            error_details: ErrorDetails { reason: reason.into() },
        }
    }

    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
