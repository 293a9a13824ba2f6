// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure descriptor produced and mutated by the provisioning layer.
//!
//! The orchestrator only reads an [`Infrastructure`]; the provisioning adapter
//! updates its status as a side effect of each resume call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

crate::define_id! {
    /// UID of the infrastructure provider resource (machine type, region, ...).
    pub struct ResourceId;
}

/// Status of provisioned infrastructure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfraStatus {
    #[default]
    Unknown,
    Pending,
    Provisioned,
    Stopped,
    Destroyed,
    Error,
}

impl fmt::Display for InfraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InfraStatus::Unknown => "unknown",
            InfraStatus::Pending => "pending",
            InfraStatus::Provisioned => "provisioned",
            InfraStatus::Stopped => "stopped",
            InfraStatus::Destroyed => "destroyed",
            InfraStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Protocol spoken on a gitspace port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortProtocol {
    Http,
    Ssh,
}

/// A logical port used inside the gitspace container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GitspacePort {
    pub port: u16,
    pub protocol: PortProtocol,
}

/// Host-side exposure of one logical port.
///
/// A `published_port` of zero means the provider did not publish the port
/// itself and the container layer's mapping applies instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub published_port: u16,
    pub forwarded_port: u16,
}

/// Provisioned compute backing a gitspace instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub identifier: String,
    pub resource_uid: ResourceId,
    pub status: InfraStatus,
    /// URL scheme used to reach the gitspace, e.g. `https`
    pub gitspace_scheme: String,
    pub gitspace_host: String,
    /// When set, overrides `gitspace_host` in generated URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_gitspace_host: Option<String>,
    /// Logical container port -> host exposure
    #[serde(default)]
    pub gitspace_port_mappings: HashMap<u16, PortMapping>,
}

impl Infrastructure {
    /// Host to put in generated URLs: the proxy host wins when non-empty.
    pub fn effective_host(&self) -> &str {
        match self.proxy_gitspace_host.as_deref() {
            Some(proxy) if !proxy.is_empty() => proxy,
            _ => &self.gitspace_host,
        }
    }
}

#[cfg(test)]
#[path = "infra_tests.rs"]
mod tests;
