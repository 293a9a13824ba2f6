// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gitspace configuration and instance records.
//!
//! A [`GitspaceConfig`] is owned by configuration management and is read-only
//! for the duration of a lifecycle operation. Its embedded
//! [`GitspaceInstance`] is the mutable record: an operation copies it out,
//! advances it, and hands it back to the caller for persistence.

use crate::infra::ResourceId;
use serde::{Deserialize, Serialize};
use std::fmt;

crate::define_id! {
    /// Identifier of a gitspace configuration (stable across instances).
    pub struct GitspaceId;
}

crate::define_id! {
    /// Identifier of one gitspace instance (one start/stop cycle).
    pub struct InstanceId;
}

/// Lifecycle state of a gitspace instance.
///
/// Each lifecycle operation begins by assuming `Error` and only moves to its
/// own success state once every stage has succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceState {
    #[default]
    Uninitialized,
    Running,
    /// Terminal state of both stop and delete
    Deleted,
    Cleaned,
    Error,
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstanceState::Uninitialized => "uninitialized",
            InstanceState::Running => "running",
            InstanceState::Deleted => "deleted",
            InstanceState::Cleaned => "cleaned",
            InstanceState::Error => "error",
        };
        f.write_str(s)
    }
}

/// Mechanism used to reach a running gitspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    #[default]
    UserCredentials,
    JwtToken,
    SshKey,
    /// Any access type this build does not know about
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccessType::UserCredentials => "user_credentials",
            AccessType::JwtToken => "jwt_token",
            AccessType::SshKey => "ssh_key",
            AccessType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Editor configured for a gitspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeType {
    /// VS Code desktop over SSH remote
    VsCode,
    /// Browser-hosted VS Code
    VsCodeWeb,
    Intellij,
}

impl fmt::Display for IdeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdeType::VsCode => "vs_code",
            IdeType::VsCodeWeb => "vs_code_web",
            IdeType::Intellij => "intellij",
        };
        f.write_str(s)
    }
}

/// Owner of a gitspace as seen from inside the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitspaceUser {
    pub identifier: String,
}

/// Reference to the infrastructure provider resource backing a gitspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraProviderResource {
    pub uid: ResourceId,
}

/// The mutable lifecycle record for one gitspace instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitspaceInstance {
    pub identifier: InstanceId,
    pub state: InstanceState,
    pub access_type: AccessType,
    /// Reference to the stored access credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_ref: Option<String>,
    /// Resolved access credential
    #[serde(default, skip_serializing)]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_time_started: Option<u64>,
}

/// Description of a gitspace, read by the orchestrator for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitspaceConfig {
    pub id: i64,
    pub identifier: GitspaceId,
    /// Path of the owning space, e.g. `acct/org/project`
    pub space_path: String,
    pub ide: IdeType,
    pub user: GitspaceUser,
    pub infra_provider_resource: InfraProviderResource,
    pub instance: GitspaceInstance,
}

#[cfg(test)]
#[path = "gitspace_tests.rs"]
mod tests;
