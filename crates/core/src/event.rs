// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle events recorded for the gitspace timeline

use crate::gitspace::{GitspaceId, InstanceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed lifecycle transition.
///
/// Serializes as `"<stage>:<outcome>"`, e.g. `"infra_provisioning:failed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GitspaceEventType {
    // -- infra --
    #[serde(rename = "infra_provisioning:completed")]
    InfraProvisioningCompleted,
    #[serde(rename = "infra_provisioning:failed")]
    InfraProvisioningFailed,
    #[serde(rename = "infra_stop:completed")]
    InfraStopCompleted,
    #[serde(rename = "infra_stop:failed")]
    InfraStopFailed,
    #[serde(rename = "infra_deprovisioning:completed")]
    InfraDeprovisioningCompleted,
    #[serde(rename = "infra_deprovisioning:failed")]
    InfraDeprovisioningFailed,
    #[serde(rename = "infra_cleanup:completed")]
    InfraCleanupCompleted,
    #[serde(rename = "infra_cleanup:failed")]
    InfraCleanupFailed,

    // -- agent --
    #[serde(rename = "agent_connect:start")]
    AgentConnectStart,
    #[serde(rename = "agent_connect:completed")]
    AgentConnectCompleted,
    #[serde(rename = "agent_connect:failed")]
    AgentConnectFailed,
    #[serde(rename = "agent_gitspace_creation:start")]
    AgentGitspaceCreationStart,
    #[serde(rename = "agent_gitspace_creation:completed")]
    AgentGitspaceCreationCompleted,
    #[serde(rename = "agent_gitspace_creation:failed")]
    AgentGitspaceCreationFailed,

    // -- action --
    #[serde(rename = "gitspace_action_start:completed")]
    GitspaceActionStartCompleted,
    #[serde(rename = "gitspace_action_stop:completed")]
    GitspaceActionStopCompleted,
}

impl GitspaceEventType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InfraProvisioningCompleted => "infra_provisioning:completed",
            Self::InfraProvisioningFailed => "infra_provisioning:failed",
            Self::InfraStopCompleted => "infra_stop:completed",
            Self::InfraStopFailed => "infra_stop:failed",
            Self::InfraDeprovisioningCompleted => "infra_deprovisioning:completed",
            Self::InfraDeprovisioningFailed => "infra_deprovisioning:failed",
            Self::InfraCleanupCompleted => "infra_cleanup:completed",
            Self::InfraCleanupFailed => "infra_cleanup:failed",
            Self::AgentConnectStart => "agent_connect:start",
            Self::AgentConnectCompleted => "agent_connect:completed",
            Self::AgentConnectFailed => "agent_connect:failed",
            Self::AgentGitspaceCreationStart => "agent_gitspace_creation:start",
            Self::AgentGitspaceCreationCompleted => "agent_gitspace_creation:completed",
            Self::AgentGitspaceCreationFailed => "agent_gitspace_creation:failed",
            Self::GitspaceActionStartCompleted => "gitspace_action_start:completed",
            Self::GitspaceActionStopCompleted => "gitspace_action_stop:completed",
        }
    }

    /// True for the `*:failed` events shown as errors on the timeline
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::InfraProvisioningFailed
                | Self::InfraStopFailed
                | Self::InfraDeprovisioningFailed
                | Self::InfraCleanupFailed
                | Self::AgentConnectFailed
                | Self::AgentGitspaceCreationFailed
        )
    }
}

impl fmt::Display for GitspaceEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An emitted event as delivered to timeline consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitspaceEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event: GitspaceEventType,
    pub gitspace: GitspaceId,
    pub instance: InstanceId,
    pub space_path: String,
    pub timestamp_ms: u64,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
