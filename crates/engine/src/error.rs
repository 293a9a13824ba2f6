// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gitspace lifecycle operations

use crate::access_url::AccessUrlError;
use gs_adapters::{
    ContainerError, InfraError, InfraOperation, ResolverNotFound, ScmError, SecretError,
    SecretType, UnsupportedIde,
};
use gs_core::{GitspaceId, GitspaceInstance, InfraStatus, InstanceId, ResourceId, SpacePathError};
use std::fmt;
use thiserror::Error;

/// Lifecycle stage at which an operation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    SecretResolution,
    IdeSelection,
    InfraProvisioning,
    InfraStop,
    InfraDeprovisioning,
    InfraCleanup,
    ScmDetails,
    AgentConnect,
    GitspaceCreation,
    UrlGeneration,
}

impl Stage {
    /// The stage driving an infrastructure operation
    pub fn for_infra(operation: InfraOperation) -> Self {
        match operation {
            InfraOperation::Provision => Stage::InfraProvisioning,
            InfraOperation::Stop => Stage::InfraStop,
            InfraOperation::Deprovision => Stage::InfraDeprovisioning,
            InfraOperation::CleanupInstance => Stage::InfraCleanup,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::SecretResolution => "secret_resolution",
            Stage::IdeSelection => "ide_selection",
            Stage::InfraProvisioning => "infra_provisioning",
            Stage::InfraStop => "infra_stop",
            Stage::InfraDeprovisioning => "infra_deprovisioning",
            Stage::InfraCleanup => "infra_cleanup",
            Stage::ScmDetails => "scm_details",
            Stage::AgentConnect => "agent_connect",
            Stage::GitspaceCreation => "gitspace_creation",
            Stage::UrlGeneration => "url_generation",
        };
        f.write_str(s)
    }
}

/// Errors that abort a lifecycle operation
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("gitspace {gitspace}: {source}")]
    ResolverNotFound {
        gitspace: GitspaceId,
        #[source]
        source: ResolverNotFound,
    },
    #[error("gitspace {gitspace}: invalid space path {space_path:?}: {source}")]
    InvalidSpacePath {
        gitspace: GitspaceId,
        space_path: String,
        #[source]
        source: SpacePathError,
    },
    #[error("gitspace {gitspace}: instance {instance} has no access key reference")]
    MissingAccessKeyRef {
        gitspace: GitspaceId,
        instance: InstanceId,
    },
    #[error("gitspace {gitspace}: failed to resolve {secret_type} secret: {source}")]
    SecretResolution {
        gitspace: GitspaceId,
        secret_type: SecretType,
        #[source]
        source: SecretError,
    },
    #[error("gitspace {gitspace}: {source}")]
    UnsupportedIde {
        gitspace: GitspaceId,
        #[source]
        source: UnsupportedIde,
    },
    #[error("gitspace {gitspace}: infra {operation} failed for resource {resource}: {source}")]
    InfraOperation {
        operation: InfraOperation,
        gitspace: GitspaceId,
        resource: ResourceId,
        #[source]
        source: InfraError,
    },
    #[error(
        "gitspace {gitspace}: infra {operation} left resource {resource} {actual}, expected {}",
        join_statuses(.expected)
    )]
    InfraStateMismatch {
        operation: InfraOperation,
        gitspace: GitspaceId,
        resource: ResourceId,
        actual: InfraStatus,
        expected: &'static [InfraStatus],
    },
    #[error("gitspace {gitspace}: failed to fetch repository details: {source}")]
    ScmDetails {
        gitspace: GitspaceId,
        #[source]
        source: ScmError,
    },
    #[error("gitspace {gitspace}: agent on {infra} unreachable: {source}")]
    AgentUnreachable {
        gitspace: GitspaceId,
        infra: String,
        #[source]
        source: ContainerError,
    },
    #[error("gitspace {gitspace}: failed to start instance {instance}: {source}")]
    ContainerStart {
        gitspace: GitspaceId,
        instance: InstanceId,
        #[source]
        source: ContainerError,
    },
    #[error("gitspace {gitspace}: failed to build access url for {instance}: {source}")]
    UrlGeneration {
        gitspace: GitspaceId,
        instance: InstanceId,
        #[source]
        source: AccessUrlError,
    },
}

impl OrchestratorError {
    pub fn stage(&self) -> Stage {
        match self {
            OrchestratorError::ResolverNotFound { .. }
            | OrchestratorError::InvalidSpacePath { .. }
            | OrchestratorError::MissingAccessKeyRef { .. }
            | OrchestratorError::SecretResolution { .. } => Stage::SecretResolution,
            OrchestratorError::UnsupportedIde { .. } => Stage::IdeSelection,
            OrchestratorError::InfraOperation { operation, .. }
            | OrchestratorError::InfraStateMismatch { operation, .. } => {
                Stage::for_infra(*operation)
            }
            OrchestratorError::ScmDetails { .. } => Stage::ScmDetails,
            OrchestratorError::AgentUnreachable { .. } => Stage::AgentConnect,
            OrchestratorError::ContainerStart { .. } => Stage::GitspaceCreation,
            OrchestratorError::UrlGeneration { .. } => Stage::UrlGeneration,
        }
    }

    pub fn gitspace(&self) -> &GitspaceId {
        match self {
            OrchestratorError::ResolverNotFound { gitspace, .. }
            | OrchestratorError::InvalidSpacePath { gitspace, .. }
            | OrchestratorError::MissingAccessKeyRef { gitspace, .. }
            | OrchestratorError::SecretResolution { gitspace, .. }
            | OrchestratorError::UnsupportedIde { gitspace, .. }
            | OrchestratorError::InfraOperation { gitspace, .. }
            | OrchestratorError::InfraStateMismatch { gitspace, .. }
            | OrchestratorError::ScmDetails { gitspace, .. }
            | OrchestratorError::AgentUnreachable { gitspace, .. }
            | OrchestratorError::ContainerStart { gitspace, .. }
            | OrchestratorError::UrlGeneration { gitspace, .. } => gitspace,
        }
    }
}

fn join_statuses(statuses: &[InfraStatus]) -> String {
    statuses
        .iter()
        .map(InfraStatus::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// A failed lifecycle operation.
///
/// Carries the instance record in state `Error` so the caller can persist it
/// alongside the failure.
#[derive(Debug, Error)]
#[error("{} failed: {error}", .error.stage())]
pub struct LifecycleFailure {
    pub instance: Box<GitspaceInstance>,
    #[source]
    pub error: OrchestratorError,
}

impl LifecycleFailure {
    pub fn stage(&self) -> Stage {
        self.error.stage()
    }

    pub fn into_parts(self) -> (GitspaceInstance, OrchestratorError) {
        (*self.instance, self.error)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
