// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container orchestration adapters
//!
//! The container orchestrator talks to the agent running inside provisioned
//! infrastructure: it checks the agent is reachable and asks it to create and
//! start the gitspace container with the selected IDE.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ContainerCall, FakeContainerOrchestrator};

use crate::ide::IdeService;
use crate::scm::ScmDetails;
use async_trait::async_trait;
use gs_core::{GitspaceConfig, Infrastructure};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from container operations
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("agent unreachable: {0}")]
    Unreachable(String),
    #[error("agent returned error: {0}")]
    AgentFailed(String),
    #[error("container start failed: {0}")]
    StartFailed(String),
}

/// Everything the agent needs to start a gitspace container
#[derive(Clone, Copy)]
pub struct StartRequest<'a> {
    pub config: &'a GitspaceConfig,
    pub infra: &'a Infrastructure,
    pub scm: &'a ScmDetails,
    /// Image used when the repository has no devcontainer definition
    pub default_base_image: &'a str,
    pub ide: &'a dyn IdeService,
}

/// Result of a successful create-and-start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    pub container_id: String,
    pub container_name: String,
    /// Repository location inside the container
    pub absolute_repo_path: String,
    /// Logical container port -> port published by the container runtime
    #[serde(default)]
    pub published_ports: HashMap<u16, String>,
}

/// Adapter over the in-environment agent
#[async_trait]
pub trait ContainerOrchestrator: Clone + Send + Sync + 'static {
    /// Liveness check against the agent on `infra`
    async fn status(&self, infra: &Infrastructure) -> Result<(), ContainerError>;

    /// Create (if needed) and start the gitspace container
    async fn create_and_start_gitspace(
        &self,
        request: StartRequest<'_>,
    ) -> Result<StartResponse, ContainerError>;
}
