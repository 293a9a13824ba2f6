// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake container orchestrator for deterministic testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ContainerError, ContainerOrchestrator, StartRequest, StartResponse};
use async_trait::async_trait;
use gs_core::{GitspaceId, IdeType, Infrastructure};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded call to FakeContainerOrchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerCall {
    Status {
        infra: String,
    },
    CreateAndStart {
        gitspace: GitspaceId,
        user: String,
        clone_url: String,
        base_image: String,
        ide: IdeType,
        ide_port: u16,
    },
}

struct FakeContainerState {
    calls: Vec<ContainerCall>,
    response: StartResponse,
    status_error: Option<ContainerError>,
    start_error: Option<ContainerError>,
}

/// Fake container orchestrator with a configurable start response
#[derive(Clone)]
pub struct FakeContainerOrchestrator {
    inner: Arc<Mutex<FakeContainerState>>,
}

impl Default for FakeContainerOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeContainerOrchestrator {
    pub fn new() -> Self {
        Self::with_response(StartResponse {
            container_id: "ctr-1".to_string(),
            container_name: "gitspace-ctr-1".to_string(),
            absolute_repo_path: "/home/harness/repo".to_string(),
            published_ports: Default::default(),
        })
    }

    pub fn with_response(response: StartResponse) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeContainerState {
                calls: Vec::new(),
                response,
                status_error: None,
                start_error: None,
            })),
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ContainerCall> {
        self.inner.lock().calls.clone()
    }

    /// Set error to return on next liveness check
    pub fn set_status_error(&self, error: ContainerError) {
        self.inner.lock().status_error = Some(error);
    }

    /// Set error to return on next create-and-start
    pub fn set_start_error(&self, error: ContainerError) {
        self.inner.lock().start_error = Some(error);
    }
}

#[async_trait]
impl ContainerOrchestrator for FakeContainerOrchestrator {
    async fn status(&self, infra: &Infrastructure) -> Result<(), ContainerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ContainerCall::Status {
            infra: infra.identifier.clone(),
        });
        match inner.status_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn create_and_start_gitspace(
        &self,
        request: StartRequest<'_>,
    ) -> Result<StartResponse, ContainerError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ContainerCall::CreateAndStart {
            gitspace: request.config.identifier.clone(),
            user: request.config.user.identifier.clone(),
            clone_url: request.scm.clone_url.clone(),
            base_image: request.default_base_image.to_string(),
            ide: request.ide.ide_type(),
            ide_port: request.ide.port().port,
        });
        if let Some(error) = inner.start_error.take() {
            return Err(error);
        }
        Ok(inner.response.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
