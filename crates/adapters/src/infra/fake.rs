// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake infrastructure provisioner for deterministic testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{InfraError, InfraOperation, InfraProvisioner};
use async_trait::async_trait;
use gs_core::{GitspaceConfig, GitspaceId, InfraStatus, Infrastructure};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded call to FakeInfraProvisioner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraCall {
    pub operation: InfraOperation,
    pub gitspace: GitspaceId,
    /// Status of the descriptor when the call was made
    pub status_before: InfraStatus,
}

struct FakeInfraState {
    calls: Vec<InfraCall>,
    outcomes: HashMap<InfraOperation, InfraStatus>,
    errors: HashMap<InfraOperation, InfraError>,
}

/// Fake provisioner that moves infrastructure to a configurable status.
///
/// By default each operation lands in its natural status: provision ->
/// `Provisioned`, stop -> `Stopped`, deprovision and cleanup -> `Destroyed`.
#[derive(Clone)]
pub struct FakeInfraProvisioner {
    inner: Arc<Mutex<FakeInfraState>>,
}

impl Default for FakeInfraProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeInfraProvisioner {
    pub fn new() -> Self {
        let outcomes = HashMap::from([
            (InfraOperation::Provision, InfraStatus::Provisioned),
            (InfraOperation::Stop, InfraStatus::Stopped),
            (InfraOperation::Deprovision, InfraStatus::Destroyed),
            (InfraOperation::CleanupInstance, InfraStatus::Destroyed),
        ]);
        Self {
            inner: Arc::new(Mutex::new(FakeInfraState {
                calls: Vec::new(),
                outcomes,
                errors: HashMap::new(),
            })),
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<InfraCall> {
        self.inner.lock().calls.clone()
    }

    /// Status an operation leaves behind when it succeeds
    pub fn set_outcome(&self, operation: InfraOperation, status: InfraStatus) {
        self.inner.lock().outcomes.insert(operation, status);
    }

    /// Set error to return on the next call of `operation`
    pub fn set_error(&self, operation: InfraOperation, error: InfraError) {
        self.inner.lock().errors.insert(operation, error);
    }

    fn apply(
        &self,
        operation: InfraOperation,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        let mut inner = self.inner.lock();
        inner.calls.push(InfraCall {
            operation,
            gitspace: config.identifier.clone(),
            status_before: infra.status,
        });
        if let Some(error) = inner.errors.remove(&operation) {
            return Err(error);
        }
        if let Some(status) = inner.outcomes.get(&operation) {
            infra.status = *status;
        }
        Ok(())
    }
}

#[async_trait]
impl InfraProvisioner for FakeInfraProvisioner {
    async fn resume_provision(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.apply(InfraOperation::Provision, config, infra)
    }

    async fn resume_stop(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.apply(InfraOperation::Stop, config, infra)
    }

    async fn resume_deprovision(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.apply(InfraOperation::Deprovision, config, infra)
    }

    async fn resume_cleanup_instance(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.apply(InfraOperation::CleanupInstance, config, infra)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
