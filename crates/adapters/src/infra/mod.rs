// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure provisioning adapters
//!
//! Each resume call finishes an operation the provider started earlier
//! (provision, stop, deprovision, cleanup) and records the resulting status on
//! the [`Infrastructure`] it was handed. Callers read `infra.status` after the
//! call returns to learn where the resource ended up.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeInfraProvisioner, InfraCall};

use async_trait::async_trait;
use gs_core::{GitspaceConfig, Infrastructure};
use std::fmt;
use thiserror::Error;

/// Errors from infrastructure operations
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("provider error: {0}")]
    Provider(String),
}

/// The four resumable infrastructure operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraOperation {
    Provision,
    Stop,
    Deprovision,
    CleanupInstance,
}

impl fmt::Display for InfraOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InfraOperation::Provision => "provision",
            InfraOperation::Stop => "stop",
            InfraOperation::Deprovision => "deprovision",
            InfraOperation::CleanupInstance => "cleanup",
        };
        f.write_str(s)
    }
}

/// Adapter over the infrastructure provider backing gitspaces
#[async_trait]
pub trait InfraProvisioner: Clone + Send + Sync + 'static {
    /// Finish provisioning; success leaves `infra.status` at `Provisioned`
    async fn resume_provision(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError>;

    /// Finish stopping the resource
    async fn resume_stop(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError>;

    /// Finish tearing the resource down
    async fn resume_deprovision(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError>;

    /// Finish releasing per-instance resources
    async fn resume_cleanup_instance(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError>;
}
