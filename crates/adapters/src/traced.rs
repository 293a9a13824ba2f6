// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::container::{ContainerError, ContainerOrchestrator, StartRequest, StartResponse};
use crate::infra::{InfraError, InfraOperation, InfraProvisioner};
use crate::scm::{ScmClient, ScmDetails, ScmError};
use async_trait::async_trait;
use gs_core::{GitspaceConfig, Infrastructure};
use tracing::Instrument;

/// Wrapper that adds tracing to any InfraProvisioner
#[derive(Clone)]
pub struct TracedInfraProvisioner<P> {
    inner: P,
}

impl<P> TracedInfraProvisioner<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: InfraProvisioner> TracedInfraProvisioner<P> {
    async fn traced(
        &self,
        operation: InfraOperation,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        let span = tracing::info_span!(
            "infra.resume",
            %operation,
            gitspace = %config.identifier,
            resource = %config.infra_provider_resource.uid,
        );
        async {
            tracing::info!(status = %infra.status, "starting");
            let start = std::time::Instant::now();
            let result = match operation {
                InfraOperation::Provision => self.inner.resume_provision(config, infra).await,
                InfraOperation::Stop => self.inner.resume_stop(config, infra).await,
                InfraOperation::Deprovision => self.inner.resume_deprovision(config, infra).await,
                InfraOperation::CleanupInstance => {
                    self.inner.resume_cleanup_instance(config, infra).await
                }
            };
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(status = %infra.status, elapsed_ms, "completed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<P: InfraProvisioner> InfraProvisioner for TracedInfraProvisioner<P> {
    async fn resume_provision(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.traced(InfraOperation::Provision, config, infra).await
    }

    async fn resume_stop(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.traced(InfraOperation::Stop, config, infra).await
    }

    async fn resume_deprovision(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.traced(InfraOperation::Deprovision, config, infra).await
    }

    async fn resume_cleanup_instance(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), InfraError> {
        self.traced(InfraOperation::CleanupInstance, config, infra)
            .await
    }
}

/// Wrapper that adds tracing to any ContainerOrchestrator
#[derive(Clone)]
pub struct TracedContainerOrchestrator<C> {
    inner: C,
}

impl<C> TracedContainerOrchestrator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: ContainerOrchestrator> ContainerOrchestrator for TracedContainerOrchestrator<C> {
    async fn status(&self, infra: &Infrastructure) -> Result<(), ContainerError> {
        let result = self.inner.status(infra).await;
        tracing::info_span!("agent.status", infra = %infra.identifier).in_scope(|| match &result {
            Ok(()) => tracing::debug!("agent reachable"),
            Err(e) => tracing::warn!(error = %e, "agent unreachable"),
        });
        result
    }

    async fn create_and_start_gitspace(
        &self,
        request: StartRequest<'_>,
    ) -> Result<StartResponse, ContainerError> {
        let span = tracing::info_span!(
            "agent.create_and_start",
            gitspace = %request.config.identifier,
            ide = %request.ide.ide_type(),
        );
        async {
            tracing::info!(image = request.default_base_image, "starting");
            let start = std::time::Instant::now();
            let result = self.inner.create_and_start_gitspace(request).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(r) => tracing::info!(
                    container_id = r.container_id.as_str(),
                    elapsed_ms,
                    "container started"
                ),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "start failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any ScmClient
#[derive(Clone)]
pub struct TracedScmClient<S> {
    inner: S,
}

impl<S> TracedScmClient<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ScmClient> ScmClient for TracedScmClient<S> {
    async fn get_scm_repo_details(&self, config: &GitspaceConfig) -> Result<ScmDetails, ScmError> {
        let result = self.inner.get_scm_repo_details(config).await;
        tracing::info_span!("scm.repo_details", gitspace = %config.identifier).in_scope(|| {
            match &result {
                Ok(d) => tracing::debug!(repo = d.repo_name.as_str(), branch = d.branch.as_str(), "resolved"),
                Err(e) => tracing::error!(error = %e, "lookup failed"),
            }
        });
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
