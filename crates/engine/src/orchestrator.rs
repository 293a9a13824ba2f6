// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gitspace lifecycle orchestrator

use crate::config::OrchestratorConfig;
use crate::error::{LifecycleFailure, OrchestratorError};
use gs_adapters::{
    ContainerOrchestrator, EventEmitter, IdeRegistry, InfraOperation, InfraProvisioner,
    ScmClient, SecretResolverRegistry,
};
use gs_core::{
    Clock, GitspaceConfig, GitspaceEventType, GitspaceInstance, InfraStatus, Infrastructure,
    InstanceState,
};
use std::time::Instant;

/// Collaborators an [`Orchestrator`] drives
pub struct OrchestratorDeps<P, C, S, E> {
    pub infra: P,
    pub containers: C,
    pub scm: S,
    pub events: E,
    pub secrets: SecretResolverRegistry,
    pub ides: IdeRegistry,
}

/// Sequences the stages of each gitspace lifecycle operation.
///
/// Holds no per-gitspace state: concurrent operations on different gitspaces
/// are independent. Callers must not run two operations on the same gitspace
/// at once. Dropping an operation's future cancels it at the current stage.
pub struct Orchestrator<P, C, S, E, K: Clock> {
    pub(crate) infra: P,
    pub(crate) containers: C,
    pub(crate) scm: S,
    pub(crate) events: E,
    pub(crate) secrets: SecretResolverRegistry,
    pub(crate) ides: IdeRegistry,
    pub(crate) config: OrchestratorConfig,
    pub(crate) clock: K,
}

/// One infrastructure call with its acceptance rule and audit events
pub(crate) struct InfraStep {
    pub operation: InfraOperation,
    pub accepted: &'static [InfraStatus],
    pub completed: GitspaceEventType,
    pub failed: GitspaceEventType,
}

pub(crate) const PROVISION: InfraStep = InfraStep {
    operation: InfraOperation::Provision,
    accepted: &[InfraStatus::Provisioned],
    completed: GitspaceEventType::InfraProvisioningCompleted,
    failed: GitspaceEventType::InfraProvisioningFailed,
};

impl<P, C, S, E, K> Orchestrator<P, C, S, E, K>
where
    P: InfraProvisioner,
    C: ContainerOrchestrator,
    S: ScmClient,
    E: EventEmitter,
    K: Clock,
{
    pub fn new(deps: OrchestratorDeps<P, C, S, E>, config: OrchestratorConfig, clock: K) -> Self {
        Self {
            infra: deps.infra,
            containers: deps.containers,
            scm: deps.scm,
            events: deps.events,
            secrets: deps.secrets,
            ides: deps.ides,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Get a reference to the clock
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Record a lifecycle event. Failures are logged, never propagated.
    pub(crate) async fn emit(&self, config: &GitspaceConfig, event: GitspaceEventType) {
        if let Err(e) = self.events.emit(config, event).await {
            tracing::warn!(%event, error = %e, "event emit failed");
        }
    }

    /// Run an infrastructure step and check where it left the resource
    pub(crate) async fn run_infra(
        &self,
        step: &InfraStep,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<(), OrchestratorError> {
        let result = match step.operation {
            InfraOperation::Provision => self.infra.resume_provision(config, infra).await,
            InfraOperation::Stop => self.infra.resume_stop(config, infra).await,
            InfraOperation::Deprovision => self.infra.resume_deprovision(config, infra).await,
            InfraOperation::CleanupInstance => {
                self.infra.resume_cleanup_instance(config, infra).await
            }
        };

        if let Err(source) = result {
            self.emit(config, step.failed).await;
            return Err(OrchestratorError::InfraOperation {
                operation: step.operation,
                gitspace: config.identifier.clone(),
                resource: config.infra_provider_resource.uid.clone(),
                source,
            });
        }

        if !step.accepted.contains(&infra.status) {
            self.emit(config, step.failed).await;
            return Err(OrchestratorError::InfraStateMismatch {
                operation: step.operation,
                gitspace: config.identifier.clone(),
                resource: config.infra_provider_resource.uid.clone(),
                actual: infra.status,
                expected: step.accepted,
            });
        }

        self.emit(config, step.completed).await;
        Ok(())
    }

    /// Copy of the embedded instance, pessimistically marked `Error`
    pub(crate) fn begin(&self, config: &GitspaceConfig) -> (GitspaceInstance, Instant) {
        tracing::info!(state = %config.instance.state, "starting");
        let mut instance = config.instance.clone();
        instance.state = InstanceState::Error;
        (instance, self.clock.now())
    }

    /// Log the outcome of an operation and pair the instance with its error
    pub(crate) fn finish(
        &self,
        mut instance: GitspaceInstance,
        result: Result<(), OrchestratorError>,
        started: Instant,
    ) -> Result<GitspaceInstance, LifecycleFailure> {
        let elapsed_ms = self.clock.now().saturating_duration_since(started).as_millis() as u64;
        match result {
            Ok(()) => {
                tracing::info!(state = %instance.state, elapsed_ms, "completed");
                Ok(instance)
            }
            Err(error) => {
                instance.state = InstanceState::Error;
                tracing::error!(stage = %error.stage(), elapsed_ms, error = %error, "failed");
                Err(LifecycleFailure {
                    instance: Box::new(instance),
                    error,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests/mod.rs"]
mod tests;
