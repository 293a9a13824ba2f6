// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stopping, deleting and cleaning up a gitspace

use crate::error::{LifecycleFailure, OrchestratorError};
use crate::orchestrator::{InfraStep, Orchestrator};
use gs_adapters::{
    ContainerOrchestrator, EventEmitter, InfraOperation, InfraProvisioner, ScmClient,
};
use gs_core::{
    Clock, GitspaceConfig, GitspaceEventType, GitspaceInstance, InfraStatus, Infrastructure,
    InstanceState,
};
use tracing::Instrument;

/// A teardown operation: one infrastructure step and where the instance lands
struct Teardown {
    step: InfraStep,
    success: InstanceState,
    /// Whether success is announced as a completed stop action
    announce_stop: bool,
}

const STOP: Teardown = Teardown {
    step: InfraStep {
        operation: InfraOperation::Stop,
        accepted: &[InfraStatus::Destroyed, InfraStatus::Stopped],
        completed: GitspaceEventType::InfraStopCompleted,
        failed: GitspaceEventType::InfraStopFailed,
    },
    // Stopped gitspaces are recorded as deleted; restart goes through resume_start
    success: InstanceState::Deleted,
    announce_stop: true,
};

const DELETE: Teardown = Teardown {
    step: InfraStep {
        operation: InfraOperation::Deprovision,
        accepted: &[InfraStatus::Destroyed],
        completed: GitspaceEventType::InfraDeprovisioningCompleted,
        failed: GitspaceEventType::InfraDeprovisioningFailed,
    },
    success: InstanceState::Deleted,
    announce_stop: true,
};

const CLEANUP: Teardown = Teardown {
    step: InfraStep {
        operation: InfraOperation::CleanupInstance,
        accepted: &[InfraStatus::Destroyed, InfraStatus::Stopped],
        completed: GitspaceEventType::InfraCleanupCompleted,
        failed: GitspaceEventType::InfraCleanupFailed,
    },
    success: InstanceState::Cleaned,
    announce_stop: false,
};

impl<P, C, S, E, K> Orchestrator<P, C, S, E, K>
where
    P: InfraProvisioner,
    C: ContainerOrchestrator,
    S: ScmClient,
    E: EventEmitter,
    K: Clock,
{
    /// Finish stopping a gitspace's infrastructure.
    ///
    /// Accepts a resource left `Stopped` or `Destroyed`; the instance becomes
    /// `Deleted`.
    pub async fn resume_stop(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<GitspaceInstance, LifecycleFailure> {
        let span = tracing::info_span!(
            "gitspace.stop",
            gitspace = %config.identifier,
            instance = %config.instance.identifier,
        );
        self.teardown(&STOP, config, infra).instrument(span).await
    }

    /// Finish deprovisioning; only a `Destroyed` resource is accepted.
    pub async fn resume_delete(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<GitspaceInstance, LifecycleFailure> {
        let span = tracing::info_span!(
            "gitspace.delete",
            gitspace = %config.identifier,
            instance = %config.instance.identifier,
        );
        self.teardown(&DELETE, config, infra).instrument(span).await
    }

    /// Finish releasing per-instance resources; the instance becomes `Cleaned`.
    pub async fn resume_cleanup(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<GitspaceInstance, LifecycleFailure> {
        let span = tracing::info_span!(
            "gitspace.cleanup",
            gitspace = %config.identifier,
            instance = %config.instance.identifier,
        );
        self.teardown(&CLEANUP, config, infra).instrument(span).await
    }

    async fn teardown(
        &self,
        plan: &Teardown,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<GitspaceInstance, LifecycleFailure> {
        let (mut instance, started) = self.begin(config);
        let result = self.teardown_stages(plan, config, infra, &mut instance).await;
        self.finish(instance, result, started)
    }

    async fn teardown_stages(
        &self,
        plan: &Teardown,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
        instance: &mut GitspaceInstance,
    ) -> Result<(), OrchestratorError> {
        self.run_infra(&plan.step, config, infra).await?;
        instance.state = plan.success;
        if plan.announce_stop {
            self.emit(config, GitspaceEventType::GitspaceActionStopCompleted).await;
        }
        Ok(())
    }
}
