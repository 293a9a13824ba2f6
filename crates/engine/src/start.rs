// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Starting (or resuming) a gitspace

use crate::access_url::access_url;
use crate::error::{LifecycleFailure, OrchestratorError};
use crate::orchestrator::{Orchestrator, PROVISION};
use gs_adapters::{
    ContainerOrchestrator, EventEmitter, InfraProvisioner, ResolutionContext, ScmClient,
    StartRequest,
};
use gs_core::{
    split_root, Clock, GitspaceConfig, GitspaceEventType, GitspaceInstance, Infrastructure,
    InstanceState,
};
use tracing::Instrument;

impl<P, C, S, E, K> Orchestrator<P, C, S, E, K>
where
    P: InfraProvisioner,
    C: ContainerOrchestrator,
    S: ScmClient,
    E: EventEmitter,
    K: Clock,
{
    /// Bring a gitspace up: provision infrastructure, start the container and
    /// build the IDE access URL.
    ///
    /// On success the returned instance is `Running` with its URL and usage
    /// timestamps set. Earlier stages are not rolled back when a later stage
    /// fails.
    pub async fn resume_start(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
    ) -> Result<GitspaceInstance, LifecycleFailure> {
        let span = tracing::info_span!(
            "gitspace.start",
            gitspace = %config.identifier,
            instance = %config.instance.identifier,
        );
        async {
            let (mut instance, started) = self.begin(config);
            let result = self.start_stages(config, infra, &mut instance).await;
            self.finish(instance, result, started)
        }
        .instrument(span)
        .await
    }

    async fn start_stages(
        &self,
        config: &GitspaceConfig,
        infra: &mut Infrastructure,
        instance: &mut GitspaceInstance,
    ) -> Result<(), OrchestratorError> {
        let gitspace = &config.identifier;

        // Secret resolution
        let resolver = self
            .secrets
            .for_access_type(instance.access_type)
            .map_err(|source| OrchestratorError::ResolverNotFound {
                gitspace: gitspace.clone(),
                source,
            })?;
        let (root_space, _) =
            split_root(&config.space_path).map_err(|source| OrchestratorError::InvalidSpacePath {
                gitspace: gitspace.clone(),
                space_path: config.space_path.clone(),
                source,
            })?;
        let secret_ref = instance
            .access_key_ref
            .clone()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| OrchestratorError::MissingAccessKeyRef {
                gitspace: gitspace.clone(),
                instance: instance.identifier.clone(),
            })?;
        let ctx = ResolutionContext {
            user_identifier: config.user.identifier.clone(),
            gitspace_identifier: gitspace.clone(),
            secret_ref,
            space_identifier: root_space.to_string(),
        };
        let secret = resolver.resolve(&ctx).await.map_err(|source| {
            OrchestratorError::SecretResolution {
                gitspace: gitspace.clone(),
                secret_type: resolver.secret_type(),
                source,
            }
        })?;
        tracing::debug!(?secret, "access key resolved");
        instance.access_key = Some(secret.into_value());

        // IDE selection
        let ide = self
            .ides
            .get(config.ide)
            .map_err(|source| OrchestratorError::UnsupportedIde {
                gitspace: gitspace.clone(),
                source,
            })?;
        let ide_port = ide.port();
        tracing::debug!(ide = %config.ide, port = ide_port.port, "ide selected");

        self.run_infra(&PROVISION, config, infra).await?;

        let scm = self.scm.get_scm_repo_details(config).await.map_err(|source| {
            OrchestratorError::ScmDetails {
                gitspace: gitspace.clone(),
                source,
            }
        })?;

        // Agent handshake
        self.emit(config, GitspaceEventType::AgentConnectStart).await;
        if let Err(source) = self.containers.status(infra).await {
            self.emit(config, GitspaceEventType::AgentConnectFailed).await;
            return Err(OrchestratorError::AgentUnreachable {
                gitspace: gitspace.clone(),
                infra: infra.identifier.clone(),
                source,
            });
        }
        self.emit(config, GitspaceEventType::AgentConnectCompleted).await;

        // Container creation; the container always runs as the gitspace user
        self.emit(config, GitspaceEventType::AgentGitspaceCreationStart).await;
        let mut start_config = config.clone();
        start_config.instance = instance.clone();
        start_config.user.identifier = self.config.gitspace_user.clone();
        let request = StartRequest {
            config: &start_config,
            infra: &*infra,
            scm: &scm,
            default_base_image: &self.config.default_base_image,
            ide: ide.as_ref(),
        };
        let response = match self.containers.create_and_start_gitspace(request).await {
            Ok(response) => response,
            Err(source) => {
                self.emit(config, GitspaceEventType::AgentGitspaceCreationFailed).await;
                return Err(OrchestratorError::ContainerStart {
                    gitspace: gitspace.clone(),
                    instance: instance.identifier.clone(),
                    source,
                });
            }
        };
        self.emit(config, GitspaceEventType::AgentGitspaceCreationCompleted).await;

        let url = access_url(infra, ide.as_ref(), &response, &self.config.gitspace_user)
            .map_err(|source| OrchestratorError::UrlGeneration {
                gitspace: gitspace.clone(),
                instance: instance.identifier.clone(),
                source,
            })?;

        let now = self.clock.epoch_ms();
        instance.url = Some(url.to_string());
        instance.last_used = Some(now);
        instance.active_time_started = Some(now);
        instance.state = InstanceState::Running;

        self.emit(config, GitspaceEventType::GitspaceActionStartCompleted).await;
        Ok(())
    }
}
