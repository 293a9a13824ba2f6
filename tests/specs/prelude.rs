//! Test helpers for lifecycle specifications.
//!
//! A [`World`] is an orchestrator wired to traced fakes, an in-memory secret
//! store and a channel-backed event timeline.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use gs_adapters::{
    ChannelEventEmitter, FakeContainerOrchestrator, FakeInfraProvisioner, FakeScmClient,
    IdeRegistry, SecretResolverRegistry, SecretType, StartResponse, StaticSecretResolver,
    TracedContainerOrchestrator, TracedInfraProvisioner, TracedScmClient,
};
use gs_core::test_support::{gitspace_config, infra_with_mapping, TEST_ACCESS_KEY_REF};
use gs_core::{
    AccessType, FakeClock, GitspaceConfig, GitspaceEvent, GitspaceEventType, GitspaceId,
    IdeType, InfraStatus, Infrastructure, InstanceId, SequentialIdGen,
};
use gs_engine::{Orchestrator, OrchestratorConfig, OrchestratorDeps};
use std::collections::HashMap;
use tokio::sync::mpsc;

pub use gs_core::test_support::TEST_SPACE_PATH;

pub const PASSWORD: &str = "hunter2";
pub const JWT: &str = "eyJhbGciOiJIUzI1NiJ9";
pub const WEB_PORT: u16 = 8089;
pub const SSH_PORT: u16 = 8088;
pub const RUNTIME_WEB_PORT: &str = "30010";
pub const RUNTIME_SSH_PORT: &str = "30022";

pub type SpecOrchestrator = Orchestrator<
    TracedInfraProvisioner<FakeInfraProvisioner>,
    TracedContainerOrchestrator<FakeContainerOrchestrator>,
    TracedScmClient<FakeScmClient>,
    ChannelEventEmitter<FakeClock, SequentialIdGen>,
    FakeClock,
>;

pub struct World {
    pub orchestrator: SpecOrchestrator,
    pub infra: FakeInfraProvisioner,
    pub containers: FakeContainerOrchestrator,
    pub scm: FakeScmClient,
    pub clock: FakeClock,
    timeline: Option<mpsc::Receiver<GitspaceEvent>>,
}

impl World {
    pub fn new() -> Self {
        Self::with_timeline_capacity(64)
    }

    /// Password and JWT secrets live in the root space of [`TEST_SPACE_PATH`].
    /// No SSH resolver is registered.
    pub fn with_timeline_capacity(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        let clock = FakeClock::new();
        let infra = FakeInfraProvisioner::new();
        let containers = FakeContainerOrchestrator::with_response(StartResponse {
            container_id: "ctr-7".to_string(),
            container_name: "gitspace-ctr-7".to_string(),
            absolute_repo_path: "/home/harness/repo".to_string(),
            published_ports: HashMap::from([
                (WEB_PORT, RUNTIME_WEB_PORT.to_string()),
                (SSH_PORT, RUNTIME_SSH_PORT.to_string()),
            ]),
        });
        let scm = FakeScmClient::new();

        let secrets = SecretResolverRegistry::new()
            .with(StaticSecretResolver::new(SecretType::Password).with_secret(
                "acct",
                TEST_ACCESS_KEY_REF,
                PASSWORD,
            ))
            .with(StaticSecretResolver::new(SecretType::Jwt).with_secret(
                "acct",
                TEST_ACCESS_KEY_REF,
                JWT,
            ));

        let orchestrator = Orchestrator::new(
            OrchestratorDeps {
                infra: TracedInfraProvisioner::new(infra.clone()),
                containers: TracedContainerOrchestrator::new(containers.clone()),
                scm: TracedScmClient::new(scm.clone()),
                events: ChannelEventEmitter::new(tx, clock.clone(), SequentialIdGen::default()),
                secrets,
                ides: IdeRegistry::with_defaults(),
            },
            OrchestratorConfig::default(),
            clock.clone(),
        );

        Self {
            orchestrator,
            infra,
            containers,
            scm,
            clock,
            timeline: Some(rx),
        }
    }

    /// Drain everything emitted so far
    pub fn timeline(&mut self) -> Vec<GitspaceEvent> {
        let mut events = Vec::new();
        if let Some(rx) = self.timeline.as_mut() {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }
        events
    }

    pub fn event_types(&mut self) -> Vec<GitspaceEventType> {
        self.timeline().into_iter().map(|e| e.event).collect()
    }

    /// Drop the receiving end so further emits hit a closed channel
    pub fn close_timeline(&mut self) {
        self.timeline = None;
    }
}

/// A gitspace in the test space with its own identifiers
pub fn gitspace(name: &str, ide: IdeType, access_type: AccessType) -> GitspaceConfig {
    let mut config = gitspace_config(ide, access_type);
    config.identifier = GitspaceId::new(name);
    config.instance.identifier = InstanceId::new(format!("{name}-inst"));
    config
}

/// Infrastructure that leaves the web IDE port to the container runtime
pub fn pending_infra() -> Infrastructure {
    infra_with_mapping(InfraStatus::Pending, WEB_PORT, 0, 0)
}

pub const START_EVENTS: [GitspaceEventType; 6] = [
    GitspaceEventType::InfraProvisioningCompleted,
    GitspaceEventType::AgentConnectStart,
    GitspaceEventType::AgentConnectCompleted,
    GitspaceEventType::AgentGitspaceCreationStart,
    GitspaceEventType::AgentGitspaceCreationCompleted,
    GitspaceEventType::GitspaceActionStartCompleted,
];
