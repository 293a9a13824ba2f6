use crate::prelude::*;
use gs_core::{AccessType, IdeType, InfraStatus, InstanceState};
use gs_engine::{OrchestratorError, Stage};
use similar_asserts::assert_eq;

#[tokio::test]
async fn web_gitspace_starts_on_runtime_published_port() {
    let mut world = World::new();
    let config = gitspace("web-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    let instance = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();

    assert_eq!(instance.state, InstanceState::Running);
    assert_eq!(
        instance.url.as_deref(),
        Some("https://10.0.0.5:30010/?folder=/home/harness/repo")
    );
    assert_eq!(instance.access_key.as_deref(), Some(PASSWORD));
    assert_eq!(infra.status, InfraStatus::Provisioned);
    assert_eq!(world.event_types(), START_EVENTS.to_vec());
}

#[tokio::test]
async fn desktop_gitspace_connects_through_proxy() {
    let mut world = World::new();
    let config = gitspace("desk-1", IdeType::VsCode, AccessType::JwtToken);
    let mut infra = gs_core::test_support::infra_with_mapping(
        InfraStatus::Pending,
        SSH_PORT,
        2222,
        443,
    );
    infra.proxy_gitspace_host = Some("gitspaces.example.com".to_string());

    let instance = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();

    assert_eq!(
        instance.url.as_deref(),
        Some("vscode-remote://ssh-remote+harness@gitspaces.example.com:443/home/harness/repo")
    );
    assert_eq!(instance.access_key.as_deref(), Some(JWT));
}

#[tokio::test]
async fn ssh_access_without_resolver_changes_nothing() {
    let mut world = World::new();
    let config = gitspace("ssh-1", IdeType::VsCodeWeb, AccessType::SshKey);
    let mut infra = pending_infra();

    let failure = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::ResolverNotFound { .. }
    ));
    assert_eq!(infra.status, InfraStatus::Pending);
    assert!(world.infra.calls().is_empty());
    assert!(world.timeline().is_empty());
}

#[tokio::test]
async fn secrets_are_scoped_to_the_root_space() {
    let mut world = World::new();
    let mut config = gitspace("other-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    config.space_path = "other-acct/org/project".to_string();
    let mut infra = pending_infra();

    let failure = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();

    assert_eq!(failure.stage(), Stage::SecretResolution);
    assert!(failure.to_string().contains("other-acct/gitspace-access-key"));
    assert!(world.timeline().is_empty());
}

#[tokio::test]
async fn failed_instance_serializes_without_access_key() {
    let mut world = World::new();
    world
        .infra
        .set_outcome(gs_adapters::InfraOperation::Provision, InfraStatus::Error);
    let config = gitspace("web-2", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    let failure = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();
    let (instance, error) = failure.into_parts();
    let record = serde_json::to_value(&instance).unwrap();

    assert_eq!(record["state"].as_str(), Some("error"));
    assert_eq!(record["identifier"].as_str(), Some("web-2-inst"));
    assert!(record.get("access_key").is_none());
    assert!(error
        .to_string()
        .contains("left resource res-test error, expected provisioned"));
    assert_eq!(
        world.event_types(),
        vec![gs_core::GitspaceEventType::InfraProvisioningFailed]
    );
}
