use crate::prelude::*;
use gs_adapters::InfraOperation;
use gs_core::{AccessType, GitspaceEventType, IdeType, InfraStatus, InstanceState};
use gs_engine::OrchestratorError;
use similar_asserts::assert_eq;

#[tokio::test]
async fn start_stop_cleanup_round_trip() {
    let mut world = World::new();
    let mut config = gitspace("cycle-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    config.instance = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();
    assert_eq!(config.instance.state, InstanceState::Running);

    config.instance = world
        .orchestrator
        .resume_stop(&config, &mut infra)
        .await
        .unwrap();
    assert_eq!(config.instance.state, InstanceState::Deleted);
    assert_eq!(infra.status, InfraStatus::Stopped);

    config.instance = world
        .orchestrator
        .resume_cleanup(&config, &mut infra)
        .await
        .unwrap();
    assert_eq!(config.instance.state, InstanceState::Cleaned);
    // Teardown keeps the URL and usage times from the last start
    assert!(config.instance.url.is_some());

    let mut expected = START_EVENTS.to_vec();
    expected.extend([
        GitspaceEventType::InfraStopCompleted,
        GitspaceEventType::GitspaceActionStopCompleted,
        GitspaceEventType::InfraCleanupCompleted,
    ]);
    assert_eq!(world.event_types(), expected);
}

#[tokio::test]
async fn delete_requires_destroyed_infrastructure() {
    let mut world = World::new();
    world
        .infra
        .set_outcome(InfraOperation::Deprovision, InfraStatus::Stopped);
    let config = gitspace("del-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();
    infra.status = InfraStatus::Provisioned;

    let failure = world
        .orchestrator
        .resume_delete(&config, &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::InfraStateMismatch {
            actual: InfraStatus::Stopped,
            ..
        }
    ));
    assert!(failure.to_string().contains("expected destroyed"));
    assert_eq!(failure.instance.state, InstanceState::Error);
    assert_eq!(
        world.event_types(),
        vec![GitspaceEventType::InfraDeprovisioningFailed]
    );
}

#[tokio::test]
async fn delete_of_destroyed_infrastructure_announces_stop() {
    let mut world = World::new();
    let config = gitspace("del-2", IdeType::VsCode, AccessType::UserCredentials);
    let mut infra = pending_infra();

    let instance = world
        .orchestrator
        .resume_delete(&config, &mut infra)
        .await
        .unwrap();

    assert_eq!(instance.state, InstanceState::Deleted);
    assert_eq!(
        world.event_types(),
        vec![
            GitspaceEventType::InfraDeprovisioningCompleted,
            GitspaceEventType::GitspaceActionStopCompleted,
        ]
    );
    assert!(world.containers.calls().is_empty());
}
