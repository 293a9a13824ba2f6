use crate::prelude::*;
use gs_core::{AccessType, GitspaceEventType, IdeType, InstanceState};
use similar_asserts::assert_eq;
use std::time::Duration;

#[tokio::test]
async fn timeline_events_carry_gitspace_identity_and_time() {
    let mut world = World::new();
    world.clock.set_epoch_ms(1_750_000_000_000);
    let config = gitspace("tl-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();
    let timeline = world.timeline();

    let ids: Vec<_> = timeline.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["evt-1", "evt-2", "evt-3", "evt-4", "evt-5", "evt-6"]);
    for event in &timeline {
        assert_eq!(event.gitspace.as_str(), "tl-1");
        assert_eq!(event.instance.as_str(), "tl-1-inst");
        assert_eq!(event.space_path, TEST_SPACE_PATH);
        assert_eq!(event.timestamp_ms, 1_750_000_000_000);
    }
    assert_eq!(
        timeline.iter().filter(|e| e.event.is_failure()).count(),
        0
    );
}

#[tokio::test]
async fn timeline_json_uses_stage_outcome_names() {
    let mut world = World::new();
    let config = gitspace("tl-2", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();
    let first = world.timeline().remove(0);
    let json = serde_json::to_value(&first).unwrap();

    assert_eq!(json["type"].as_str(), Some("infra_provisioning:completed"));
    assert_eq!(json["gitspace"].as_str(), Some("tl-2"));
}

#[tokio::test]
async fn full_timeline_does_not_fail_start() {
    let mut world = World::with_timeline_capacity(1);
    let config = gitspace("tl-3", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    let instance = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();

    assert_eq!(instance.state, InstanceState::Running);
    assert_eq!(
        world.event_types(),
        vec![GitspaceEventType::InfraProvisioningCompleted]
    );
}

#[tokio::test]
async fn closed_timeline_does_not_fail_start() {
    let mut world = World::new();
    world.close_timeline();
    world.clock.advance(Duration::from_secs(60));
    let config = gitspace("tl-4", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    let instance = world
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap();

    assert_eq!(instance.state, InstanceState::Running);
    assert_eq!(instance.last_used, Some(1_060_000));
}
