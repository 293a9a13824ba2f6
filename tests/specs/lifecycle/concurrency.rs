use crate::prelude::*;
use gs_core::{AccessType, GitspaceEventType, IdeType, InstanceState};

#[tokio::test]
async fn concurrent_starts_on_different_gitspaces_are_independent() {
    let mut world = World::new();
    let first = gitspace("par-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let second = gitspace("par-2", IdeType::VsCode, AccessType::JwtToken);
    let mut first_infra = pending_infra();
    let mut second_infra = gs_core::test_support::infra(gs_core::InfraStatus::Pending);

    let (a, b) = tokio::join!(
        world.orchestrator.resume_start(&first, &mut first_infra),
        world.orchestrator.resume_start(&second, &mut second_infra),
    );

    assert_eq!(a.unwrap().state, InstanceState::Running);
    let b = b.unwrap();
    assert_eq!(b.state, InstanceState::Running);
    assert!(b
        .url
        .unwrap()
        .contains(&format!("10.0.0.5:{RUNTIME_SSH_PORT}")));
    assert_eq!(world.infra.calls().len(), 2);

    let timeline = world.timeline();
    for name in ["par-1", "par-2"] {
        let completed = timeline
            .iter()
            .filter(|e| e.gitspace == name)
            .filter(|e| e.event == GitspaceEventType::GitspaceActionStartCompleted)
            .count();
        assert_eq!(completed, 1, "{name} should complete exactly once");
    }
}

#[tokio::test]
async fn orchestrator_futures_are_send() {
    fn assert_send<T: Send>(_: &T) {}

    let world = World::new();
    let config = gitspace("send-1", IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut infra = pending_infra();

    let future = world.orchestrator.resume_start(&config, &mut infra);
    assert_send(&future);
    assert!(future.await.is_ok());
}
