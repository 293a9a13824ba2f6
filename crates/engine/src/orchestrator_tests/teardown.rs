// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::error::Stage;
use gs_adapters::{InfraError, InfraOperation};
use gs_core::InstanceState;
use yare::parameterized;

#[derive(Debug, Clone, Copy)]
enum Op {
    Stop,
    Delete,
    Cleanup,
}

impl Op {
    fn infra_operation(self) -> InfraOperation {
        match self {
            Op::Stop => InfraOperation::Stop,
            Op::Delete => InfraOperation::Deprovision,
            Op::Cleanup => InfraOperation::CleanupInstance,
        }
    }
}

fn run(
    h: &TestHarness,
    op: Op,
    infra: &mut Infrastructure,
) -> Result<GitspaceInstance, LifecycleFailure> {
    let config = web_gitspace();
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async {
            match op {
                Op::Stop => h.orchestrator.resume_stop(&config, infra).await,
                Op::Delete => h.orchestrator.resume_delete(&config, infra).await,
                Op::Cleanup => h.orchestrator.resume_cleanup(&config, infra).await,
            }
        })
}

#[parameterized(
    stop_stopped = { Op::Stop, InfraStatus::Stopped, InstanceState::Deleted },
    stop_destroyed = { Op::Stop, InfraStatus::Destroyed, InstanceState::Deleted },
    delete_destroyed = { Op::Delete, InfraStatus::Destroyed, InstanceState::Deleted },
    cleanup_stopped = { Op::Cleanup, InfraStatus::Stopped, InstanceState::Cleaned },
    cleanup_destroyed = { Op::Cleanup, InfraStatus::Destroyed, InstanceState::Cleaned },
)]
fn teardown_accepts_terminal_status(op: Op, outcome: InfraStatus, state: InstanceState) {
    let h = setup();
    h.infra.set_outcome(op.infra_operation(), outcome);
    let mut infra = forwarded_infra(InfraStatus::Provisioned);

    let instance = run(&h, op, &mut infra).unwrap();

    assert_eq!(instance.state, state);
    assert_eq!(infra.status, outcome);
}

#[parameterized(
    stop = { Op::Stop, InfraStatus::Pending, GitspaceEventType::InfraStopFailed },
    delete_stopped = { Op::Delete, InfraStatus::Stopped, GitspaceEventType::InfraDeprovisioningFailed },
    cleanup = { Op::Cleanup, InfraStatus::Error, GitspaceEventType::InfraCleanupFailed },
)]
fn teardown_rejects_unexpected_status(op: Op, outcome: InfraStatus, failed: GitspaceEventType) {
    let h = setup();
    h.infra.set_outcome(op.infra_operation(), outcome);
    let mut infra = forwarded_infra(InfraStatus::Provisioned);

    let failure = run(&h, op, &mut infra).unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::InfraStateMismatch { actual, .. } if actual == outcome
    ));
    assert_eq!(failure.instance.state, InstanceState::Error);
    assert_eq!(h.events.events(), vec![failed]);
}

#[parameterized(
    stop = { Op::Stop, GitspaceEventType::InfraStopFailed, Stage::InfraStop },
    delete = { Op::Delete, GitspaceEventType::InfraDeprovisioningFailed, Stage::InfraDeprovisioning },
    cleanup = { Op::Cleanup, GitspaceEventType::InfraCleanupFailed, Stage::InfraCleanup },
)]
fn teardown_adapter_error_emits_failure(op: Op, failed: GitspaceEventType, stage: Stage) {
    let h = setup();
    h.infra.set_error(
        op.infra_operation(),
        InfraError::NotFound("res-test".to_string()),
    );
    let mut infra = forwarded_infra(InfraStatus::Provisioned);

    let failure = run(&h, op, &mut infra).unwrap_err();

    assert_eq!(failure.stage(), stage);
    assert!(matches!(
        failure.error,
        OrchestratorError::InfraOperation { .. }
    ));
    assert_eq!(h.events.events(), vec![failed]);
}

#[parameterized(
    stop = { Op::Stop, vec![GitspaceEventType::InfraStopCompleted, GitspaceEventType::GitspaceActionStopCompleted] },
    delete = { Op::Delete, vec![GitspaceEventType::InfraDeprovisioningCompleted, GitspaceEventType::GitspaceActionStopCompleted] },
    cleanup = { Op::Cleanup, vec![GitspaceEventType::InfraCleanupCompleted] },
)]
fn teardown_success_events(op: Op, expected: Vec<GitspaceEventType>) {
    let h = setup();
    let mut infra = forwarded_infra(InfraStatus::Provisioned);

    run(&h, op, &mut infra).unwrap();

    assert_eq!(h.events.events(), expected);
}

#[test]
fn teardown_touches_no_other_collaborator() {
    let h = setup();
    let mut infra = forwarded_infra(InfraStatus::Provisioned);

    run(&h, Op::Delete, &mut infra).unwrap();

    assert!(h.password.calls().is_empty());
    assert!(h.scm.calls().is_empty());
    assert!(h.containers.calls().is_empty());
}

#[test]
fn teardown_emit_failures_are_swallowed() {
    let h = setup();
    h.events.set_failing(true);
    let mut infra = forwarded_infra(InfraStatus::Provisioned);

    let instance = run(&h, Op::Stop, &mut infra).unwrap();

    assert_eq!(instance.state, InstanceState::Deleted);
}
