// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::access_url::AccessUrlError;
use crate::error::Stage;
use gs_adapters::{
    ContainerCall, ContainerError, InfraError, InfraOperation, ScmError, SecretError,
};
use gs_core::test_support::{infra, TEST_ACCESS_KEY_REF};
use gs_core::InstanceState;
use std::time::Duration;

const START_EVENTS: [GitspaceEventType; 6] = [
    GitspaceEventType::InfraProvisioningCompleted,
    GitspaceEventType::AgentConnectStart,
    GitspaceEventType::AgentConnectCompleted,
    GitspaceEventType::AgentGitspaceCreationStart,
    GitspaceEventType::AgentGitspaceCreationCompleted,
    GitspaceEventType::GitspaceActionStartCompleted,
];

#[tokio::test]
async fn start_runs_every_stage_in_order() {
    let h = setup();
    let config = web_gitspace();
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let instance = h.orchestrator.resume_start(&config, &mut infra).await.unwrap();

    assert_eq!(instance.state, InstanceState::Running);
    assert_eq!(
        instance.url.as_deref(),
        Some("https://10.0.0.5:8081/?folder=/home/harness/repo")
    );
    assert_eq!(instance.access_key.as_deref(), Some(SECRET));
    assert_eq!(h.events.events(), START_EVENTS);
    assert_eq!(infra.status, InfraStatus::Provisioned);
    assert_eq!(h.infra.calls().len(), 1);
    assert_eq!(h.infra.calls()[0].operation, InfraOperation::Provision);
    assert_eq!(h.scm.calls(), vec![config.identifier.clone()]);
}

#[tokio::test]
async fn start_stamps_usage_times_from_clock() {
    let h = setup();
    h.clock.set_epoch_ms(1_700_000_000_000);
    h.clock.advance(Duration::from_secs(5));
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let instance = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap();

    assert_eq!(instance.last_used, Some(1_700_000_005_000));
    assert_eq!(instance.active_time_started, Some(1_700_000_005_000));
}

#[tokio::test]
async fn start_leaves_input_record_untouched() {
    let h = setup();
    let config = web_gitspace();
    let mut infra = forwarded_infra(InfraStatus::Pending);

    h.orchestrator.resume_start(&config, &mut infra).await.unwrap();

    assert_eq!(config.instance.state, InstanceState::Uninitialized);
    assert_eq!(config.instance.url, None);
}

#[tokio::test]
async fn start_resolves_secret_in_root_space() {
    let h = setup();
    let mut infra = forwarded_infra(InfraStatus::Pending);

    h.orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap();

    let calls = h.password.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].space_identifier, "acct");
    assert_eq!(calls[0].user_identifier, "owner-1");
    assert_eq!(calls[0].gitspace_identifier, "gs-test");
    assert_eq!(calls[0].secret_ref, TEST_ACCESS_KEY_REF);
    assert!(h.jwt.calls().is_empty());
}

#[tokio::test]
async fn jwt_access_uses_jwt_resolver() {
    let h = setup();
    let config = gitspace_config(IdeType::VsCodeWeb, AccessType::JwtToken);
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let instance = h.orchestrator.resume_start(&config, &mut infra).await.unwrap();

    assert_eq!(instance.access_key.as_deref(), Some("jwt-token"));
    assert_eq!(h.jwt.calls().len(), 1);
    assert!(h.password.calls().is_empty());
}

#[tokio::test]
async fn unregistered_secret_type_fails_before_any_side_effect() {
    let h = setup();
    let config = gitspace_config(IdeType::VsCodeWeb, AccessType::SshKey);
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::ResolverNotFound { .. }
    ));
    assert_eq!(failure.instance.state, InstanceState::Error);
    assert!(h.password.calls().is_empty());
    assert!(h.infra.calls().is_empty());
    assert!(h.events.calls().is_empty());
}

#[tokio::test]
async fn empty_space_path_is_rejected() {
    let h = setup();
    let mut config = web_gitspace();
    config.space_path = "/".to_string();
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::InvalidSpacePath { .. }
    ));
    assert!(h.password.calls().is_empty());
}

#[tokio::test]
async fn missing_access_key_ref_is_rejected() {
    let h = setup();
    let mut config = web_gitspace();
    config.instance.access_key_ref = None;
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::MissingAccessKeyRef { .. }
    ));
    assert_eq!(failure.stage(), Stage::SecretResolution);
}

#[tokio::test]
async fn secret_failure_aborts_without_events() {
    let h = setup();
    h.password
        .set_error(SecretError::Backend("vault sealed".to_string()));
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::SecretResolution {
            secret_type: SecretType::Password,
            ..
        }
    ));
    assert!(h.infra.calls().is_empty());
    assert!(h.events.calls().is_empty());
}

#[tokio::test]
async fn unsupported_ide_aborts_without_events() {
    let h = setup();
    let config = gitspace_config(IdeType::Intellij, AccessType::UserCredentials);
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&config, &mut infra)
        .await
        .unwrap_err();

    assert_eq!(failure.stage(), Stage::IdeSelection);
    assert!(h.infra.calls().is_empty());
    assert!(h.events.calls().is_empty());
}

#[tokio::test]
async fn provisioning_error_emits_single_failure() {
    let h = setup();
    h.infra.set_error(
        InfraOperation::Provision,
        InfraError::Provider("quota exceeded".to_string()),
    );
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::InfraOperation {
            operation: InfraOperation::Provision,
            ..
        }
    ));
    assert_eq!(
        h.events.events(),
        vec![GitspaceEventType::InfraProvisioningFailed]
    );
    assert!(h.scm.calls().is_empty());
}

#[tokio::test]
async fn unprovisioned_infra_is_a_state_mismatch() {
    let h = setup();
    h.infra
        .set_outcome(InfraOperation::Provision, InfraStatus::Pending);
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    match &failure.error {
        OrchestratorError::InfraStateMismatch {
            actual, expected, ..
        } => {
            assert_eq!(*actual, InfraStatus::Pending);
            assert_eq!(*expected, [InfraStatus::Provisioned]);
        }
        other => panic!("expected state mismatch, got {other:?}"),
    }
    assert_eq!(failure.instance.state, InstanceState::Error);
    assert_eq!(
        h.events.events(),
        vec![GitspaceEventType::InfraProvisioningFailed]
    );
    assert!(h.scm.calls().is_empty());
    assert!(h.containers.calls().is_empty());
}

#[tokio::test]
async fn scm_failure_stops_after_provisioning() {
    let h = setup();
    h.scm
        .set_error(ScmError::RepoNotFound("acct/repo".to_string()));
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    assert_eq!(failure.stage(), Stage::ScmDetails);
    assert_eq!(
        h.events.events(),
        vec![GitspaceEventType::InfraProvisioningCompleted]
    );
    assert!(h.containers.calls().is_empty());
    // No rollback of the provisioned infrastructure
    assert_eq!(infra.status, InfraStatus::Provisioned);
}

#[tokio::test]
async fn unreachable_agent_skips_container_start() {
    let h = setup();
    h.containers
        .set_status_error(ContainerError::Unreachable("connection refused".to_string()));
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::AgentUnreachable { .. }
    ));
    assert_eq!(
        h.events.events(),
        vec![
            GitspaceEventType::InfraProvisioningCompleted,
            GitspaceEventType::AgentConnectStart,
            GitspaceEventType::AgentConnectFailed,
        ]
    );
    assert_eq!(
        h.containers.calls(),
        vec![ContainerCall::Status {
            infra: "infra-test".to_string()
        }]
    );
}

#[tokio::test]
async fn container_start_failure_emits_creation_failed() {
    let h = setup();
    h.containers
        .set_start_error(ContainerError::StartFailed("image pull failed".to_string()));
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    assert_eq!(failure.stage(), Stage::GitspaceCreation);
    assert_eq!(
        h.events.events().last(),
        Some(&GitspaceEventType::AgentGitspaceCreationFailed)
    );
    assert_eq!(failure.instance.url, None);
}

#[tokio::test]
async fn url_failure_reports_url_stage() {
    let h = setup();
    // No mapping and no published port for the IDE
    let mut infra = infra(InfraStatus::Pending);

    let failure = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap_err();

    assert!(matches!(
        failure.error,
        OrchestratorError::UrlGeneration {
            source: AccessUrlError::MissingPort(WEB_PORT),
            ..
        }
    ));
    assert_eq!(failure.instance.state, InstanceState::Error);
    assert!(!h
        .events
        .events()
        .contains(&GitspaceEventType::GitspaceActionStartCompleted));
}

#[tokio::test]
async fn emit_failures_do_not_fail_start() {
    let h = setup();
    h.events.set_failing(true);
    let mut infra = forwarded_infra(InfraStatus::Pending);

    let instance = h
        .orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap();

    assert_eq!(instance.state, InstanceState::Running);
    assert_eq!(h.events.events(), START_EVENTS);
}

#[tokio::test]
async fn container_runs_as_gitspace_user_with_default_image() {
    let h = setup();
    let mut infra = forwarded_infra(InfraStatus::Pending);

    h.orchestrator
        .resume_start(&web_gitspace(), &mut infra)
        .await
        .unwrap();

    let start = h
        .containers
        .calls()
        .into_iter()
        .find(|call| matches!(call, ContainerCall::CreateAndStart { .. }))
        .unwrap();
    assert_eq!(
        start,
        ContainerCall::CreateAndStart {
            gitspace: "gs-test".into(),
            user: "harness".to_string(),
            clone_url: "https://git.example.com/acct/repo.git".to_string(),
            base_image: crate::config::DEFAULT_BASE_IMAGE.to_string(),
            ide: IdeType::VsCodeWeb,
            ide_port: WEB_PORT,
        }
    );
}

#[tokio::test]
async fn configured_user_appears_in_desktop_url() {
    let h = setup_with_config(OrchestratorConfig {
        gitspace_user: "dev".to_string(),
        ..Default::default()
    });
    let config = gitspace_config(IdeType::VsCode, AccessType::UserCredentials);
    let mut infra = infra_with_mapping(InfraStatus::Pending, 8088, 9999, 2222);

    let instance = h.orchestrator.resume_start(&config, &mut infra).await.unwrap();

    assert_eq!(
        instance.url.as_deref(),
        Some("vscode-remote://ssh-remote+dev@10.0.0.5:2222/home/harness/repo")
    );
}
