// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::container::FakeContainerOrchestrator;
use crate::ide::VsCodeWeb;
use crate::infra::FakeInfraProvisioner;
use crate::scm::FakeScmClient;
use gs_core::test_support::{gitspace_config, infra};
use gs_core::{AccessType, IdeType, InfraStatus};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn assert_log(logs: &str, label: &str, expected: &str) {
    assert!(logs.contains(expected), "Should log {label}. Logs:\n{logs}");
}

#[test]
#[serial(tracing)]
fn traced_provision_logs_operation_and_resulting_status() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedInfraProvisioner::new(FakeInfraProvisioner::new());
        let config = gitspace_config(IdeType::VsCodeWeb, AccessType::UserCredentials);
        let mut descriptor = infra(InfraStatus::Pending);
        traced.resume_provision(&config, &mut descriptor).await
    });

    assert!(result.is_ok());
    assert_log(&logs, "span name", "infra.resume");
    assert_log(&logs, "operation", "operation=provision");
    assert_log(&logs, "resource", "res-test");
    assert_log(&logs, "entry status", "status=pending");
    assert_log(&logs, "exit status", "status=provisioned");
    assert_log(&logs, "timing", "elapsed_ms");
}

#[test]
#[serial(tracing)]
fn traced_infra_logs_failure() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeInfraProvisioner::new();
        fake.set_error(InfraOperation::Stop, InfraError::Provider("boom".to_string()));
        let traced = TracedInfraProvisioner::new(fake);
        let config = gitspace_config(IdeType::VsCodeWeb, AccessType::UserCredentials);
        let mut descriptor = infra(InfraStatus::Provisioned);
        traced.resume_stop(&config, &mut descriptor).await
    });

    assert!(result.is_err());
    assert_log(&logs, "operation", "operation=stop");
    assert_log(&logs, "failure", "failed");
    assert_log(&logs, "error text", "boom");
}

#[test]
#[serial(tracing)]
fn traced_container_start_logs_container_id() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedContainerOrchestrator::new(FakeContainerOrchestrator::new());
        let config = gitspace_config(IdeType::VsCodeWeb, AccessType::UserCredentials);
        let descriptor = infra(InfraStatus::Provisioned);
        let scm = FakeScmClient::new().get_scm_repo_details(&config).await.unwrap();
        let ide = VsCodeWeb::default();
        traced
            .create_and_start_gitspace(StartRequest {
                config: &config,
                infra: &descriptor,
                scm: &scm,
                default_base_image: "base:latest",
                ide: &ide,
            })
            .await
    });

    assert!(result.is_ok());
    assert_log(&logs, "span name", "agent.create_and_start");
    assert_log(&logs, "ide", "vs_code_web");
    assert_log(&logs, "image", "base:latest");
    assert_log(&logs, "completion", "container started");
}

#[test]
#[serial(tracing)]
fn traced_status_logs_unreachable_agent() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeContainerOrchestrator::new();
        fake.set_status_error(ContainerError::Unreachable("timeout".to_string()));
        let traced = TracedContainerOrchestrator::new(fake);
        traced.status(&infra(InfraStatus::Provisioned)).await
    });

    assert!(result.is_err());
    assert_log(&logs, "span name", "agent.status");
    assert_log(&logs, "warning", "agent unreachable");
}

#[tokio::test]
async fn traced_wrappers_delegate_to_inner() {
    let infra_fake = FakeInfraProvisioner::new();
    let container_fake = FakeContainerOrchestrator::new();
    let scm_fake = FakeScmClient::new();
    let config = gitspace_config(IdeType::VsCodeWeb, AccessType::UserCredentials);
    let mut descriptor = infra(InfraStatus::Stopped);

    TracedInfraProvisioner::new(infra_fake.clone())
        .resume_cleanup_instance(&config, &mut descriptor)
        .await
        .unwrap();
    TracedContainerOrchestrator::new(container_fake.clone())
        .status(&descriptor)
        .await
        .unwrap();
    TracedScmClient::new(scm_fake.clone())
        .get_scm_repo_details(&config)
        .await
        .unwrap();

    assert_eq!(infra_fake.calls().len(), 1);
    assert_eq!(descriptor.status, InfraStatus::Destroyed);
    assert_eq!(container_fake.calls().len(), 1);
    assert_eq!(scm_fake.calls(), vec![config.identifier.clone()]);
}
