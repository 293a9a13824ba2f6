// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gs_adapters::InfraOperation;
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
fn start_logs_span_and_outcome() {
    let (logs, result) = with_tracing(|| async {
        let h = setup();
        let mut infra = forwarded_infra(InfraStatus::Pending);
        h.orchestrator.resume_start(&web_gitspace(), &mut infra).await
    });

    assert!(result.is_ok());
    assert_log(&logs, "span name", "gitspace.start");
    assert_log(&logs, "gitspace field", "gitspace=gs-test");
    assert_log(&logs, "start", "starting");
    assert_log(&logs, "completion", "completed state=running");
    assert_log(&logs, "elapsed time", "elapsed_ms=");
}

#[test]
#[serial(tracing)]
fn start_never_logs_secret_value() {
    let (logs, _) = with_tracing(|| async {
        let h = setup();
        let mut infra = forwarded_infra(InfraStatus::Pending);
        h.orchestrator.resume_start(&web_gitspace(), &mut infra).await
    });

    assert_log(&logs, "redacted secret", "[REDACTED]");
    assert!(!logs.contains(SECRET), "secret leaked into logs:\n{logs}");
}

#[test]
#[serial(tracing)]
fn failure_logs_stage() {
    let (logs, result) = with_tracing(|| async {
        let h = setup();
        h.infra
            .set_outcome(InfraOperation::Provision, InfraStatus::Error);
        let mut infra = forwarded_infra(InfraStatus::Pending);
        h.orchestrator.resume_start(&web_gitspace(), &mut infra).await
    });

    assert!(result.is_err());
    assert_log(&logs, "failure", "failed");
    assert_log(&logs, "stage", "stage=infra_provisioning");
}

#[test]
#[serial(tracing)]
fn emit_failure_is_logged_as_warning() {
    let (logs, result) = with_tracing(|| async {
        let h = setup();
        h.events.set_failing(true);
        let mut infra = forwarded_infra(InfraStatus::Provisioned);
        h.orchestrator.resume_cleanup(&web_gitspace(), &mut infra).await
    });

    assert!(result.is_ok());
    assert_log(&logs, "warning level", "WARN");
    assert_log(&logs, "emit failure", "event emit failed");
    assert_log(&logs, "event name", "event=infra_cleanup:completed");
    assert_log(&logs, "teardown span", "gitspace.cleanup");
}
