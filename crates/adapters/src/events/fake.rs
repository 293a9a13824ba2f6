// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event emitter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{EmitError, EventEmitter};
use async_trait::async_trait;
use gs_core::{GitspaceConfig, GitspaceEventType, GitspaceId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitCall {
    pub gitspace: GitspaceId,
    pub event: GitspaceEventType,
}

struct FakeEmitterState {
    calls: Vec<EmitCall>,
    fail_all: bool,
}

/// Fake emitter that records every event, optionally failing each emit
#[derive(Clone)]
pub struct FakeEventEmitter {
    inner: Arc<Mutex<FakeEmitterState>>,
}

impl Default for FakeEventEmitter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeEmitterState {
                calls: Vec::new(),
                fail_all: false,
            })),
        }
    }
}

impl FakeEventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded emits
    pub fn calls(&self) -> Vec<EmitCall> {
        self.inner.lock().calls.clone()
    }

    /// Event types in emission order
    pub fn events(&self) -> Vec<GitspaceEventType> {
        self.inner.lock().calls.iter().map(|c| c.event).collect()
    }

    /// Make every emit return an error (the event is still recorded)
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().fail_all = failing;
    }
}

#[async_trait]
impl EventEmitter for FakeEventEmitter {
    async fn emit(
        &self,
        config: &GitspaceConfig,
        event: GitspaceEventType,
    ) -> Result<(), EmitError> {
        let mut inner = self.inner.lock();
        inner.calls.push(EmitCall {
            gitspace: config.identifier.clone(),
            event,
        });
        if inner.fail_all {
            return Err(EmitError::Failed("transport down".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
