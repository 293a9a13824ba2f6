// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op event emitter.

use super::{EmitError, EventEmitter};
use async_trait::async_trait;
use gs_core::{GitspaceConfig, GitspaceEventType};

/// Emitter that discards every event.
///
/// Used when the timeline is disabled or not yet configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpEventEmitter;

impl NoOpEventEmitter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventEmitter for NoOpEventEmitter {
    async fn emit(
        &self,
        _config: &GitspaceConfig,
        _event: GitspaceEventType,
    ) -> Result<(), EmitError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
