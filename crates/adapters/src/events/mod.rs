// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle event emitters
//!
//! Emission is best-effort: callers log a failed emit and carry on.

mod channel;
mod noop;

pub use channel::ChannelEventEmitter;
pub use noop::NoOpEventEmitter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EmitCall, FakeEventEmitter};

use async_trait::async_trait;
use gs_core::{GitspaceConfig, GitspaceEventType};
use thiserror::Error;

/// Errors from event emission
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("event channel full")]
    ChannelFull,
    #[error("event channel closed")]
    ChannelClosed,
    #[error("emit failed: {0}")]
    Failed(String),
}

/// Records lifecycle events for a gitspace
#[async_trait]
pub trait EventEmitter: Clone + Send + Sync + 'static {
    async fn emit(
        &self,
        config: &GitspaceConfig,
        event: GitspaceEventType,
    ) -> Result<(), EmitError>;
}
