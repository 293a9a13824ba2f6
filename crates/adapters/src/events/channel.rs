// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel-backed event emitter.
//!
//! Stamps each event with an ID and wall-clock time and hands it to a tokio
//! channel without waiting. The receiving side (timeline writer, notifier) is
//! owned by the host process.

use super::{EmitError, EventEmitter};
use async_trait::async_trait;
use gs_core::{Clock, GitspaceConfig, GitspaceEvent, GitspaceEventType, IdGen};
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct ChannelEventEmitter<C: Clock, G: IdGen> {
    tx: mpsc::Sender<GitspaceEvent>,
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGen> ChannelEventEmitter<C, G> {
    pub fn new(tx: mpsc::Sender<GitspaceEvent>, clock: C, ids: G) -> Self {
        Self { tx, clock, ids }
    }
}

#[async_trait]
impl<C: Clock, G: IdGen> EventEmitter for ChannelEventEmitter<C, G> {
    async fn emit(
        &self,
        config: &GitspaceConfig,
        event: GitspaceEventType,
    ) -> Result<(), EmitError> {
        let record = GitspaceEvent {
            id: self.ids.next(),
            event,
            gitspace: config.identifier.clone(),
            instance: config.instance.identifier.clone(),
            space_path: config.space_path.clone(),
            timestamp_ms: self.clock.epoch_ms(),
        };
        self.tx.try_send(record).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => EmitError::ChannelFull,
            mpsc::error::TrySendError::Closed(_) => EmitError::ChannelClosed,
        })
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
