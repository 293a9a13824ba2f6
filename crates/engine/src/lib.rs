// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Gitspace lifecycle engine
//!
//! [`Orchestrator`] drives the start, stop, delete and cleanup operations of a
//! gitspace across its secret, infrastructure, agent and IDE collaborators.

mod access_url;
mod config;
pub mod env;
mod error;
mod orchestrator;
mod start;
mod teardown;

pub use access_url::{access_url, resolve_forwarded_port, AccessUrlError};
pub use config::{ConfigError, OrchestratorConfig, DEFAULT_BASE_IMAGE, DEFAULT_GITSPACE_USER};
pub use error::{LifecycleFailure, OrchestratorError, Stage};
pub use orchestrator::{Orchestrator, OrchestratorDeps};
