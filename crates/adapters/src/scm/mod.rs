// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source control adapters

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeScmClient;

use async_trait::async_trait;
use gs_core::GitspaceConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from SCM lookups
#[derive(Debug, Error)]
pub enum ScmError {
    #[error("repository not found: {0}")]
    RepoNotFound(String),
    #[error("scm provider error: {0}")]
    Provider(String),
}

/// Credentials used to clone inside the container
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmCredentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for ScmCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScmCredentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Repository details the container needs to clone and open the code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmDetails {
    pub repo_name: String,
    pub clone_url: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ScmCredentials>,
}

/// Client for the source control system hosting gitspace repositories
#[async_trait]
pub trait ScmClient: Clone + Send + Sync + 'static {
    async fn get_scm_repo_details(&self, config: &GitspaceConfig) -> Result<ScmDetails, ScmError>;
}
