// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake SCM client for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ScmClient, ScmDetails, ScmError};
use async_trait::async_trait;
use gs_core::{GitspaceConfig, GitspaceId};
use parking_lot::Mutex;
use std::sync::Arc;

struct FakeScmState {
    details: ScmDetails,
    calls: Vec<GitspaceId>,
    error: Option<ScmError>,
}

/// Fake SCM client returning fixed repository details
#[derive(Clone)]
pub struct FakeScmClient {
    inner: Arc<Mutex<FakeScmState>>,
}

impl Default for FakeScmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeScmClient {
    pub fn new() -> Self {
        Self::with_details(ScmDetails {
            repo_name: "repo".to_string(),
            clone_url: "https://git.example.com/acct/repo.git".to_string(),
            branch: "main".to_string(),
            credentials: None,
        })
    }

    pub fn with_details(details: ScmDetails) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeScmState {
                details,
                calls: Vec::new(),
                error: None,
            })),
        }
    }

    /// Gitspaces looked up so far
    pub fn calls(&self) -> Vec<GitspaceId> {
        self.inner.lock().calls.clone()
    }

    /// Set error to return on next lookup
    pub fn set_error(&self, error: ScmError) {
        self.inner.lock().error = Some(error);
    }
}

#[async_trait]
impl ScmClient for FakeScmClient {
    async fn get_scm_repo_details(&self, config: &GitspaceConfig) -> Result<ScmDetails, ScmError> {
        let mut inner = self.inner.lock();
        inner.calls.push(config.identifier.clone());
        if let Some(error) = inner.error.take() {
            return Err(error);
        }
        Ok(inner.details.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
