// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake secret resolver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ResolutionContext, ResolvedSecret, SecretError, SecretResolver, SecretType};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

struct FakeSecretState {
    value: String,
    calls: Vec<ResolutionContext>,
    error: Option<SecretError>,
}

/// Fake resolver that returns a fixed value and records every request
#[derive(Clone)]
pub struct FakeSecretResolver {
    secret_type: SecretType,
    inner: Arc<Mutex<FakeSecretState>>,
}

impl FakeSecretResolver {
    pub fn new(secret_type: SecretType, value: impl Into<String>) -> Self {
        Self {
            secret_type,
            inner: Arc::new(Mutex::new(FakeSecretState {
                value: value.into(),
                calls: Vec::new(),
                error: None,
            })),
        }
    }

    /// Get all recorded resolution requests
    pub fn calls(&self) -> Vec<ResolutionContext> {
        self.inner.lock().calls.clone()
    }

    /// Set error to return on next resolve
    pub fn set_error(&self, error: SecretError) {
        self.inner.lock().error = Some(error);
    }
}

#[async_trait]
impl SecretResolver for FakeSecretResolver {
    fn secret_type(&self) -> SecretType {
        self.secret_type
    }

    async fn resolve(&self, ctx: &ResolutionContext) -> Result<ResolvedSecret, SecretError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ctx.clone());
        if let Some(error) = inner.error.take() {
            return Err(error);
        }
        Ok(ResolvedSecret::new(ctx.secret_ref.clone(), inner.value.clone()))
    }
}
