// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory secret resolver.

use super::{ResolutionContext, ResolvedSecret, SecretError, SecretResolver, SecretType};
use async_trait::async_trait;
use std::collections::HashMap;

/// Resolver backed by a fixed table of `(root space, reference) -> value`.
///
/// Used for local setups where credentials are supplied up front rather than
/// fetched from a secret store.
#[derive(Clone, Debug)]
pub struct StaticSecretResolver {
    secret_type: SecretType,
    secrets: HashMap<(String, String), String>,
}

impl StaticSecretResolver {
    pub fn new(secret_type: SecretType) -> Self {
        Self {
            secret_type,
            secrets: HashMap::new(),
        }
    }

    pub fn with_secret(
        mut self,
        space_identifier: impl Into<String>,
        secret_ref: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.secrets
            .insert((space_identifier.into(), secret_ref.into()), value.into());
        self
    }
}

#[async_trait]
impl SecretResolver for StaticSecretResolver {
    fn secret_type(&self) -> SecretType {
        self.secret_type
    }

    async fn resolve(&self, ctx: &ResolutionContext) -> Result<ResolvedSecret, SecretError> {
        let key = (ctx.space_identifier.clone(), ctx.secret_ref.clone());
        self.secrets
            .get(&key)
            .map(|value| ResolvedSecret::new(ctx.secret_ref.clone(), value.clone()))
            .ok_or_else(|| {
                SecretError::NotFound(format!("{}/{}", ctx.space_identifier, ctx.secret_ref))
            })
    }
}

#[cfg(test)]
#[path = "static_resolver_tests.rs"]
mod tests;
