// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of secret resolvers keyed by secret type.

use super::{SecretResolver, SecretType};
use gs_core::AccessType;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no secret resolver registered for type {0}")]
pub struct ResolverNotFound(pub SecretType);

/// Maps each [`SecretType`] to at most one resolver.
#[derive(Clone, Default)]
pub struct SecretResolverRegistry {
    resolvers: HashMap<SecretType, Arc<dyn SecretResolver>>,
}

impl SecretResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver under its own secret type, replacing any previous one
    pub fn register(&mut self, resolver: impl SecretResolver) {
        self.resolvers
            .insert(resolver.secret_type(), Arc::new(resolver));
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, resolver: impl SecretResolver) -> Self {
        self.register(resolver);
        self
    }

    pub fn get(&self, secret_type: SecretType) -> Result<Arc<dyn SecretResolver>, ResolverNotFound> {
        self.resolvers
            .get(&secret_type)
            .cloned()
            .ok_or(ResolverNotFound(secret_type))
    }

    /// Look up the resolver for a gitspace access type
    pub fn for_access_type(
        &self,
        access_type: AccessType,
    ) -> Result<Arc<dyn SecretResolver>, ResolverNotFound> {
        self.get(SecretType::for_access_type(access_type))
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
