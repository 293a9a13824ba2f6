// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret resolution adapters
//!
//! A gitspace's access type selects a [`SecretType`]; the
//! [`SecretResolverRegistry`] maps that type to the resolver which turns a
//! stored credential reference into its value.

mod registry;
mod static_resolver;

pub use registry::{ResolverNotFound, SecretResolverRegistry};
pub use static_resolver::StaticSecretResolver;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSecretResolver;

use async_trait::async_trait;
use gs_core::{AccessType, GitspaceId};
use std::fmt;
use thiserror::Error;

/// Errors from secret resolution
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret not found: {0}")]
    NotFound(String),
    #[error("secret backend error: {0}")]
    Backend(String),
}

/// Credential scheme a resolver implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretType {
    Password,
    Jwt,
    Ssh,
}

impl SecretType {
    /// Unrecognized access types fall back to `Password`.
    pub fn for_access_type(access_type: AccessType) -> Self {
        match access_type {
            AccessType::UserCredentials => SecretType::Password,
            AccessType::JwtToken => SecretType::Jwt,
            AccessType::SshKey => SecretType::Ssh,
            AccessType::Unknown => SecretType::Password,
        }
    }
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SecretType::Password => "password",
            SecretType::Jwt => "jwt",
            SecretType::Ssh => "ssh",
        };
        f.write_str(s)
    }
}

/// Scope in which a secret reference is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    pub user_identifier: String,
    pub gitspace_identifier: GitspaceId,
    pub secret_ref: String,
    /// Root space the secret belongs to
    pub space_identifier: String,
}

/// A resolved credential. The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    pub secret_ref: String,
    value: String,
}

impl ResolvedSecret {
    pub fn new(secret_ref: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            secret_ref: secret_ref.into(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("secret_ref", &self.secret_ref)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Resolves secret references for one [`SecretType`]
#[async_trait]
pub trait SecretResolver: Send + Sync + 'static {
    /// The scheme this resolver is registered under
    fn secret_type(&self) -> SecretType;

    /// Resolve a reference within the given scope
    async fn resolve(&self, ctx: &ResolutionContext) -> Result<ResolvedSecret, SecretError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
