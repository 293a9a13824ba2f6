// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the subsystems a gitspace lifecycle calls out to

pub mod container;
pub mod events;
pub mod ide;
pub mod infra;
pub mod scm;
pub mod secret;
pub mod traced;

pub use container::{ContainerError, ContainerOrchestrator, StartRequest, StartResponse};
pub use events::{ChannelEventEmitter, EmitError, EventEmitter, NoOpEventEmitter};
pub use ide::{IdeError, IdeRegistry, IdeService, UnsupportedIde, UrlParams, VsCode, VsCodeWeb};
pub use infra::{InfraError, InfraOperation, InfraProvisioner};
pub use scm::{ScmClient, ScmCredentials, ScmDetails, ScmError};
pub use secret::{
    ResolutionContext, ResolvedSecret, ResolverNotFound, SecretError, SecretResolver,
    SecretResolverRegistry, SecretType, StaticSecretResolver,
};
pub use traced::{TracedContainerOrchestrator, TracedInfraProvisioner, TracedScmClient};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use container::{ContainerCall, FakeContainerOrchestrator};
#[cfg(any(test, feature = "test-support"))]
pub use events::{EmitCall, FakeEventEmitter};
#[cfg(any(test, feature = "test-support"))]
pub use infra::{FakeInfraProvisioner, InfraCall};
#[cfg(any(test, feature = "test-support"))]
pub use scm::FakeScmClient;
#[cfg(any(test, feature = "test-support"))]
pub use secret::FakeSecretResolver;
