// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod start;
mod teardown;
mod tracing_output;

use super::*;
use crate::config::OrchestratorConfig;
use gs_adapters::{
    FakeContainerOrchestrator, FakeEventEmitter, FakeInfraProvisioner, FakeScmClient,
    FakeSecretResolver, IdeRegistry, SecretResolverRegistry, SecretType,
};
use gs_core::test_support::{gitspace_config, infra_with_mapping};
use gs_core::{AccessType, FakeClock, IdeType};

type TestOrchestrator = Orchestrator<
    FakeInfraProvisioner,
    FakeContainerOrchestrator,
    FakeScmClient,
    FakeEventEmitter,
    FakeClock,
>;

/// Port the default VS Code Web service listens on
const WEB_PORT: u16 = 8089;
const SECRET: &str = "s3cret";

struct TestHarness {
    orchestrator: TestOrchestrator,
    infra: FakeInfraProvisioner,
    containers: FakeContainerOrchestrator,
    scm: FakeScmClient,
    events: FakeEventEmitter,
    password: FakeSecretResolver,
    jwt: FakeSecretResolver,
    clock: FakeClock,
}

fn setup() -> TestHarness {
    setup_with_config(OrchestratorConfig::default())
}

/// Password and JWT resolvers are registered; SSH deliberately is not.
fn setup_with_config(config: OrchestratorConfig) -> TestHarness {
    let infra = FakeInfraProvisioner::new();
    let containers = FakeContainerOrchestrator::new();
    let scm = FakeScmClient::new();
    let events = FakeEventEmitter::new();
    let password = FakeSecretResolver::new(SecretType::Password, SECRET);
    let jwt = FakeSecretResolver::new(SecretType::Jwt, "jwt-token");
    let clock = FakeClock::new();

    let orchestrator = Orchestrator::new(
        OrchestratorDeps {
            infra: infra.clone(),
            containers: containers.clone(),
            scm: scm.clone(),
            events: events.clone(),
            secrets: SecretResolverRegistry::new()
                .with(password.clone())
                .with(jwt.clone()),
            ides: IdeRegistry::with_defaults(),
        },
        config,
        clock.clone(),
    );

    TestHarness {
        orchestrator,
        infra,
        containers,
        scm,
        events,
        password,
        jwt,
        clock,
    }
}

fn web_gitspace() -> GitspaceConfig {
    gitspace_config(IdeType::VsCodeWeb, AccessType::UserCredentials)
}

/// Infrastructure that forwards the web IDE port itself
fn forwarded_infra(status: InfraStatus) -> Infrastructure {
    infra_with_mapping(status, WEB_PORT, 9999, 8081)
}
