// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gs_adapters::{VsCode, VsCodeWeb};
use gs_core::test_support::{infra, infra_with_mapping};
use gs_core::{GitspacePort, InfraStatus, PortProtocol};
use std::collections::HashMap;
use yare::parameterized;

fn response(ports: &[(u16, &str)]) -> StartResponse {
    StartResponse {
        container_id: "ctr-1".to_string(),
        container_name: "gitspace-ctr-1".to_string(),
        absolute_repo_path: "/home/harness/repo".to_string(),
        published_ports: ports
            .iter()
            .map(|(port, published)| (*port, published.to_string()))
            .collect::<HashMap<_, _>>(),
    }
}

#[parameterized(
    unpublished_mapping_uses_runtime_port = { 0, 8081, 30010 },
    published_mapping_uses_forwarded_port = { 9999, 8081, 8081 },
)]
fn port_resolution(published: u16, forwarded: u16, expected: u16) {
    let infra = infra_with_mapping(InfraStatus::Provisioned, 8089, published, forwarded);
    let port = resolve_forwarded_port(&infra, 8089, &response(&[(8089, "30010")])).unwrap();
    assert_eq!(port, expected);
}

#[test]
fn absent_mapping_falls_back_to_runtime_port() {
    let port = resolve_forwarded_port(
        &infra(InfraStatus::Provisioned),
        8089,
        &response(&[(8089, "30010")]),
    )
    .unwrap();
    assert_eq!(port, 30010);
}

#[test]
fn missing_runtime_port_is_an_error() {
    let err = resolve_forwarded_port(&infra(InfraStatus::Provisioned), 8089, &response(&[]))
        .unwrap_err();
    assert!(matches!(err, AccessUrlError::MissingPort(8089)));
}

#[test]
fn garbage_runtime_port_is_an_error() {
    let err = resolve_forwarded_port(
        &infra(InfraStatus::Provisioned),
        8089,
        &response(&[(8089, "not-a-port")]),
    )
    .unwrap_err();
    assert!(matches!(err, AccessUrlError::InvalidPort { port: 8089, .. }));
}

#[test]
fn vscode_web_url_opens_repo_folder() {
    let infra = infra_with_mapping(InfraStatus::Provisioned, 8089, 0, 0);
    let url = access_url(
        &infra,
        &VsCodeWeb::default(),
        &response(&[(8089, "30010")]),
        "harness",
    )
    .unwrap();
    assert_eq!(url.as_str(), "https://10.0.0.5:30010/?folder=/home/harness/repo");
}

#[test]
fn vscode_desktop_url_uses_gitspace_user() {
    let infra = infra_with_mapping(InfraStatus::Provisioned, 8088, 9999, 2222);
    let url = access_url(&infra, &VsCode::default(), &response(&[]), "harness").unwrap();
    assert_eq!(
        url.as_str(),
        "vscode-remote://ssh-remote+harness@10.0.0.5:2222/home/harness/repo"
    );
}

#[test]
fn proxy_host_overrides_gitspace_host() {
    let mut infra = infra_with_mapping(InfraStatus::Provisioned, 8089, 9999, 8081);
    infra.proxy_gitspace_host = Some("proxy.example.com".to_string());
    let url = access_url(&infra, &VsCodeWeb::default(), &response(&[]), "harness").unwrap();
    assert_eq!(url.host_str(), Some("proxy.example.com"));
    assert_eq!(url.port(), Some(8081));
}

#[test]
fn empty_proxy_host_is_ignored() {
    let mut infra = infra_with_mapping(InfraStatus::Provisioned, 8089, 9999, 8081);
    infra.proxy_gitspace_host = Some(String::new());
    let url = access_url(&infra, &VsCodeWeb::default(), &response(&[]), "harness").unwrap();
    assert_eq!(url.host_str(), Some("10.0.0.5"));
}

struct Jetbrains;

impl IdeService for Jetbrains {
    fn port(&self) -> GitspacePort {
        GitspacePort {
            port: 8090,
            protocol: PortProtocol::Ssh,
        }
    }

    fn ide_type(&self) -> IdeType {
        IdeType::Intellij
    }

    fn generate_url(&self, _params: &UrlParams<'_>) -> Result<Url, IdeError> {
        unreachable!("url generation must not be attempted")
    }
}

#[test]
fn other_ide_types_are_unsupported() {
    let infra = infra_with_mapping(InfraStatus::Provisioned, 8090, 9999, 8090);
    let err = access_url(&infra, &Jetbrains, &response(&[]), "harness").unwrap_err();
    assert!(matches!(err, AccessUrlError::Unsupported(IdeType::Intellij)));
}
