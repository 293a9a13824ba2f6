// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    AccessType, GitspaceConfig, GitspaceId, GitspaceInstance, GitspaceUser, IdeType,
    InfraProviderResource, InfraStatus, Infrastructure, InstanceId, InstanceState, PortMapping,
    ResourceId,
};
use std::collections::HashMap;

pub const TEST_SPACE_PATH: &str = "acct/org/project";
pub const TEST_ACCESS_KEY_REF: &str = "gitspace-access-key";

// ── Builders ────────────────────────────────────────────────────────────────

pub fn gitspace_config(ide: IdeType, access_type: AccessType) -> GitspaceConfig {
    GitspaceConfig {
        id: 42,
        identifier: GitspaceId::new("gs-test"),
        space_path: TEST_SPACE_PATH.to_string(),
        ide,
        user: GitspaceUser {
            identifier: "owner-1".to_string(),
        },
        infra_provider_resource: InfraProviderResource {
            uid: ResourceId::new("res-test"),
        },
        instance: GitspaceInstance {
            identifier: InstanceId::new("inst-test"),
            state: InstanceState::Uninitialized,
            access_type,
            access_key_ref: Some(TEST_ACCESS_KEY_REF.to_string()),
            ..Default::default()
        },
    }
}

/// Infrastructure in `status` with no port mappings.
pub fn infra(status: InfraStatus) -> Infrastructure {
    Infrastructure {
        identifier: "infra-test".to_string(),
        resource_uid: ResourceId::new("res-test"),
        status,
        gitspace_scheme: "https".to_string(),
        gitspace_host: "10.0.0.5".to_string(),
        proxy_gitspace_host: None,
        gitspace_port_mappings: HashMap::new(),
    }
}

/// Infrastructure with one port mapping for `port`.
pub fn infra_with_mapping(
    status: InfraStatus,
    port: u16,
    published_port: u16,
    forwarded_port: u16,
) -> Infrastructure {
    let mut infra = infra(status);
    infra.gitspace_port_mappings.insert(
        port,
        PortMapping {
            published_port,
            forwarded_port,
        },
    );
    infra
}
