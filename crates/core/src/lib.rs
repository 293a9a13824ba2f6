// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gs-core: Gitspace records, infrastructure descriptors and lifecycle events

pub mod clock;
pub mod event;
pub mod gitspace;
pub mod id;
pub mod infra;
pub mod space;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use event::{GitspaceEvent, GitspaceEventType};
pub use gitspace::{
    AccessType, GitspaceConfig, GitspaceId, GitspaceInstance, GitspaceUser, IdeType,
    InfraProviderResource, InstanceId, InstanceState,
};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use infra::{GitspacePort, InfraStatus, Infrastructure, PortMapping, PortProtocol, ResourceId};
pub use space::{split_root, SpacePathError};
