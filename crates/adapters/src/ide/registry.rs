// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of IDE services keyed by IDE type.

use super::{IdeService, VsCode, VsCodeWeb};
use gs_core::IdeType;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported IDE type: {0}")]
pub struct UnsupportedIde(pub IdeType);

#[derive(Clone, Default)]
pub struct IdeRegistry {
    services: HashMap<IdeType, Arc<dyn IdeService>>,
}

impl IdeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with VS Code desktop and VS Code Web on their default ports
    pub fn with_defaults() -> Self {
        Self::new().with(VsCode::default()).with(VsCodeWeb::default())
    }

    pub fn register(&mut self, service: impl IdeService) {
        self.services.insert(service.ide_type(), Arc::new(service));
    }

    pub fn with(mut self, service: impl IdeService) -> Self {
        self.register(service);
        self
    }

    pub fn get(&self, ide: IdeType) -> Result<Arc<dyn IdeService>, UnsupportedIde> {
        self.services.get(&ide).cloned().ok_or(UnsupportedIde(ide))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
