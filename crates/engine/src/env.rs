// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

/// Overrides `OrchestratorConfig::default_base_image`
pub const DEFAULT_BASE_IMAGE_VAR: &str = "GITSPACE_DEFAULT_BASE_IMAGE";

/// Overrides `OrchestratorConfig::gitspace_user`
pub const GITSPACE_USER_VAR: &str = "GITSPACE_USER";

/// Read a variable from the process environment, treating blank as unset
pub fn var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
