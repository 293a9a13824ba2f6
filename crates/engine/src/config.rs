// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestrator configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment variables (see [`crate::env`]).

use crate::env;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base image used when a repository ships no devcontainer definition
pub const DEFAULT_BASE_IMAGE: &str = "mcr.microsoft.com/devcontainers/base:dev-ubuntu-24.04";

/// User the gitspace container is started as
pub const DEFAULT_GITSPACE_USER: &str = "harness";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub default_base_image: String,
    /// Identifier the container user runs as, also used in remote IDE URLs
    pub gitspace_user: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            default_base_image: DEFAULT_BASE_IMAGE.to_string(),
            gitspace_user: DEFAULT_GITSPACE_USER.to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// Parse from TOML; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply `GITSPACE_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env::var)
    }

    /// Apply overrides from an arbitrary lookup (the environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(image) = env::non_empty(lookup(env::DEFAULT_BASE_IMAGE_VAR)) {
            self.default_base_image = image;
        }
        if let Some(user) = env::non_empty(lookup(env::GITSPACE_USER_VAR)) {
            self.gitspace_user = user;
        }
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.default_base_image.trim().is_empty() {
            return Err(ConfigError::Empty("default_base_image"));
        }
        if self.gitspace_user.trim().is_empty() {
            return Err(ConfigError::Empty("gitspace_user"));
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
