// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! IDE integrations
//!
//! Each IDE service knows the container port its editor listens on and how to
//! turn a host/port pair into a URL the user can open. Installation inside the
//! container is the container orchestrator's concern, not this module's.

mod registry;
mod vscode;
mod vscode_web;

pub use registry::{IdeRegistry, UnsupportedIde};
pub use vscode::VsCode;
pub use vscode_web::VsCodeWeb;

use gs_core::{GitspacePort, IdeType};
use thiserror::Error;
use url::Url;

/// Errors from IDE URL generation
#[derive(Debug, Error)]
pub enum IdeError {
    #[error("invalid {ide} url: {source}")]
    InvalidUrl {
        ide: IdeType,
        #[source]
        source: url::ParseError,
    },
}

/// Inputs for building an IDE access URL
#[derive(Debug, Clone, Copy)]
pub struct UrlParams<'a> {
    /// Repository path inside the container, e.g. `/home/user/repo`
    pub absolute_repo_path: &'a str,
    pub host: &'a str,
    pub port: u16,
    /// Scheme for browser-based IDEs
    pub scheme: &'a str,
    /// User the remote connection logs in as
    pub user: &'a str,
}

impl UrlParams<'_> {
    /// The repository path without its leading separator
    pub fn relative_repo_path(&self) -> &str {
        self.absolute_repo_path.trim_start_matches('/')
    }
}

/// An editor integration for a gitspace
pub trait IdeService: Send + Sync + 'static {
    /// Port the IDE uses inside the container
    fn port(&self) -> GitspacePort;

    /// The IDE type this service is registered under
    fn ide_type(&self) -> IdeType;

    /// Build the URL that opens the repository in this IDE
    fn generate_url(&self, params: &UrlParams<'_>) -> Result<Url, IdeError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
