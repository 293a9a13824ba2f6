// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! VS Code desktop over SSH remote.

use super::{IdeError, IdeService, UrlParams};
use gs_core::{GitspacePort, IdeType, PortProtocol};
use url::Url;

pub const DEFAULT_SSH_PORT: u16 = 8088;

/// VS Code desktop, reached through the Remote-SSH extension.
///
/// The generated URI carries host and port inside its path segment:
/// `vscode-remote://ssh-remote+<user>@<host>:<port>/<repo>`.
#[derive(Clone, Copy, Debug)]
pub struct VsCode {
    port: u16,
}

impl Default for VsCode {
    fn default() -> Self {
        Self::new(DEFAULT_SSH_PORT)
    }
}

impl VsCode {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl IdeService for VsCode {
    fn port(&self) -> GitspacePort {
        GitspacePort {
            port: self.port,
            protocol: PortProtocol::Ssh,
        }
    }

    fn ide_type(&self) -> IdeType {
        IdeType::VsCode
    }

    fn generate_url(&self, params: &UrlParams<'_>) -> Result<Url, IdeError> {
        let raw = format!(
            "vscode-remote://ssh-remote+{}@{}:{}/{}",
            params.user,
            params.host,
            params.port,
            params.relative_repo_path()
        );
        Url::parse(&raw).map_err(|source| IdeError::InvalidUrl {
            ide: IdeType::VsCode,
            source,
        })
    }
}

#[cfg(test)]
#[path = "vscode_tests.rs"]
mod tests;
