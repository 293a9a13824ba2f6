// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Browser-hosted VS Code.

use super::{IdeError, IdeService, UrlParams};
use gs_core::{GitspacePort, IdeType, PortProtocol};
use url::Url;

pub const DEFAULT_HTTP_PORT: u16 = 8089;

/// VS Code served over HTTP from inside the container.
#[derive(Clone, Copy, Debug)]
pub struct VsCodeWeb {
    port: u16,
}

impl Default for VsCodeWeb {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_PORT)
    }
}

impl VsCodeWeb {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl IdeService for VsCodeWeb {
    fn port(&self) -> GitspacePort {
        GitspacePort {
            port: self.port,
            protocol: PortProtocol::Http,
        }
    }

    fn ide_type(&self) -> IdeType {
        IdeType::VsCodeWeb
    }

    fn generate_url(&self, params: &UrlParams<'_>) -> Result<Url, IdeError> {
        let invalid = |source: url::ParseError| IdeError::InvalidUrl {
            ide: IdeType::VsCodeWeb,
            source,
        };
        let mut url = Url::parse(&format!(
            "{}://{}:{}",
            params.scheme, params.host, params.port
        ))
        .map_err(invalid)?;
        url.set_query(Some(&format!("folder=/{}", params.relative_repo_path())));
        Ok(url)
    }
}

#[cfg(test)]
#[path = "vscode_web_tests.rs"]
mod tests;
