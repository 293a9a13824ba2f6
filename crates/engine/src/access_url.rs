// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access URL construction for a started gitspace

use gs_adapters::{IdeError, IdeService, StartResponse, UrlParams};
use gs_core::{IdeType, Infrastructure};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum AccessUrlError {
    #[error("no access url for IDE type {0}")]
    Unsupported(IdeType),
    #[error("no published port for container port {0}")]
    MissingPort(u16),
    #[error("invalid published port for container port {port}: {value:?}")]
    InvalidPort { port: u16, value: String },
    #[error(transparent)]
    Ide(#[from] IdeError),
}

/// Port the user connects to for the IDE's container port.
///
/// A mapping with a non-zero published port means the infrastructure
/// forwards traffic itself, so its forwarded port wins. Otherwise the port the
/// container runtime published is used.
pub fn resolve_forwarded_port(
    infra: &Infrastructure,
    ide_port: u16,
    response: &StartResponse,
) -> Result<u16, AccessUrlError> {
    if let Some(mapping) = infra.gitspace_port_mappings.get(&ide_port) {
        if mapping.published_port != 0 {
            return Ok(mapping.forwarded_port);
        }
    }
    let value = response
        .published_ports
        .get(&ide_port)
        .ok_or(AccessUrlError::MissingPort(ide_port))?;
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| AccessUrlError::InvalidPort {
            port: ide_port,
            value: value.clone(),
        })
}

/// Build the URL that opens the started gitspace in its IDE.
///
/// The proxy host, when set, replaces the gitspace host.
pub fn access_url(
    infra: &Infrastructure,
    ide: &dyn IdeService,
    response: &StartResponse,
    user: &str,
) -> Result<Url, AccessUrlError> {
    match ide.ide_type() {
        IdeType::VsCode | IdeType::VsCodeWeb => {}
        other => return Err(AccessUrlError::Unsupported(other)),
    }
    let port = resolve_forwarded_port(infra, ide.port().port, response)?;
    let params = UrlParams {
        absolute_repo_path: &response.absolute_repo_path,
        host: infra.effective_host(),
        port,
        scheme: &infra.gitspace_scheme,
        user,
    };
    Ok(ide.generate_url(&params)?)
}

#[cfg(test)]
#[path = "access_url_tests.rs"]
mod tests;
