// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Space path handling.
//!
//! Spaces nest: `acct/org/project`. Secrets are scoped to the root space,
//! the first segment of the path.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpacePathError {
    #[error("space path is empty")]
    Empty,
}

/// Split a space path into its root segment and the remainder.
///
/// `"acct/org/proj"` yields `("acct", "org/proj")`; a single segment yields
/// an empty remainder.
pub fn split_root(path: &str) -> Result<(&str, &str), SpacePathError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(SpacePathError::Empty);
    }
    Ok(trimmed.split_once('/').unwrap_or((trimmed, "")))
}

#[cfg(test)]
#[path = "space_tests.rs"]
mod tests;
