// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for environment overrides

use super::*;
use crate::OrchestratorConfig;
use serial_test::serial;

#[test]
fn blank_values_count_as_unset() {
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some("  ".to_string())), None);
    assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
}

#[test]
#[serial(env)]
fn process_environment_overrides_config() {
    std::env::set_var(GITSPACE_USER_VAR, "vscode");
    std::env::remove_var(DEFAULT_BASE_IMAGE_VAR);

    let config = OrchestratorConfig::default().with_env_overrides();

    std::env::remove_var(GITSPACE_USER_VAR);
    assert_eq!(config.gitspace_user, "vscode");
    assert_eq!(config.default_base_image, crate::DEFAULT_BASE_IMAGE);
}

#[test]
#[serial(env)]
fn unset_variable_reads_as_none() {
    std::env::remove_var(DEFAULT_BASE_IMAGE_VAR);
    assert_eq!(var(DEFAULT_BASE_IMAGE_VAR), None);
}
