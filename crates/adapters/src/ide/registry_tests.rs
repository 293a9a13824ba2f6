// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    vs_code     = { IdeType::VsCode },
    vs_code_web = { IdeType::VsCodeWeb },
)]
fn defaults_cover_vs_code_family(ide: IdeType) {
    let service = IdeRegistry::with_defaults().get(ide).unwrap();
    assert_eq!(service.ide_type(), ide);
}

#[test]
fn unregistered_ide_is_unsupported() {
    let err = IdeRegistry::with_defaults()
        .get(IdeType::Intellij)
        .err()
        .unwrap();
    assert_eq!(err, UnsupportedIde(IdeType::Intellij));
    assert_eq!(err.to_string(), "unsupported IDE type: intellij");
}

#[test]
fn custom_port_replaces_default_service() {
    let registry = IdeRegistry::with_defaults().with(VsCodeWeb::new(9000));
    assert_eq!(registry.get(IdeType::VsCodeWeb).unwrap().port().port, 9000);
}
