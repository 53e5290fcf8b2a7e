// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for request loading.

use manifest_rs::config::Request;
use manifest_rs::config::loader::{InputKind, RequestLoader};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

const BASE: &str = r#"
[settings]
name = "weather"
version = "0.1.0"
license = "MIT"
description = "Base description"

[[dependencies]]
name = "serde"
version = "1.0"
"#;

// =============================================================================
// Layering
// =============================================================================

#[test]
fn request_builder_layered() {
    let request = Request::builder()
        .add_toml_str(BASE)
        .add_toml_str(
            r#"
[settings]
version = "0.2.0"

[output]
header = "Generated."
"#,
        )
        .build()
        .unwrap();

    assert_eq!(request.settings.name, "weather");
    assert_eq!(request.settings.version, "0.2.0");
    assert_eq!(
        request.settings.description.as_deref(),
        Some("Base description")
    );
    assert_eq!(request.dependencies.len(), 1);
    assert_eq!(request.output.header.as_deref(), Some("Generated."));
}

#[test]
fn request_builder_set_override() {
    let request = Request::builder()
        .add_toml_str(BASE)
        .set("settings.license", "Apache-2.0")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(request.settings.license, "Apache-2.0");
}

#[test]
fn request_env_vars_override_files() {
    let vars = [
        ("MANIFEST_SETTINGS__VERSION", "9.9.9"),
        ("MANIFEST_OUTPUT__HEADER", "From env."),
    ]
    .map(|(name, value)| (name.to_string(), value.to_string()));

    let request = Request::builder()
        .add_toml_str(BASE)
        .with_env_vars("MANIFEST", vars)
        .build()
        .unwrap();

    assert_eq!(request.settings.version, "9.9.9");
    assert_eq!(request.output.header.as_deref(), Some("From env."));
}

#[test]
fn request_ignores_unrelated_env_vars() {
    let vars = [
        ("MANIFEST_DIR", "/tmp"),
        ("MANIFEST_PATH", "/tmp/Cargo.toml"),
        ("CARGO_MANIFEST_DIR", "/src"),
        ("MANIFEST_SETTINGS__LICENSE", "Apache-2.0"),
    ]
    .map(|(name, value)| (name.to_string(), value.to_string()));

    let request = Request::builder()
        .add_toml_str(BASE)
        .with_env_vars("MANIFEST", vars)
        .build()
        .unwrap();

    assert_eq!(request.settings.license, "Apache-2.0");
    assert_eq!(request.settings.version, "0.1.0");
}

#[test]
fn request_set_wins_over_env() {
    let vars = [("MANIFEST_SETTINGS__VERSION".to_string(), "9.9.9".to_string())];

    let request = Request::builder()
        .add_toml_str(BASE)
        .with_env_vars("MANIFEST", vars)
        .set("settings.version", "3.0.0")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(request.settings.version, "3.0.0");
}

#[test]
fn request_files_in_order() {
    let temp = temp_dir();
    let base = temp.path().join("manifest.toml");
    let local = temp.path().join("manifest.local.toml");
    std::fs::write(&base, BASE).unwrap();
    std::fs::write(&local, "[settings]\nrust_version = \"1.85\"\n").unwrap();

    let loader = RequestLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .add_toml_file_optional(temp.path().join("absent.toml"));
    let listed = loader.format_loaded_files();
    let kinds: Vec<_> = loader.loaded_inputs().iter().map(|input| input.kind).collect();
    assert_eq!(kinds, [InputKind::Required, InputKind::Optional]);
    let request = loader.build().unwrap();

    assert_eq!(request.settings.rust_version.as_deref(), Some("1.85"));
    assert_eq!(
        listed,
        [
            format!("1. [file] {}", base.display()),
            format!("2. [optional] {}", local.display()),
        ]
    );
}

#[test]
fn request_required_file_missing() {
    let temp = temp_dir();
    let result = Request::from_file(temp.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn request_invalid_toml() {
    assert!(Request::parse("[settings\nname = ").is_err());
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn request_inputs_preserve_declaration_order() {
    let request = Request::parse(
        r#"
[settings]
name = "weather"
version = "0.1.0"
license = "MIT"

[[dependencies]]
name = "tokio"
version = "1"

[[dependencies]]
name = "anyhow"
version = "1"

[[features]]
name = "zeta"

[[features]]
name = "alpha"
"#,
    )
    .unwrap();

    let inputs = request.to_inputs().unwrap();
    let dependencies: Vec<_> = inputs.dependencies.iter().map(|d| d.name.as_str()).collect();
    let features: Vec<_> = inputs.features.iter().map(|f| f.name()).collect();
    assert_eq!(dependencies, ["tokio", "anyhow"]);
    assert_eq!(features, ["zeta", "alpha"]);
}
