// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use super::render::{merged_tree, render_manifest, run_render_command};
use crate::cli::render::{CustomizationArgs, RenderArgs};
use crate::config::Request;

const REQUEST: &str = r#"
[settings]
name = "weather"
version = "0.1.0"
license = "MIT"

[[dependencies]]
name = "serde"
version = "1.0"

[output]
header = "From request."
"#;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn request_with_customizations(paths: &[PathBuf]) -> Request {
    let mut request = Request::parse(REQUEST).unwrap();
    request.output.customizations = paths.to_vec();
    request
}

fn render(args: &RenderArgs, request: &Request) -> String {
    String::from_utf8(render_manifest(args, request).unwrap()).unwrap()
}

#[test]
fn test_render_uses_request_header() {
    let request = Request::parse(REQUEST).unwrap();
    let manifest = render(&RenderArgs::default(), &request);
    assert!(manifest.starts_with("# From request.\n\n[package]\n"));
}

#[test]
fn test_render_cli_header_wins() {
    let request = Request::parse(REQUEST).unwrap();
    let args = RenderArgs {
        header: Some("From CLI.".to_string()),
        ..Default::default()
    };
    let manifest = render(&args, &request);
    assert!(manifest.starts_with("# From CLI.\n\n"));
    assert!(!manifest.contains("From request."));
}

#[test]
fn test_render_applies_customizations_in_order() {
    let temp = temp_dir();
    let first = temp.path().join("first.json");
    let second = temp.path().join("second.toml");
    std::fs::write(&first, r#"{"package": {"edition": "2021", "publish": false}}"#).unwrap();
    std::fs::write(&second, "[package]\nedition = \"2018\"\n").unwrap();

    let request = request_with_customizations(std::slice::from_ref(&first));
    let args = RenderArgs {
        customizations: CustomizationArgs {
            files: vec![second],
            disabled: false,
        },
        ..Default::default()
    };

    let manifest = render(&args, &request);
    let parsed: toml::Table = toml::from_str(&manifest).unwrap();
    assert_eq!(parsed["package"]["edition"].as_str(), Some("2018"));
    assert_eq!(parsed["package"]["publish"].as_bool(), Some(false));
}

#[test]
fn test_disabled_customizations_skip_missing_files() {
    let request = request_with_customizations(&[PathBuf::from("does/not/exist.json")]);
    let args = CustomizationArgs {
        files: Vec::new(),
        disabled: true,
    };

    let tree = merged_tree(&args, &request).unwrap();
    assert_eq!(tree["package"]["edition"], json!("2024"));
}

#[test]
fn test_missing_customization_file_fails() {
    let request = request_with_customizations(&[PathBuf::from("does/not/exist.json")]);
    let err = merged_tree(&CustomizationArgs::default(), &request).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: input file not found: does/not/exist.json"
    );
}

#[test]
fn test_merged_tree_keeps_nulls() {
    let temp = temp_dir();
    let path = temp.path().join("drop.json");
    std::fs::write(&path, r#"{"dependencies": {"serde": null}}"#).unwrap();

    let args = CustomizationArgs {
        files: vec![path],
        disabled: false,
    };
    let tree = merged_tree(&args, &Request::parse(REQUEST).unwrap()).unwrap();
    assert_eq!(tree["dependencies"], json!({ "serde": null }));
}

#[test]
fn test_invalid_request_fails() {
    let request = Request::parse("[settings]\nname = \"weather\"\n").unwrap();
    let err = render_manifest(&RenderArgs::default(), &request).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"construction error: settings field 'version' is missing or empty"
    );
}

#[test]
fn test_run_render_command_writes_output_file() {
    let temp = temp_dir();
    let output = temp.path().join("out/Cargo.toml");
    let args = RenderArgs {
        output: Some(output.clone()),
        ..Default::default()
    };
    let request = Request::parse(REQUEST).unwrap();

    run_render_command(&args, &request).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, render(&args, &request));
    let parsed: toml::Table = toml::from_str(&written).unwrap();
    assert_eq!(
        parsed["dependencies"]["serde"]["version"].as_str(),
        Some("1.0")
    );
}
