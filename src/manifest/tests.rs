// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Value, json};

use super::{
    Dependency, DependencyLocation, DependencyScope, Feature, GitReference, ManifestGenerator,
    ManifestTable, Settings,
};
use crate::error::ConstructionError;

fn settings() -> Settings {
    Settings::builder()
        .name("weather")
        .version("0.1.0")
        .license("Apache-2.0")
        .repository("https://example.com/weather")
        .build()
}

#[test]
fn test_scope_parse() {
    insta::assert_json_snapshot!(
        [
            ("compile", DependencyScope::parse_for("x", "compile").map(|s| s.to_string()).ok()),
            ("Dev", DependencyScope::parse_for("x", "Dev").map(|s| s.to_string()).ok()),
            ("build", DependencyScope::parse_for("x", "build").map(|s| s.to_string()).ok()),
        ],
        @r#"
    [
      [
        "compile",
        "compile"
      ],
      [
        "Dev",
        "dev"
      ],
      [
        "build",
        null
      ]
    ]
    "#
    );
}

#[test]
fn test_unknown_scope_names_dependency() {
    let err = DependencyScope::parse_for("tokio", "build").unwrap_err();
    assert!(matches!(
        err,
        ConstructionError::UnknownScope { ref dependency, ref scope }
            if dependency == "tokio" && scope == "build"
    ));
}

#[test]
fn test_scope_sections() {
    assert_eq!(DependencyScope::Compile.section(), "dependencies");
    assert_eq!(DependencyScope::Dev.section(), "dev-dependencies");
    assert_eq!(DependencyScope::default(), DependencyScope::Compile);
}

#[test]
fn test_crates_io_dependency_minimal_attributes() {
    let dependency = Dependency::builder()
        .name("serde")
        .location(DependencyLocation::crates_io("1.0"))
        .build();
    assert_eq!(Value::Object(dependency.to_table()), json!({"version": "1.0"}));
}

#[test]
fn test_dependency_attribute_order() {
    let dependency = Dependency::builder()
        .name("aws-smithy-types")
        .location(DependencyLocation::Local {
            path: "../rust-runtime/aws-smithy-types".to_string(),
            version: Some("0.60".to_string()),
        })
        .features(vec!["serde".to_string()])
        .optional(true)
        .default_features(false)
        .build();

    insta::assert_json_snapshot!(dependency.to_table(), @r#"
    {
      "path": "../rust-runtime/aws-smithy-types",
      "version": "0.60",
      "default-features": false,
      "features": [
        "serde"
      ],
      "optional": true
    }
    "#);
}

#[test]
fn test_git_dependency_reference() {
    let pinned = Dependency::builder()
        .name("hyper")
        .location(DependencyLocation::Git {
            url: "https://github.com/hyperium/hyper".to_string(),
            reference: Some(GitReference::Rev("abc123".to_string())),
        })
        .build();
    assert_eq!(
        Value::Object(pinned.to_table()),
        json!({"git": "https://github.com/hyperium/hyper", "rev": "abc123"})
    );

    let floating = Dependency::builder()
        .name("hyper")
        .location(DependencyLocation::git("https://github.com/hyperium/hyper"))
        .build();
    assert_eq!(
        Value::Object(floating.to_table()),
        json!({"git": "https://github.com/hyperium/hyper"})
    );
}

#[test]
fn test_generator_without_customizations() {
    let settings = settings();
    let dependencies = [Dependency::builder()
        .name("serde")
        .location(DependencyLocation::crates_io("1.0"))
        .build()];
    let features = [Feature::new("serde-derive", ["serde/derive"], true)];

    let tree = ManifestGenerator::builder()
        .settings(&settings)
        .dependencies(&dependencies)
        .features(&features)
        .build()
        .tree();

    assert_eq!(tree["dependencies"], json!({"serde": {"version": "1.0"}}));
    assert_eq!(tree["dev-dependencies"], json!({}));
    assert_eq!(
        tree["features"],
        json!({"serde-derive": ["serde/derive"], "default": ["serde-derive"]})
    );
}

#[test]
fn test_generator_applies_customizations() {
    let settings = settings();
    let customizations: ManifestTable = match json!({
        "package": { "name": "weather-sdk", "repository": null, "publish": false },
        "lib": { "doctest": false }
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    let generator = ManifestGenerator::builder()
        .settings(&settings)
        .customizations(&customizations)
        .build();

    let mut out = Vec::new();
    generator.render(&mut out).unwrap();
    let reparsed: toml::Table = toml::from_str(&String::from_utf8(out).unwrap()).unwrap();

    let package = reparsed["package"].as_table().unwrap();
    assert_eq!(package["name"].as_str(), Some("weather-sdk"));
    assert_eq!(package["publish"].as_bool(), Some(false));
    assert!(!package.contains_key("repository"));
    assert_eq!(reparsed["lib"]["doctest"].as_bool(), Some(false));
}

#[test]
fn test_generator_header() {
    let settings = settings();
    let mut out = Vec::new();
    ManifestGenerator::builder()
        .settings(&settings)
        .header("Code generated by manifest-rs. DO NOT EDIT.")
        .build()
        .render(&mut out)
        .unwrap();

    let rendered = String::from_utf8(out).unwrap();
    assert!(rendered.starts_with("# Code generated by manifest-rs. DO NOT EDIT.\n\n[package]"));
}
