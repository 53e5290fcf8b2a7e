// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest model construction.
//!
//! ```text
//! Settings ------------> [package]
//! Dependency[] --scope-> [dependencies] / [dev-dependencies]
//! Feature[] -----------> [features] (+ synthesized "default")
//! ```
//!
//! Duplicate dependency names within a scope: last one wins, keeping the
//! position of the first occurrence.

use serde_json::Value;
use tracing::{debug, warn};

use super::dependency::{Dependency, DependencyScope};
use super::types::{Feature, Settings};
use super::{EDITION, ManifestTable};

/// Key of the synthesized default feature set.
pub const DEFAULT_FEATURE: &str = "default";

/// Build the manifest tree from typed inputs.
///
/// Top-level keys are always `package`, `dependencies`, `dev-dependencies`
/// and `features`, in that order.
#[must_use]
pub fn build_manifest(
    settings: &Settings,
    dependencies: &[Dependency],
    features: &[Feature],
) -> ManifestTable {
    let mut manifest = ManifestTable::new();
    manifest.insert("package".into(), Value::Object(package_table(settings)));
    for scope in [DependencyScope::Compile, DependencyScope::Dev] {
        manifest.insert(
            scope.section().into(),
            Value::Object(dependency_table(dependencies, scope)),
        );
    }
    manifest.insert("features".into(), Value::Object(features_table(features)));

    debug!(
        package = settings.name(),
        dependencies = dependencies.len(),
        features = features.len(),
        "built manifest model"
    );
    manifest
}

/// The `[package]` section. Absent optional fields are left out.
#[must_use]
pub fn package_table(settings: &Settings) -> ManifestTable {
    let mut package = ManifestTable::new();
    package.insert("name".into(), Value::from(settings.name()));
    package.insert("version".into(), Value::from(settings.version()));
    if !settings.authors().is_empty() {
        package.insert("authors".into(), Value::from(settings.authors().to_vec()));
    }
    if let Some(description) = settings.description() {
        package.insert("description".into(), Value::from(description));
    }
    package.insert("edition".into(), Value::from(EDITION));
    if let Some(rust_version) = settings.rust_version() {
        package.insert("rust-version".into(), Value::from(rust_version));
    }
    package.insert("license".into(), Value::from(settings.license()));
    if let Some(repository) = settings.repository() {
        package.insert("repository".into(), Value::from(repository));
    }
    package
}

/// Dependencies of one scope, keyed by name.
#[must_use]
pub fn dependency_table(dependencies: &[Dependency], scope: DependencyScope) -> ManifestTable {
    let mut table = ManifestTable::new();
    for dependency in dependencies.iter().filter(|d| d.scope == scope) {
        let previous = table.insert(
            dependency.name.clone(),
            Value::Object(dependency.to_table()),
        );
        if previous.is_some() {
            warn!(
                dependency = %dependency.name,
                section = scope.section(),
                "duplicate dependency, last declaration wins"
            );
        }
    }
    table
}

/// The `[features]` section.
///
/// When at least one feature is declared, a `default` entry listing the
/// default-flagged features is appended last. Duplicate names follow the
/// dependency rule: the last declaration wins, at the first position.
#[must_use]
pub fn features_table(features: &[Feature]) -> ManifestTable {
    let mut table = ManifestTable::new();
    for feature in features {
        let previous = table.insert(
            feature.name().to_string(),
            Value::from(feature.enables().to_vec()),
        );
        if previous.is_some() {
            warn!(
                feature = feature.name(),
                "duplicate feature, last declaration wins"
            );
        }
    }
    if features.is_empty() {
        return table;
    }

    if table.shift_remove(DEFAULT_FEATURE).is_some() {
        warn!("explicit 'default' feature replaced by the synthesized default set");
    }
    let defaults: Vec<&str> = table
        .keys()
        .map(String::as_str)
        .filter(|name| {
            features
                .iter()
                .rev()
                .find(|f| f.name() == *name)
                .is_some_and(Feature::is_default)
        })
        .collect();
    table.insert(DEFAULT_FEATURE.into(), Value::from(defaults));
    table
}
